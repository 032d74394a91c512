mod base;
mod interface;
mod middleware;
mod printer;

pub use base::{ConfigError, IndexError, ParseError};
pub(crate) use base::Parser;
#[cfg(test)]
pub(crate) use interface::util;
pub(crate) use interface::{ConsoleInterface, UserInterface};
pub use middleware::FlagParser;
pub(crate) use printer::{ErrorContext, Printer};
