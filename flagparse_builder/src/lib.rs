//! Builder module for `flagparse`.
//! See the `flagparse` crate documentation for full details.
#![deny(missing_docs)]
mod api;
mod model;
mod parser;
mod registry;
mod tokens;

pub use api::*;
pub use model::*;
pub use parser::{ConfigError, FlagParser, IndexError, ParseError};

#[cfg(test)]
#[macro_use]
extern crate assert_matches;
