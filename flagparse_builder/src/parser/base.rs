use thiserror::Error;

use crate::api::InvalidConversion;
use crate::model::{Kind, Value};
use crate::registry::Registry;
use crate::tokens::{dashed, Token};

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// An error in how the options were declared.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// The same name was declared more than once.
    /// Short and long names share a single namespace.
    #[error("Config error: cannot duplicate the option '{0}'.")]
    DuplicateOption(String),
}

/// An error encountered while parsing the Cli tokens.
///
/// Parsing stops at the first error.
/// Any options set before that point keep their new values.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    /// A flag name that was never declared.
    #[error("Parse error: unrecognized flag '{}'.", dashed(.name))]
    UnrecognizedFlag {
        /// The name, without dashes.
        name: String,
    },
    /// More than one value-requiring flag inside a single short flag group (ex: `-pq`).
    #[error("Parse error: '{token}' contains more than one flag requiring a value.")]
    ConflictingValueFlags {
        /// The whole flag token.
        token: String,
    },
    /// A value-requiring flag appeared as the final token.
    #[error("Parse error: flag '{}' requires a value.", dashed(.name))]
    MissingValue {
        /// The name, without dashes.
        name: String,
    },
    /// The token following a flag does not convert to the flag's kind.
    #[error("Parse error: '{token}' cannot be used as the value of flag '{}' ({kind}).", dashed(.name))]
    BadValue {
        /// The offending value token.
        token: String,
        /// The name, without dashes.
        name: String,
        /// The kind of the flag.
        kind: Kind,
    },
}

impl ParseError {
    fn bad_value(name: impl Into<String>, error: InvalidConversion) -> Self {
        let InvalidConversion { token, kind } = error;
        ParseError::BadValue {
            token,
            name: name.into(),
            kind,
        }
    }
}

/// A positional argument was requested beyond the end of the positional arguments.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("index {index} is out of range for {length} positional argument(s).")]
pub struct IndexError {
    /// The requested index.
    pub index: usize,
    /// How many positional arguments there are.
    pub length: usize,
}

pub(crate) struct Parser {
    registry: Registry,
}

impl std::fmt::Debug for Parser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Parser{..}").finish()
    }
}

impl Parser {
    #[cfg(test)]
    pub(crate) fn empty() -> Self {
        Self::new(Registry::default()).unwrap()
    }

    pub(crate) fn new(registry: Registry) -> Result<Self, ConfigError> {
        registry.validate()?;
        Ok(Self { registry })
    }

    pub(crate) fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Run a single pass over the tokens, writing matched values through to the registry.
    ///
    /// Unmatched tokens are appended to `positionals` as they are encountered, so they survive an error.
    /// On error, the byte offset of the offending token is returned alongside (the sum of the preceding token lengths).
    pub(crate) fn consume(
        &self,
        tokens: &[&str],
        positionals: &mut Vec<String>,
    ) -> Result<(), (usize, ParseError)> {
        let mut token_iter = tokens.iter();
        let mut fed = 0;

        while let Some(token) = token_iter.next() {
            let offset = fed;
            fed += token.len();

            let flag = match Token::classify(token) {
                Token::Positional(value) => {
                    #[cfg(feature = "tracing_debug")]
                    {
                        debug!("Token '{value}' is positional.");
                    }

                    positionals.push(value.to_string());
                    continue;
                }
                flag => flag,
            };

            // Only one name per flag token may take the following token as its value.
            let mut value_taken = false;

            for name in flag.names() {
                let entry = self
                    .registry
                    .lookup(&name)
                    .ok_or_else(|| (offset, ParseError::UnrecognizedFlag { name: name.clone() }))?;

                if !entry.kind().takes_value() {
                    #[cfg(feature = "tracing_debug")]
                    {
                        debug!("Switched flag '{name}' on.");
                    }

                    entry.store(Value::Bool(true));
                    continue;
                }

                if value_taken {
                    return Err((
                        offset,
                        ParseError::ConflictingValueFlags {
                            token: token.to_string(),
                        },
                    ));
                }

                value_taken = true;
                let value = token_iter
                    .next()
                    .ok_or_else(|| (fed, ParseError::MissingValue { name: name.clone() }))?;
                let value_offset = fed;
                fed += value.len();
                let converted = entry
                    .kind()
                    .convert(value)
                    .map_err(|error| (value_offset, ParseError::bad_value(&name, error)))?;

                #[cfg(feature = "tracing_debug")]
                {
                    debug!("Captured '{value}' into flag '{name}'.");
                }

                entry.store(converted);
            }
        }

        Ok(())
    }
}
