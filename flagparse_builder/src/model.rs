use std::str::FromStr;

use crate::api::InvalidConversion;

/// The declared kind of an option.
///
/// Fixed when the option is declared; it never changes afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// A switch: matching the flag sets it to `true`, no value is consumed.
    Bool,
    /// A signed integer, taken from the token following the flag.
    Int,
    /// Free text, taken verbatim from the token following the flag.
    String,
}

impl Kind {
    /// Whether matching a flag of this kind consumes the next token as its value.
    pub fn takes_value(&self) -> bool {
        !matches!(self, Kind::Bool)
    }

    pub(crate) fn convert(&self, token: &str) -> Result<Value, InvalidConversion> {
        match self {
            Kind::Bool => bool::from_str(token)
                .map(Value::Bool)
                .map_err(|_| InvalidConversion::new(token, *self)),
            Kind::Int => i64::from_str(token)
                .map(Value::Int)
                .map_err(|_| InvalidConversion::new(token, *self)),
            Kind::String => Ok(Value::Str(token.to_string())),
        }
    }
}

impl std::fmt::Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Kind::Bool => write!(f, "bool"),
            Kind::Int => write!(f, "int"),
            Kind::String => write!(f, "string"),
        }
    }
}

/// The current value of an option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// Value of a [`Kind::Bool`] option.
    Bool(bool),
    /// Value of a [`Kind::Int`] option.
    Int(i64),
    /// Value of a [`Kind::String`] option.
    Str(String),
}

impl Value {
    /// The kind this value belongs to.
    pub fn kind(&self) -> Kind {
        match self {
            Value::Bool(_) => Kind::Bool,
            Value::Int(_) => Kind::Int,
            Value::Str(_) => Kind::String,
        }
    }
}
