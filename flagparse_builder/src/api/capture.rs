use thiserror::Error;

use crate::model::Kind;

/// A raw token could not be converted into the kind of its option.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("cannot convert '{token}' to {kind}.")]
pub struct InvalidConversion {
    /// The offending raw token.
    pub token: String,
    /// The kind the token was meant to become.
    pub kind: Kind,
}

impl InvalidConversion {
    pub(crate) fn new(token: impl Into<String>, kind: Kind) -> Self {
        Self {
            token: token.into(),
            kind,
        }
    }
}
