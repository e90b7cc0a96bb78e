//! Error types for the field normalizers.
//!
//! Every failure carries structured data (the offending character, the
//! digit bounds, the rejected candidate) so callers can branch on
//! [`ErrorKind`] without matching on message text. The `Display` output is
//! the human-readable message a host form layer attaches to a field.

use thiserror::Error;

/// Result type alias for normalizer operations.
pub type NormalizeResult<T> = Result<T, NormalizeError>;

/// Structural violations reported by strict `parse` and non-degrading `format`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum NormalizeError {
    /// Input has a shape the normalizer does not accept
    #[error("Invalid value type: {found}")]
    InvalidType { found: String },

    /// Disallowed character encountered
    #[error("Invalid character '{character}' in phone number")]
    InvalidCharacter { character: char },

    /// Not enough digits
    #[error("Not enough digits in phone number: {length} (minimum {min})")]
    TooShort { length: usize, min: usize },

    /// Too many digits
    #[error("Too many digits in phone number: {length} (maximum {max})")]
    TooLong { length: usize, max: usize },

    /// Pattern match failed
    #[error("Malformed value '{value}': {reason}")]
    MalformedSyntax { value: String, reason: String },

    /// Array-shaped input has the wrong arity
    #[error("Expected {expected} elements, found {found}")]
    WrongElementCount { expected: usize, found: usize },

    /// Caller misuse
    #[error("Invalid argument '{parameter}': {reason}")]
    InvalidArgument { parameter: String, reason: String },

    /// Free-text date could not be interpreted
    #[error("Unrecognized flag or date value '{value}'")]
    UnrecognizedDate { value: String },

    /// Unexpected internal state
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Fieldless discriminant of [`NormalizeError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidType,
    InvalidCharacter,
    TooShort,
    TooLong,
    MalformedSyntax,
    WrongElementCount,
    InvalidArgument,
    UnrecognizedDate,
    Internal,
}

impl NormalizeError {
    /// Returns the kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidType { .. } => ErrorKind::InvalidType,
            Self::InvalidCharacter { .. } => ErrorKind::InvalidCharacter,
            Self::TooShort { .. } => ErrorKind::TooShort,
            Self::TooLong { .. } => ErrorKind::TooLong,
            Self::MalformedSyntax { .. } => ErrorKind::MalformedSyntax,
            Self::WrongElementCount { .. } => ErrorKind::WrongElementCount,
            Self::InvalidArgument { .. } => ErrorKind::InvalidArgument,
            Self::UnrecognizedDate { .. } => ErrorKind::UnrecognizedDate,
            Self::Internal(_) => ErrorKind::Internal,
        }
    }

    pub(crate) fn invalid_type(found: impl Into<String>) -> Self {
        Self::InvalidType {
            found: found.into(),
        }
    }

    pub(crate) fn malformed(value: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedSyntax {
            value: value.into(),
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid_argument(parameter: &str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            parameter: parameter.to_string(),
            reason: reason.into(),
        }
    }
}
