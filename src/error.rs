//! Domain error types

use thiserror::Error;

/// Errors raised by the form domain layer
#[derive(Debug, Error)]
pub enum FormError {
    /// A field name outside the known field set
    #[error("unknown field `{0}`")]
    UnknownField(String),

    /// A value whose kind does not match the field it was assigned to
    #[error("field `{field}` expects a {expected} value, got {actual}")]
    KindMismatch {
        field: &'static str,
        expected: &'static str,
        actual: &'static str,
    },

    /// The file chosen for upload does not exist or is not a regular file
    #[error("file not found: {0}")]
    FileNotFound(String),

    #[error("serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type FormResult<T> = std::result::Result<T, FormError>;
