//! Model error model.

use thiserror::Error;

/// Result type used across the model layer.
pub type ModelResult<T> = Result<T, ModelError>;

/// Model-level error.
///
/// Raised while rebuilding a model from an attribute mapping. Field values are
/// never validated beyond their shape; storage failures are a separate type
/// (see [`crate::StorageError`]).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ModelError {
    /// A required attribute was absent from the mapping.
    #[error("missing attribute: {0}")]
    MissingAttribute(String),

    /// An attribute was present but had the wrong shape.
    #[error("invalid attribute `{field}`: {reason}")]
    InvalidAttribute { field: String, reason: String },

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// A timestamp could not be parsed from its textual form.
    #[error("invalid timestamp: {0}")]
    InvalidTimestamp(String),

    /// The mapping's type-discriminator names a different model.
    #[error("class mismatch (expected: {expected}, found: {found})")]
    ClassMismatch { expected: String, found: String },

    /// The mapping's type-discriminator names no known model.
    #[error("unknown class: {0}")]
    UnknownClass(String),

    /// A model invariant was violated.
    #[error("invariant violated: {0}")]
    InvariantViolation(String),
}

impl ModelError {
    pub fn missing(field: impl Into<String>) -> Self {
        Self::MissingAttribute(field.into())
    }

    pub fn invalid(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidAttribute {
            field: field.into(),
            reason: reason.into(),
        }
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn invalid_timestamp(msg: impl Into<String>) -> Self {
        Self::InvalidTimestamp(msg.into())
    }

    pub fn class_mismatch(expected: impl Into<String>, found: impl Into<String>) -> Self {
        Self::ClassMismatch {
            expected: expected.into(),
            found: found.into(),
        }
    }

    pub fn unknown_class(class: impl Into<String>) -> Self {
        Self::UnknownClass(class.into())
    }

    pub fn invariant(msg: impl Into<String>) -> Self {
        Self::InvariantViolation(msg.into())
    }
}
