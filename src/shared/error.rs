//! Shared Error Types
//!
//! Error types produced while validating and (de)serializing the wire types
//! in [`crate::shared`]. Handlers convert them into HTTP responses through
//! `BackendError`.
//!
//! # Error Categories
//!
//! - `SerializationError` - JSON serialization/deserialization failures
//! - `ValidationError` - A request field failed validation
//!
//! # Usage
//!
//! ```rust
//! use yatube::shared::error::SharedError;
//!
//! let error = SharedError::validation("text", "This field may not be blank.");
//! ```
use thiserror::Error;

/// Errors that can occur while handling request and response bodies
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SharedError {
    /// JSON serialization or deserialization error
    #[error("Serialization error: {message}")]
    SerializationError {
        /// Human-readable error message
        message: String,
    },

    /// Data validation error
    #[error("Validation error in field '{field}': {message}")]
    ValidationError {
        /// The field that failed validation
        field: String,
        /// Human-readable error message
        message: String,
    },
}

impl SharedError {
    /// Create a new serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::SerializationError {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Shorthand for the "field is required" error
    pub fn required(field: impl Into<String>) -> Self {
        Self::validation(field, "This field is required.")
    }

    /// Shorthand for the "field may not be blank" error
    pub fn blank(field: impl Into<String>) -> Self {
        Self::validation(field, "This field may not be blank.")
    }
}

impl From<serde_json::Error> for SharedError {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization(format!("JSON error: {}", err))
    }
}

/// Require a non-blank string field
///
/// Returns the value untouched; whitespace-only input counts as blank.
pub fn require_text(field: &str, value: Option<String>) -> Result<String, SharedError> {
    match value {
        None => Err(SharedError::required(field)),
        Some(text) if text.trim().is_empty() => Err(SharedError::blank(field)),
        Some(text) => Ok(text),
    }
}
