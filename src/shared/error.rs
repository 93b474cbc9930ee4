//! Shared Error Types
//!
//! Errors raised by the shared types themselves, independent of HTTP.
//!
//! # Error Categories
//!
//! - `SerializationError` - JSON serialization/deserialization failures
//! - `ValidationError` - A payload field violates a constraint
//!
//! # Usage
//!
//! ```rust
//! use kanban::shared::error::SharedError;
//!
//! let error = SharedError::validation("title", "title must not be empty");
//! assert!(error.to_string().contains("title"));
//! ```

use thiserror::Error;

/// Errors produced by shared payload types
#[derive(Debug, Error, Clone)]
pub enum SharedError {
    /// JSON encoding or decoding failed
    #[error("Serialization error: {message}")]
    SerializationError {
        message: String,
    },

    /// A field of a request payload is invalid
    #[error("Validation error in field '{field}': {message}")]
    ValidationError {
        /// Name of the offending field
        field: String,
        /// What is wrong with it
        message: String,
    },
}

impl SharedError {
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::SerializationError {
            message: message.into(),
        }
    }

    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl From<serde_json::Error> for SharedError {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization(format!("JSON error: {}", err))
    }
}
