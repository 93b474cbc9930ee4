/**
 * Backend Error Types
 *
 * This module defines the error type returned by every handler and by the
 * server bootstrap. Each variant knows its HTTP status code, so handlers can
 * propagate with `?` and let `IntoResponse` build the reply.
 *
 * # Error Categories
 *
 * ## Client Errors
 *
 * - Malformed or invalid request bodies (400)
 * - Non-numeric path ids (400)
 * - Unknown boards or routes (404)
 *
 * ## Store Errors
 *
 * Any sqlx failure (connection, query, row decoding) maps to 500. The driver
 * message is echoed to the caller in the response body.
 *
 * ## Startup Errors
 *
 * Configuration and I/O errors only occur before the server is listening and
 * terminate the process instead of being sent over HTTP.
 */

use axum::http::StatusCode;
use thiserror::Error;

use crate::shared::{ConfigError, SharedError};

/// Backend-specific error types
///
/// # Usage
///
/// ```rust
/// use kanban::backend::error::BackendError;
/// use axum::http::StatusCode;
///
/// let err = BackendError::bad_request("invalid JSON body");
/// assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
///
/// let err = BackendError::board_not_found();
/// assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
/// ```
#[derive(Debug, Error)]
pub enum BackendError {
    /// Handler error with an explicit status (e.g. unparseable body)
    #[error("Handler error: {message}")]
    HandlerError {
        /// HTTP status code for this error
        status: StatusCode,
        /// Human-readable error message
        message: String,
    },

    /// A referenced resource does not exist
    #[error("Not found: {message}")]
    NotFound {
        message: String,
    },

    /// Query, statement, connection or row decoding failure
    #[error(transparent)]
    DatabaseError(#[from] sqlx::Error),

    /// Validation or serialization error from the shared types
    #[error(transparent)]
    SharedError(#[from] SharedError),

    /// Invalid configuration (startup only)
    #[error(transparent)]
    ConfigError(#[from] ConfigError),

    /// Socket or filesystem error (startup only)
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

impl BackendError {
    /// Create a new handler error with a status code
    pub fn handler(status: StatusCode, message: impl Into<String>) -> Self {
        Self::HandlerError {
            status,
            message: message.into(),
        }
    }

    /// Create a 400 Bad Request error
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::handler(StatusCode::BAD_REQUEST, message)
    }

    /// Create a not found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    /// The not found error every board-scoped route uses
    pub fn board_not_found() -> Self {
        Self::not_found("board not found")
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `HandlerError` - Uses the status code from the error
    /// - `NotFound` - 404 Not Found
    /// - `DatabaseError` - 500 Internal Server Error
    /// - `SharedError` - 400 for validation, 500 for serialization
    /// - `ConfigError` / `IoError` - 500 Internal Server Error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::HandlerError { status, .. } => *status,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::DatabaseError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::SharedError(err) => match err {
                SharedError::ValidationError { .. } => StatusCode::BAD_REQUEST,
                SharedError::SerializationError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            },
            Self::ConfigError(_) | Self::IoError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the message sent to the client
    pub fn message(&self) -> String {
        match self {
            Self::HandlerError { message, .. } => message.clone(),
            Self::NotFound { message } => message.clone(),
            Self::DatabaseError(err) => err.to_string(),
            Self::SharedError(err) => err.to_string(),
            Self::ConfigError(err) => err.to_string(),
            Self::IoError(err) => err.to_string(),
        }
    }
}
