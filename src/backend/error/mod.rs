//! Backend Error Module
//!
//! Error types used by the handlers and the server bootstrap, plus their
//! conversion into HTTP responses.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - BackendError definition and constructors
//! └── conversion.rs - IntoResponse and extractor rejection conversions
//! ```
//!
//! # HTTP Response Conversion
//!
//! `BackendError` implements `IntoResponse`; the response body is always
//! `{"message": "..."}`. Extractor rejections for JSON bodies and path ids
//! convert into 400 errors so handlers can use `?` on them.

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use types::BackendError;
