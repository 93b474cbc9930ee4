//! Backend Module
//!
//! All server-side code: an Axum HTTP server over a SQLite store.
//!
//! # Architecture
//!
//! - **`server`** - Configuration loading, application state, startup and serve loop
//! - **`routes`** - Route registration, tracing and CORS layers
//! - **`boards`** - Board persistence and handlers
//! - **`cards`** - Card persistence and handlers
//! - **`db`** - Connection pool and schema initialization
//! - **`response`** - Pretty-printed JSON responder
//! - **`error`** - Backend error type and its HTTP conversion
//!
//! # Request Flow
//!
//! ```text
//! request → router → handler → boards::db / cards::db → SQLite
//!                       ↓
//!            PrettyJson or BackendError → response
//! ```
//!
//! # Concurrency
//!
//! Each connection is served on its own tokio task by axum. Handlers are
//! stateless; the only shared resource is the `SqlitePool` held in
//! `AppState`. No application-level locking is done: concurrent writes are
//! ordered by SQLite.

/// Server initialization and state
pub mod server;

/// Route configuration
pub mod routes;

/// Board persistence and handlers
pub mod boards;

/// Card persistence and handlers
pub mod cards;

/// Connection pool and schema
pub mod db;

/// JSON response formatting
pub mod response;

/// Backend error types
pub mod error;

// Re-export commonly used types
pub use error::BackendError;
pub use server::AppState;
