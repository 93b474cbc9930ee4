//! Kanban - Board and Card Tracker Backend
//!
//! A small HTTP backend for a kanban-style tracker: boards contain cards,
//! persisted in SQLite and exposed through a JSON REST surface.
//!
//! # Module Structure
//!
//! The library is organized into two main modules:
//!
//! - **`shared`** - Types that cross the wire
//!   - `Board` and `Card` entities plus their creation payloads
//!   - Payload validation errors
//!   - Application configuration (`AppConfig`)
//!
//! - **`backend`** - Server-side code
//!   - Axum HTTP server, router and CORS policy
//!   - Board and card handlers
//!   - SQLite persistence and schema initialization
//!   - Error types with HTTP response conversion
//!
//! # Usage
//!
//! ```rust,no_run
//! use kanban::backend::server::{config::load_config, init::create_app};
//!
//! # async fn example() -> Result<(), kanban::backend::error::BackendError> {
//! let config = load_config()?;
//! let app = create_app(&config).await?;
//! // Serve `app` with axum::serve
//! # Ok(())
//! # }
//! ```
//!
//! # Routes
//!
//! - `GET /` - List boards
//! - `POST /` - Create a board
//! - `GET /{id}` - Get a board
//! - `DELETE /{id}` - Delete a board and its cards
//! - `GET /{id}/card` - List a board's cards
//! - `POST /{id}/card` - Add a card to a board
//!
//! # Error Handling
//!
//! - `shared::error::SharedError` for payload validation
//! - `shared::config::ConfigError` for configuration problems
//! - `backend::error::BackendError` for everything a handler can hit; it
//!   converts into a JSON response of the form `{"message": "..."}`

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
pub mod backend;
