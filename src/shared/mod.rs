//! Shared Types Module
//!
//! Types that appear on the wire or are needed by both the server and its
//! tests: the board and card entities, their creation payloads, validation
//! errors and the application configuration.
//!
//! # Architecture
//!
//! - **`board`** - `Board` entity and `NewBoard` payload
//! - **`card`** - `Card` entity and `NewCard` payload
//! - **`error`** - `SharedError` for payload validation
//! - **`config`** - `AppConfig` and its builder
//!
//! All entities derive `Serialize`/`Deserialize` and `sqlx::FromRow` so a row
//! fetched from the store can be returned to the client unchanged.

/// Board entity and creation payload
pub mod board;

/// Card entity and creation payload
pub mod card;

/// Shared error types
pub mod error;

/// Application configuration
pub mod config;

/// Re-export commonly used types for convenience
pub use board::{Board, NewBoard, MAX_TITLE_LEN};
pub use card::{Card, NewCard};
pub use error::SharedError;
pub use config::{AppConfig, AppConfigBuilder, ConfigError};
