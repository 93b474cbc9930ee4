//! Server Module
//!
//! Server initialization and configuration for the Axum HTTP server.
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs          - Module exports and documentation
//! ├── state.rs        - AppState and FromRef implementations
//! ├── config.rs       - Configuration and database loading
//! └── init.rs         - App creation and the serve loop
//! ```
//!
//! # Initialization Flow
//!
//! 1. **Configuration Loading**: defaults, TOML file, environment
//! 2. **Database**: open the SQLite pool and create the schema
//! 3. **Router Creation**: routes, tracing and CORS layers
//! 4. **Serve**: until Ctrl-C or SIGTERM
//!
//! # Example
//!
//! ```rust,no_run
//! use kanban::backend::server::{config::load_config, init::run};
//!
//! # async fn example() -> Result<(), kanban::backend::error::BackendError> {
//! let config = load_config()?;
//! run(config).await
//! # }
//! ```

/// Application state management
pub mod state;

/// Server configuration loading
pub mod config;

/// Server initialization
pub mod init;

// Re-export commonly used types
pub use state::AppState;
pub use init::{build_app, create_app, run};
