//! Route Configuration Module
//!
//! This module configures all HTTP routes for the backend server.
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs          - Module exports and documentation
//! ├── router.rs       - Router assembly, tracing and CORS layers
//! └── board_routes.rs - Board and card endpoints
//! ```
//!
//! # Route Order
//!
//! 1. **Board Routes** - `/`, `/{id}`, `/{id}/card`
//! 2. **Fallback Handlers** - JSON 404 for unknown paths, JSON 405 for
//!    known paths with an unsupported method

/// Main router creation
pub mod router;

/// Board and card routes
pub mod board_routes;

// Re-export commonly used functions
pub use router::create_router;
