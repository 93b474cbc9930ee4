//! Common test utilities and helpers
//!
//! - Temporary database fixtures
//! - Test server construction
//! - Custom assertion macros


// Re-export commonly used utilities
pub use database::*;
pub use server::*;
