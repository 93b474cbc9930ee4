//! Boards Module
//!
//! Persistence and HTTP handlers for boards.

pub mod handlers;
pub mod db;

pub use handlers::*;
