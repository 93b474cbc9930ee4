//! Cards Module
//!
//! Persistence and HTTP handlers for the cards on a board.

pub mod handlers;
pub mod db;

pub use handlers::*;
