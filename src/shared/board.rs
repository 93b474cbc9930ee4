/**
 * Board Data Structure
 *
 * This module defines the `Board` entity stored in the `boards` table and
 * the `NewBoard` payload accepted by `POST /`.
 *
 * A board's id is assigned by the store on insert and never changes. The
 * title is required, must not be blank and is limited to `MAX_TITLE_LEN`
 * characters, matching the `VARCHAR(30)` column.
 */
use serde::{Deserialize, Serialize};

use crate::shared::error::SharedError;

/// Maximum number of characters in a board title
pub const MAX_TITLE_LEN: usize = 30;

/// A board as stored and as returned to clients
///
/// # Example
/// ```rust
/// use kanban::shared::Board;
///
/// let board = Board { id: 1, title: "Sprint 1".to_string() };
/// let json = serde_json::to_string(&board).unwrap();
/// assert_eq!(json, r#"{"id":1,"title":"Sprint 1"}"#);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, sqlx::FromRow)]
pub struct Board {
    /// Store-assigned identifier
    pub id: i64,
    /// Board title
    pub title: String,
}

/// Request body for creating a board
///
/// Any `id` sent by the client is ignored; unknown fields are dropped.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewBoard {
    pub title: String,
}

impl NewBoard {
    pub fn new(title: impl Into<String>) -> Self {
        Self { title: title.into() }
    }

    /// Check the title against the column constraints
    ///
    /// # Errors
    ///
    /// Returns `SharedError::ValidationError` on field `title` when the title
    /// is blank or longer than `MAX_TITLE_LEN` characters.
    pub fn validate(&self) -> Result<(), SharedError> {
        if self.title.trim().is_empty() {
            return Err(SharedError::validation("title", "title must not be empty"));
        }

        let len = self.title.chars().count();
        if len > MAX_TITLE_LEN {
            return Err(SharedError::validation(
                "title",
                format!("title must be at most {} characters, got {}", MAX_TITLE_LEN, len),
            ));
        }

        Ok(())
    }

    /// Attach the store-assigned id, producing the persisted entity
    pub fn into_board(self, id: i64) -> Board {
        Board { id, title: self.title }
    }
}
