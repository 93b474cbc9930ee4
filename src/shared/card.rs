//! Card Data Structure
//!
//! `Card` is a row of the `cards` table; `NewCard` is the body of
//! `POST /{id}/card`. The owning board always comes from the request path,
//! never from the body.

use serde::{Deserialize, Serialize};

use crate::shared::error::SharedError;

/// A card as stored and as returned to clients
///
/// The storage column for the owning board is `bid`; on the wire the field
/// is `board_id`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, sqlx::FromRow)]
pub struct Card {
    pub id: i64,
    pub content: String,
    #[sqlx(rename = "bid")]
    pub board_id: i64,
}

/// Request body for creating a card
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewCard {
    pub content: String,
}

impl NewCard {
    pub fn new(content: impl Into<String>) -> Self {
        Self { content: content.into() }
    }

    /// Reject blank content
    pub fn validate(&self) -> Result<(), SharedError> {
        if self.content.trim().is_empty() {
            return Err(SharedError::validation("content", "content must not be empty"));
        }
        Ok(())
    }

    pub fn into_card(self, id: i64, board_id: i64) -> Card {
        Card {
            id,
            content: self.content,
            board_id,
        }
    }
}
