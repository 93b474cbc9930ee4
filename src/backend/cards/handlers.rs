//! Card HTTP Handlers
//!
//! - `GET /{id}/card` - list a board's cards
//! - `POST /{id}/card` - add a card to a board

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    Json,
};
use sqlx::SqlitePool;

use crate::backend::boards::db::board_exists;
use crate::backend::error::BackendError;
use crate::backend::response::PrettyJson;
use crate::shared::{Card, NewCard};
use super::db;

/// List the cards on a board
///
/// # Errors
///
/// * `400 Bad Request` - If the id is not an integer
/// * `404 Not Found` - If the board does not exist
/// * `500 Internal Server Error` - If a query fails
pub async fn list_board_cards(
    State(pool): State<SqlitePool>,
    board_id: Result<Path<i64>, PathRejection>,
) -> Result<PrettyJson<Vec<Card>>, BackendError> {
    let Path(board_id) = board_id?;

    if !board_exists(&pool, board_id).await? {
        return Err(BackendError::board_not_found());
    }

    let cards = db::list_cards_for_board(&pool, board_id).await?;
    tracing::debug!(board_id, "Listed {} cards", cards.len());
    Ok(PrettyJson(cards))
}

/// Add a card to a board
///
/// The card's `board_id` is taken from the path.
///
/// # Errors
///
/// * `400 Bad Request` - If the id is not an integer or the body is not a
///   JSON object with non-empty `content`
/// * `404 Not Found` - If the board does not exist, including when it is
///   deleted between the existence check and the insert
/// * `500 Internal Server Error` - If a query fails
///
/// # Example Response
///
/// ```json
/// {
///   "id": 3,
///   "content": "Fix bug",
///   "board_id": 1
/// }
/// ```
pub async fn create_card(
    State(pool): State<SqlitePool>,
    board_id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<NewCard>, JsonRejection>,
) -> Result<(StatusCode, PrettyJson<Card>), BackendError> {
    let Path(board_id) = board_id?;
    let Json(new_card) = payload?;
    new_card.validate()?;

    if !board_exists(&pool, board_id).await? {
        return Err(BackendError::board_not_found());
    }

    let card = db::insert_card(&pool, board_id, new_card)
        .await
        .map_err(|e| {
            if db::is_missing_board(&e) {
                BackendError::board_not_found()
            } else {
                BackendError::from(e)
            }
        })?;
    tracing::info!(board_id, card_id = card.id, "Created card");

    Ok((StatusCode::CREATED, PrettyJson(card)))
}
