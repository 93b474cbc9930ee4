//! Board HTTP Handlers
//!
//! Handlers for the board routes:
//!
//! - `GET /` - list boards
//! - `POST /` - create a board
//! - `GET /{id}` - get a board
//! - `DELETE /{id}` - delete a board (cascading to its cards)
//!
//! Extractor rejections are taken as `Result`s and converted with `?`, so a
//! malformed body or id always produces an explicit 400.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    Json,
};
use sqlx::SqlitePool;

use crate::backend::error::BackendError;
use crate::backend::response::{MessageBody, PrettyJson};
use crate::shared::{Board, NewBoard};
use super::db;

/// List all boards
///
/// # Returns
///
/// `200 OK` with an array of boards, `[]` when there are none.
///
/// # Errors
///
/// * `500 Internal Server Error` - If the query fails
pub async fn list_boards(
    State(pool): State<SqlitePool>,
) -> Result<PrettyJson<Vec<Board>>, BackendError> {
    let boards = db::list_boards(&pool).await?;
    tracing::debug!("Listed {} boards", boards.len());
    Ok(PrettyJson(boards))
}

/// Create a board
///
/// # Errors
///
/// * `400 Bad Request` - If the body is not a JSON object with a valid `title`
/// * `500 Internal Server Error` - If the insert fails
///
/// # Example Request
///
/// ```http
/// POST / HTTP/1.1
/// Content-Type: application/json
///
/// {"title": "Sprint 1"}
/// ```
///
/// # Example Response
///
/// ```json
/// {
///   "id": 1,
///   "title": "Sprint 1"
/// }
/// ```
pub async fn create_board(
    State(pool): State<SqlitePool>,
    payload: Result<Json<NewBoard>, JsonRejection>,
) -> Result<(StatusCode, PrettyJson<Board>), BackendError> {
    let Json(new_board) = payload?;
    new_board.validate()?;

    let board = db::insert_board(&pool, new_board).await?;
    tracing::info!(board_id = board.id, "Created board '{}'", board.title);

    Ok((StatusCode::CREATED, PrettyJson(board)))
}

/// Get a board by id
///
/// # Errors
///
/// * `400 Bad Request` - If the id is not an integer
/// * `404 Not Found` - If no board has this id
/// * `500 Internal Server Error` - If the query fails
pub async fn get_board(
    State(pool): State<SqlitePool>,
    board_id: Result<Path<i64>, PathRejection>,
) -> Result<PrettyJson<Board>, BackendError> {
    let Path(board_id) = board_id?;

    db::get_board(&pool, board_id)
        .await?
        .map(PrettyJson)
        .ok_or_else(BackendError::board_not_found)
}

/// Delete a board and, through the foreign key cascade, all of its cards
///
/// # Errors
///
/// * `400 Bad Request` - If the id is not an integer
/// * `404 Not Found` - If no row was deleted
/// * `500 Internal Server Error` - If the statement fails, or if it somehow
///   removed more than one row
pub async fn delete_board(
    State(pool): State<SqlitePool>,
    board_id: Result<Path<i64>, PathRejection>,
) -> Result<PrettyJson<MessageBody>, BackendError> {
    let Path(board_id) = board_id?;

    match db::delete_board(&pool, board_id).await? {
        0 => Err(BackendError::board_not_found()),
        1 => {
            tracing::info!(board_id, "Deleted board");
            Ok(PrettyJson(MessageBody::new("board deleted")))
        }
        // id is the primary key, so this cannot happen
        rows => Err(BackendError::handler(
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("delete of board {} removed {} rows", board_id, rows),
        )),
    }
}
