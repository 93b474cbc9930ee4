//! Database operations for boards
//!
//! Every statement binds its values; nothing is interpolated into SQL.

use sqlx::SqlitePool;

use crate::shared::{Board, NewBoard};

/// List all boards in id order
pub async fn list_boards(pool: &SqlitePool) -> Result<Vec<Board>, sqlx::Error> {
    sqlx::query_as::<_, Board>(
        r#"
        SELECT id, title
        FROM boards
        ORDER BY id
        "#,
    )
    .fetch_all(pool)
    .await
}

/// Get a board by ID
pub async fn get_board(pool: &SqlitePool, board_id: i64) -> Result<Option<Board>, sqlx::Error> {
    sqlx::query_as::<_, Board>(
        r#"
        SELECT id, title
        FROM boards
        WHERE id = ?
        "#,
    )
    .bind(board_id)
    .fetch_optional(pool)
    .await
}

/// Check whether a board with this ID exists
pub async fn board_exists(pool: &SqlitePool, board_id: i64) -> Result<bool, sqlx::Error> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM boards WHERE id = ?")
        .bind(board_id)
        .fetch_one(pool)
        .await?;

    Ok(count > 0)
}

/// Insert a board and return it with its assigned ID
pub async fn insert_board(pool: &SqlitePool, board: NewBoard) -> Result<Board, sqlx::Error> {
    let result = sqlx::query("INSERT INTO boards (title) VALUES (?)")
        .bind(&board.title)
        .execute(pool)
        .await?;

    Ok(board.into_board(result.last_insert_rowid()))
}

/// Delete a board, returning the number of rows removed
///
/// The store cascades the delete to the board's cards.
pub async fn delete_board(pool: &SqlitePool, board_id: i64) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM boards WHERE id = ?")
        .bind(board_id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected())
}
