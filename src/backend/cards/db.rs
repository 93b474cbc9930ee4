//! Database operations for cards

use sqlx::SqlitePool;

use crate::shared::{Card, NewCard};

/// List the cards of one board in id order
///
/// Returns an empty list for a board without cards; callers that need to
/// tell a missing board apart check `board_exists` first.
pub async fn list_cards_for_board(
    pool: &SqlitePool,
    board_id: i64,
) -> Result<Vec<Card>, sqlx::Error> {
    sqlx::query_as::<_, Card>(
        r#"
        SELECT cards.id, cards.content, cards.bid
        FROM cards
        JOIN boards ON cards.bid = boards.id
        WHERE cards.bid = ?
        ORDER BY cards.id
        "#,
    )
    .bind(board_id)
    .fetch_all(pool)
    .await
}

/// Insert a card on a board and return it with its assigned ID
///
/// Fails with a foreign key violation if the board does not exist.
pub async fn insert_card(
    pool: &SqlitePool,
    board_id: i64,
    card: NewCard,
) -> Result<Card, sqlx::Error> {
    let result = sqlx::query("INSERT INTO cards (content, bid) VALUES (?, ?)")
        .bind(&card.content)
        .bind(board_id)
        .execute(pool)
        .await?;

    Ok(card.into_card(result.last_insert_rowid(), board_id))
}

/// Whether an insert failed because the referenced board is gone
pub fn is_missing_board(err: &sqlx::Error) -> bool {
    err.as_database_error()
        .is_some_and(|db_err| db_err.is_foreign_key_violation())
}
