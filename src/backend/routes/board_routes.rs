/**
 * Board and Card Routes
 *
 * # Routes
 *
 * - `GET /` - List boards
 * - `POST /` - Create a board
 * - `GET /{id}` - Get a board
 * - `DELETE /{id}` - Delete a board and its cards
 * - `GET /{id}/card` - List the cards on a board
 * - `POST /{id}/card` - Add a card to a board
 */

use axum::{routing::get, Router};

use crate::backend::boards::{create_board, delete_board, get_board, list_boards};
use crate::backend::cards::{create_card, list_board_cards};
use crate::backend::server::state::AppState;

/// Configure the board and card routes
///
/// # Arguments
///
/// * `router` - The router to add routes to
///
/// # Returns
///
/// Router with the six board/card routes configured
pub fn configure_board_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/", get(list_boards).post(create_board))
        .route("/{id}", get(get_board).delete(delete_board))
        .route("/{id}/card", get(list_board_cards).post(create_card))
}
