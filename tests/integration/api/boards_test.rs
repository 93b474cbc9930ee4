//! Board API integration tests
//!
//! Tests for listing, creating, fetching and deleting boards.

use axum::http::StatusCode;
use kanban::shared::Board;
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::common::{create_board, create_card, create_test_server, TestDatabase};

#[tokio::test]
async fn test_list_boards_empty() {
    let db = TestDatabase::new().await;
    let server = create_test_server(&db);

    let response = server.get("/").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.text(), "[]");
}

#[tokio::test]
async fn test_create_board_then_list() {
    let db = TestDatabase::new().await;
    let server = create_test_server(&db);

    let response = server.post("/").json(&json!({ "title": "Sprint 1" })).await;
    assert_eq!(response.status_code(), StatusCode::CREATED);
    let created: Board = response.json();
    assert!(created.id > 0);
    assert_eq!(created.title, "Sprint 1");

    let boards: Vec<Board> = server.get("/").await.json();
    assert_eq!(boards, vec![created]);
}

#[tokio::test]
async fn test_responses_are_pretty_printed() {
    let db = TestDatabase::new().await;
    let server = create_test_server(&db);

    let response = server.post("/").json(&json!({ "title": "Sprint 1" })).await;

    assert_eq!(
        response.headers()[axum::http::header::CONTENT_TYPE],
        "application/json"
    );
    assert_eq!(response.text(), "{\n  \"id\": 1,\n  \"title\": \"Sprint 1\"\n}");
}

#[tokio::test]
async fn test_create_board_ignores_client_id() {
    let db = TestDatabase::new().await;
    let server = create_test_server(&db);

    let first = create_board(&server, "First").await;
    let response = server
        .post("/")
        .json(&json!({ "id": first, "title": "Second" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::CREATED);
    let created: Board = response.json();
    assert_ne!(created.id, first);
}

#[tokio::test]
async fn test_create_board_missing_title() {
    let db = TestDatabase::new().await;
    let server = create_test_server(&db);

    let response = server.post("/").json(&json!({ "name": "Sprint 1" })).await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    crate::assert_error_message!(response, "title");
}

#[tokio::test]
async fn test_create_board_malformed_json() {
    let db = TestDatabase::new().await;
    let server = create_test_server(&db);

    let response = server
        .post("/")
        .text("{\"title\": ")
        .content_type("application/json")
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    assert!(body["message"].is_string());
}

#[tokio::test]
async fn test_create_board_wrong_content_type() {
    let db = TestDatabase::new().await;
    let server = create_test_server(&db);

    let response = server.post("/").text("Sprint 1").await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_board_invalid_title() {
    let db = TestDatabase::new().await;
    let server = create_test_server(&db);

    let blank = server.post("/").json(&json!({ "title": "   " })).await;
    assert_eq!(blank.status_code(), StatusCode::BAD_REQUEST);
    crate::assert_error_message!(blank, "must not be empty");

    let too_long = server
        .post("/")
        .json(&json!({ "title": "x".repeat(31) }))
        .await;
    assert_eq!(too_long.status_code(), StatusCode::BAD_REQUEST);
    crate::assert_error_message!(too_long, "at most 30 characters");

    // nothing was stored
    assert_eq!(server.get("/").await.text(), "[]");
}

#[tokio::test]
async fn test_get_board_round_trip() {
    let db = TestDatabase::new().await;
    let server = create_test_server(&db);
    let id = create_board(&server, "Release 2.0").await;

    let response = server.get(&format!("/{}", id)).await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(
        response.json::<Board>(),
        Board { id, title: "Release 2.0".to_string() }
    );
}

#[tokio::test]
async fn test_get_missing_board() {
    let db = TestDatabase::new().await;
    let server = create_test_server(&db);

    let response = server.get("/404").await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    assert_eq!(response.json::<serde_json::Value>(), json!({ "message": "board not found" }));
}

#[tokio::test]
async fn test_get_board_non_numeric_id() {
    let db = TestDatabase::new().await;
    let server = create_test_server(&db);

    let response = server.get("/abc").await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    crate::assert_error_message!(response, "invalid board id");
}

#[tokio::test]
async fn test_delete_board() {
    let db = TestDatabase::new().await;
    let server = create_test_server(&db);
    let id = create_board(&server, "Old").await;

    let response = server.delete(&format!("/{}", id)).await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<serde_json::Value>(), json!({ "message": "board deleted" }));

    assert_eq!(server.get(&format!("/{}", id)).await.status_code(), StatusCode::NOT_FOUND);
    assert_eq!(server.get("/").await.text(), "[]");
}

#[tokio::test]
async fn test_delete_missing_board() {
    let db = TestDatabase::new().await;
    let server = create_test_server(&db);

    let response = server.delete("/12345").await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    crate::assert_error_message!(response, "board not found");
}

#[tokio::test]
async fn test_delete_board_twice() {
    let db = TestDatabase::new().await;
    let server = create_test_server(&db);
    let id = create_board(&server, "Once").await;

    assert_eq!(server.delete(&format!("/{}", id)).await.status_code(), StatusCode::OK);
    assert_eq!(server.delete(&format!("/{}", id)).await.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_board_cascades_to_cards() {
    let db = TestDatabase::new().await;
    let server = create_test_server(&db);
    let id = create_board(&server, "Doomed").await;
    create_card(&server, id, "Fix bug").await;
    create_card(&server, id, "Write tests").await;
    assert_eq!(db.card_count(id).await, 2);

    server.delete(&format!("/{}", id)).await.assert_status_ok();

    assert_eq!(db.card_count(id).await, 0);
    assert_eq!(server.get(&format!("/{}", id)).await.status_code(), StatusCode::NOT_FOUND);
    assert_eq!(
        server.get(&format!("/{}/card", id)).await.status_code(),
        StatusCode::NOT_FOUND
    );
}

#[tokio::test]
async fn test_unknown_route() {
    let db = TestDatabase::new().await;
    let server = create_test_server(&db);

    let response = server.get("/1/card/2").await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    crate::assert_error_message!(response, "route not found");
}

#[tokio::test]
async fn test_unsupported_method() {
    let db = TestDatabase::new().await;
    let server = create_test_server(&db);
    let id = create_board(&server, "Sprint 1").await;

    let response = server.put("/").json(&json!({ "title": "Sprint 2" })).await;
    assert_eq!(response.status_code(), StatusCode::METHOD_NOT_ALLOWED);
    crate::assert_error_message!(response, "method not allowed");

    let response = server.patch(&format!("/{}", id)).await;
    assert_eq!(response.status_code(), StatusCode::METHOD_NOT_ALLOWED);
    crate::assert_error_message!(response, "method not allowed");
}

#[tokio::test]
async fn test_list_boards_undecodable_row() {
    let db = TestDatabase::new().await;
    let server = create_test_server(&db);
    create_board(&server, "Readable").await;
    sqlx::query("INSERT INTO boards (title) VALUES (x'ff')")
        .execute(db.pool())
        .await
        .unwrap();

    let response = server.get("/").await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    crate::assert_error_message!(response, "decoding column");
    crate::assert_error_message!(response, "title");
}

#[tokio::test]
async fn test_create_board_store_error() {
    let db = TestDatabase::new().await;
    let server = create_test_server(&db);
    sqlx::query("DROP TABLE cards").execute(db.pool()).await.unwrap();
    sqlx::query("DROP TABLE boards").execute(db.pool()).await.unwrap();

    let response = server.post("/").json(&json!({ "title": "Sprint 1" })).await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    crate::assert_error_message!(response, "no such table: boards");
}
