//! Cross-origin policy tests

use axum::http::{header, HeaderValue, Method, StatusCode};
use kanban::shared::AppConfig;

use crate::common::{create_test_server, create_test_server_with_config, TestDatabase, TEST_ORIGIN};

#[tokio::test]
async fn test_cors_headers_on_simple_request() {
    let db = TestDatabase::new().await;
    let server = create_test_server(&db);

    let response = server
        .get("/")
        .add_header(header::ORIGIN, HeaderValue::from_static(TEST_ORIGIN))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let headers = response.headers();
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], TEST_ORIGIN);
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_CREDENTIALS], "true");
}

#[tokio::test]
async fn test_cors_preflight_allows_delete() {
    let db = TestDatabase::new().await;
    let server = create_test_server(&db);

    let response = server
        .method(Method::OPTIONS, "/1")
        .add_header(header::ORIGIN, HeaderValue::from_static(TEST_ORIGIN))
        .add_header(
            header::ACCESS_CONTROL_REQUEST_METHOD,
            HeaderValue::from_static("DELETE"),
        )
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let methods = response.headers()[header::ACCESS_CONTROL_ALLOW_METHODS]
        .to_str()
        .unwrap()
        .to_string();
    for method in ["GET", "POST", "DELETE", "OPTIONS"] {
        assert!(methods.contains(method), "{} missing from {}", method, methods);
    }
    assert_eq!(response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN], TEST_ORIGIN);
}

#[tokio::test]
async fn test_configured_origin_is_used() {
    let db = TestDatabase::new().await;
    let config = AppConfig::builder()
        .allowed_origin("https://board.example.com")
        .build()
        .unwrap();
    let server = create_test_server_with_config(&db, &config);

    let response = server
        .get("/")
        .add_header(header::ORIGIN, HeaderValue::from_static("https://board.example.com"))
        .await;

    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "https://board.example.com"
    );
}

#[tokio::test]
async fn test_cors_disabled() {
    let db = TestDatabase::new().await;
    let config = AppConfig::builder().disable_cors().build().unwrap();
    let server = create_test_server_with_config(&db, &config);

    let response = server
        .get("/")
        .add_header(header::ORIGIN, HeaderValue::from_static(TEST_ORIGIN))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert!(response
        .headers()
        .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
        .is_none());
}
