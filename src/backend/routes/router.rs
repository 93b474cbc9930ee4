/**
 * Router Configuration
 *
 * This module assembles the board/card routes, the JSON fallbacks, request
 * tracing and the optional CORS policy into a single Axum router.
 *
 * # Fallbacks
 *
 * - Unknown path: 404 `{"message": "route not found"}`
 * - Known path, unsupported method: 405 `{"message": "method not allowed"}`
 *
 * # Layers
 *
 * 1. `CatchPanicLayer` - a panicking handler becomes a JSON 500
 * 2. `TraceLayer` - a span per request, logged through `tracing`
 * 3. `CorsLayer` - only when `allowed_origin` is configured: that origin,
 *    with credentials, for GET/POST/DELETE/OPTIONS
 */

use std::any::Any;

use axum::{
    http::{header, HeaderValue, Method, StatusCode},
    response::{IntoResponse, Response},
    Router,
};
use tower_http::{catch_panic::CatchPanicLayer, cors::CorsLayer, trace::TraceLayer};

use crate::backend::error::BackendError;
use crate::backend::routes::board_routes::configure_board_routes;
use crate::backend::server::state::AppState;
use crate::shared::config::validate_origin;
use crate::shared::{AppConfig, ConfigError};

/// Create the Axum router with all routes configured
///
/// # Arguments
///
/// * `app_state` - Application state holding the database pool
/// * `config` - Used for the CORS policy
///
/// # Errors
///
/// Returns `ConfigError::InvalidOrigin` if the allowed origin cannot be used
/// as a header value.
pub fn create_router(app_state: AppState, config: &AppConfig) -> Result<Router<()>, BackendError> {
    let router = configure_board_routes(Router::new());

    // Fallback handlers for 404 and 405
    let router = router
        .fallback(|| async { BackendError::not_found("route not found") })
        .method_not_allowed_fallback(|| async {
            BackendError::handler(StatusCode::METHOD_NOT_ALLOWED, "method not allowed")
        });

    let router = router
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(TraceLayer::new_for_http());

    let router = match &config.allowed_origin {
        Some(origin) => {
            tracing::info!("CORS enabled for origin {}", origin);
            router.layer(cors_layer(origin)?)
        }
        None => {
            tracing::info!("CORS disabled");
            router
        }
    };

    Ok(router.with_state(app_state))
}

/// Build the cross-origin policy for a single allowed origin
pub fn cors_layer(origin: &str) -> Result<CorsLayer, ConfigError> {
    validate_origin(origin)?;
    let origin = HeaderValue::from_str(origin)
        .map_err(|e| ConfigError::InvalidOrigin(format!("{}: {}", origin, e)))?;

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_credentials(true)
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]))
}

/// Turn a handler panic into the standard 500 error body
pub fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = err
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| err.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    tracing::error!("Handler panicked: {}", detail);

    BackendError::handler(StatusCode::INTERNAL_SERVER_ERROR, "internal server error").into_response()
}
