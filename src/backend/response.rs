/**
 * Pretty-Printed JSON Responses
 *
 * Every response body this server produces, success or error, is JSON
 * indented with two spaces. `PrettyJson` is the responder that does this;
 * handlers return `(StatusCode, PrettyJson<T>)` or just `PrettyJson<T>` for
 * a 200.
 */

use axum::{
    body::Body,
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

const JSON_CONTENT_TYPE: &str = "application/json";

/// Responder that serializes `T` as indented JSON
#[derive(Debug, Clone)]
pub struct PrettyJson<T>(pub T);

impl<T> IntoResponse for PrettyJson<T>
where
    T: Serialize,
{
    fn into_response(self) -> Response {
        match serde_json::to_vec_pretty(&self.0) {
            Ok(bytes) => {
                let mut response = Response::new(Body::from(bytes));
                response.headers_mut().insert(
                    header::CONTENT_TYPE,
                    HeaderValue::from_static(JSON_CONTENT_TYPE),
                );
                response
            }
            Err(err) => {
                tracing::error!("Failed to serialize response body: {}", err);
                let mut response = Response::new(Body::from(
                    r#"{"message": "failed to serialize response"}"#,
                ));
                *response.status_mut() = StatusCode::INTERNAL_SERVER_ERROR;
                response.headers_mut().insert(
                    header::CONTENT_TYPE,
                    HeaderValue::from_static(JSON_CONTENT_TYPE),
                );
                response
            }
        }
    }
}

/// Body of every error and acknowledgement response
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MessageBody {
    pub message: String,
}

impl MessageBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
