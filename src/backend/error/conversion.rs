/**
 * Error Conversion
 *
 * `BackendError` implements `IntoResponse`, so handlers return
 * `Result<_, BackendError>` and the error half becomes an HTTP response
 * with the status from `status_code()`.
 *
 * # Response Format
 *
 * ```json
 * {
 *   "message": "board not found"
 * }
 * ```
 *
 * Server-side failures are logged at `error`, client failures at `warn`.
 */

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    response::{IntoResponse, Response},
};

use crate::backend::error::types::BackendError;
use crate::backend::response::{MessageBody, PrettyJson};

impl IntoResponse for BackendError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.message();

        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), "{}", message);
        } else {
            tracing::warn!(status = status.as_u16(), "{}", message);
        }

        (status, PrettyJson(MessageBody::new(message))).into_response()
    }
}

/// Any body that cannot be turned into the expected payload is a 400,
/// whatever axum's own status for the rejection would have been.
impl From<JsonRejection> for BackendError {
    fn from(rejection: JsonRejection) -> Self {
        Self::bad_request(rejection.body_text())
    }
}

impl From<PathRejection> for BackendError {
    fn from(rejection: PathRejection) -> Self {
        Self::bad_request(format!("invalid board id: {}", rejection.body_text()))
    }
}
