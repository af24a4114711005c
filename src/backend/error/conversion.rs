/**
 * Error Conversion
 *
 * Converts backend errors into HTTP responses so handlers can return
 * `Result<_, BackendError>` directly.
 *
 * # Response Format
 *
 * ```json
 * {
 *   "message": "Error message",
 *   "status": 400
 * }
 * ```
 *
 * Server-side failures (5xx) are logged with their full cause before the
 * generic message is sent.
 */

use axum::{
    response::{IntoResponse, Response},
    Json,
};
use crate::backend::error::types::BackendError;

impl IntoResponse for BackendError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.message();

        if status.is_server_error() {
            tracing::error!("{} -> {}: {}", status, message, self);
        } else {
            tracing::debug!("{} -> {}", status, message);
        }

        let body = serde_json::json!({
            "message": message,
            "status": status.as_u16(),
        });

        (status, Json(body)).into_response()
    }
}
