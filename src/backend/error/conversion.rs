/**
 * Error Conversion
 *
 * `BackendError` is returned directly from handlers and middleware. Auth
 * errors are normally rendered by the handler that produced them; any that
 * escape, and all fatal errors, become a JSON body:
 *
 * ```json
 * {
 *   "error": "Internal server error",
 *   "status": 500
 * }
 * ```
 */

use axum::response::{IntoResponse, Json, Response};
use crate::backend::error::types::BackendError;

impl IntoResponse for BackendError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.message();

        if status.is_server_error() {
            tracing::error!("Request failed: {}", self);
        }

        let body = serde_json::json!({
            "error": message,
            "status": status.as_u16(),
        });

        (status, Json(body)).into_response()
    }
}
