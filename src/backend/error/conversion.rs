/**
 * Error Conversion
 *
 * `IntoResponse` for `BackendError`, so handlers can return it directly.
 *
 * # Response Format
 *
 * ```json
 * {
 *   "error": "This field is required.",
 *   "status": 400,
 *   "field": "text"
 * }
 * ```
 *
 * `field` is only present for errors tied to a request field.
 */

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};

use crate::backend::error::types::BackendError;

impl IntoResponse for BackendError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.message();

        if status.is_server_error() {
            tracing::error!("Request failed: {}", self);
        }

        let mut body = serde_json::json!({
            "error": message,
            "status": status.as_u16(),
        });
        if let Some(field) = self.field() {
            body["field"] = serde_json::Value::from(field);
        }

        (status, Json(body)).into_response()
    }
}

impl From<JsonRejection> for BackendError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!("Rejected request body: {}", rejection.body_text());
        let status = match rejection {
            JsonRejection::JsonDataError(_) | JsonRejection::JsonSyntaxError(_) => {
                StatusCode::BAD_REQUEST
            }
            ref other => other.status(),
        };
        BackendError::handler(status, rejection.body_text())
    }
}

impl From<QueryRejection> for BackendError {
    fn from(rejection: QueryRejection) -> Self {
        BackendError::handler(StatusCode::BAD_REQUEST, rejection.body_text())
    }
}

impl From<PathRejection> for BackendError {
    fn from(rejection: PathRejection) -> Self {
        match rejection {
            // An id that does not parse names no object
            PathRejection::FailedToDeserializePathParams(_) => BackendError::not_found(),
            other => BackendError::handler(other.status(), other.body_text()),
        }
    }
}
