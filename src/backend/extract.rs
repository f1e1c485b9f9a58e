/**
 * Request Extractors
 *
 * Thin wrappers over axum's `Json`, `Query` and `Path` that reject with
 * `BackendError`, so a malformed body, query string or path id gets the
 * same JSON error envelope as every other failure.
 *
 * `Json` also works as a response type.
 */

use axum::extract::{FromRequest, FromRequestParts};
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::backend::error::BackendError;

/// JSON body extractor and response
#[derive(Debug, Clone, FromRequest)]
#[from_request(via(axum::Json), rejection(BackendError))]
pub struct Json<T>(pub T);

impl<T: Serialize> IntoResponse for Json<T> {
    fn into_response(self) -> Response {
        axum::Json(self.0).into_response()
    }
}

/// Query string extractor
#[derive(Debug, Clone, Default, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(BackendError))]
pub struct Query<T>(pub T);

/// Path parameter extractor
#[derive(Debug, Clone, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(BackendError))]
pub struct Path<T>(pub T);
