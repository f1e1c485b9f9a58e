/**
 * Backend Error Types
 *
 * The HTTP-facing error of the backend. Every handler returns
 * `Result<_, BackendError>`, and lower layers convert into it through `From`:
 *
 * - `SharedError` - request body validation, `400` with the offending field
 * - `FollowRejection` - a follow refused by the guard, `400` on `following`
 * - `StoreError` - persistence failures, `500`
 *
 * Authentication and permission failures have their own variants so their
 * status codes stay fixed (`401`, `403`).
 */

use thiserror::Error;
use axum::http::StatusCode;

use crate::backend::follow::{FollowRejection, GuardError};
use crate::backend::store::StoreError;
use crate::shared::SharedError;

const FORBIDDEN_MESSAGE: &str = "You do not have permission to perform this action.";
const NOT_FOUND_MESSAGE: &str = "Not found.";

/// Backend-specific error types
///
/// # Usage
///
/// ```rust
/// use axum::http::StatusCode;
/// use yatube::backend::error::BackendError;
///
/// let err = BackendError::handler(StatusCode::BAD_REQUEST, "Invalid request");
/// assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
///
/// let err = BackendError::not_found();
/// assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
/// ```
#[derive(Debug, Error)]
pub enum BackendError {
    /// Handler error with an explicit status code
    #[error("Handler error: {message}")]
    HandlerError {
        /// HTTP status code for this error
        status: StatusCode,
        /// Human-readable error message
        message: String,
    },

    /// Missing or invalid credentials
    #[error("Unauthorized: {message}")]
    Unauthorized { message: String },

    /// Authenticated, but not allowed to touch this object
    #[error("{}", FORBIDDEN_MESSAGE)]
    Forbidden,

    #[error("{}", NOT_FOUND_MESSAGE)]
    NotFound,

    /// Shared error (validation of a request body)
    #[error(transparent)]
    SharedError(#[from] SharedError),

    /// A follow request refused by the guard
    #[error(transparent)]
    FollowRejected(#[from] FollowRejection),

    /// Persistence failure
    #[error(transparent)]
    StoreError(#[from] StoreError),
}

impl BackendError {
    /// Create a new handler error with a status code
    pub fn handler(status: StatusCode, message: impl Into<String>) -> Self {
        Self::HandlerError {
            status,
            message: message.into(),
        }
    }

    /// Create a new `401` error
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized {
            message: message.into(),
        }
    }

    /// `401` for endpoints that need a user when the request has none
    pub fn not_authenticated() -> Self {
        Self::unauthorized("Authentication credentials were not provided.")
    }

    pub fn forbidden() -> Self {
        Self::Forbidden
    }

    pub fn not_found() -> Self {
        Self::NotFound
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `HandlerError` - Uses the status code from the error
    /// - `Unauthorized` - 401
    /// - `Forbidden` - 403
    /// - `NotFound` - 404
    /// - `SharedError` - 400 for validation, 500 for serialization
    /// - `FollowRejected` - 400
    /// - `StoreError` - 500
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::HandlerError { status, .. } => *status,
            Self::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::SharedError(err) => match err {
                SharedError::SerializationError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
                SharedError::ValidationError { .. } => StatusCode::BAD_REQUEST,
            },
            Self::FollowRejected(_) => StatusCode::BAD_REQUEST,
            Self::StoreError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error message
    ///
    /// Store errors are not echoed to the client.
    pub fn message(&self) -> String {
        match self {
            Self::HandlerError { message, .. } => message.clone(),
            Self::Unauthorized { message } => message.clone(),
            Self::Forbidden => FORBIDDEN_MESSAGE.to_string(),
            Self::NotFound => NOT_FOUND_MESSAGE.to_string(),
            Self::SharedError(SharedError::ValidationError { message, .. }) => message.clone(),
            Self::SharedError(err) => err.to_string(),
            Self::FollowRejected(rejection) => rejection.to_string(),
            Self::StoreError(_) => "Internal server error".to_string(),
        }
    }

    /// The request field this error refers to, if any
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::SharedError(SharedError::ValidationError { field, .. }) => Some(field),
            Self::FollowRejected(_) => Some("following"),
            _ => None,
        }
    }
}

impl From<GuardError> for BackendError {
    fn from(err: GuardError) -> Self {
        match err {
            GuardError::Rejected(rejection) => Self::FollowRejected(rejection),
            GuardError::Store(err) => Self::StoreError(err),
        }
    }
}
