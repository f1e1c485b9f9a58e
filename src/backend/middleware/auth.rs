/**
 * Authentication Middleware
 *
 * Runs on every request. It reads an optional `Authorization: Bearer <token>`
 * header, verifies the access token and attaches the user to the request
 * extensions. Requests without the header pass through anonymously; a
 * header that is present but malformed or invalid is rejected with `401`,
 * whatever the endpoint.
 *
 * Handlers that need a user take the [`AuthUser`] extractor.
 */

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts},
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use crate::backend::auth::sessions::TokenType;
use crate::backend::error::BackendError;
use crate::backend::server::state::AppState;

/// Authenticated user data extracted from JWT token
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub user_id: Uuid,
    pub username: String,
}

/// Authentication middleware
///
/// 1. Reads the Authorization header, if any
/// 2. Verifies the access token
/// 3. Checks the user still exists
/// 4. Attaches [`AuthenticatedUser`] to the request extensions
pub async fn auth_middleware(
    State(app_state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, BackendError> {
    let Some(auth_header) = request.headers().get(AUTHORIZATION).cloned() else {
        return Ok(next.run(request).await);
    };

    let token = auth_header
        .to_str()
        .ok()
        .and_then(|h| h.strip_prefix("Bearer "))
        .ok_or_else(|| {
            tracing::warn!("Invalid Authorization header format");
            BackendError::unauthorized("Invalid Authorization header.")
        })?;

    let claims = app_state
        .keys
        .verify_token(token, TokenType::Access)
        .map_err(|e| {
            tracing::warn!("Invalid token: {}", e);
            BackendError::unauthorized("Given token not valid for any token type")
        })?;

    let user_id = claims
        .user_id()
        .map_err(|_| BackendError::unauthorized("Token contained no recognizable user identification"))?;

    let user = app_state.store.user_by_id(user_id).await?.ok_or_else(|| {
        tracing::warn!("Token for unknown user: {}", user_id);
        BackendError::unauthorized("User not found")
    })?;

    request.extensions_mut().insert(AuthenticatedUser {
        user_id: user.id,
        username: user.username,
    });

    Ok(next.run(request).await)
}

/// Extract authenticated user from request extensions
pub fn extract_authenticated_user(parts: &Parts) -> Result<AuthenticatedUser, BackendError> {
    parts
        .extensions
        .get::<AuthenticatedUser>()
        .cloned()
        .ok_or_else(|| {
            tracing::debug!("Anonymous request to an authenticated endpoint");
            BackendError::not_authenticated()
        })
}

/// Axum extractor for authenticated user
///
/// Rejects anonymous requests with `401`.
#[derive(Clone, Debug)]
pub struct AuthUser(pub AuthenticatedUser);

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = BackendError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        extract_authenticated_user(parts).map(AuthUser)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{Request, StatusCode};

    #[test]
    fn test_extract_authenticated_user() {
        let mut request = Request::builder()
            .uri("http://example.com")
            .body(())
            .unwrap();

        let user = AuthenticatedUser {
            user_id: Uuid::new_v4(),
            username: "alice".to_string(),
        };
        request.extensions_mut().insert(user.clone());
        let (parts, _) = request.into_parts();

        assert_eq!(extract_authenticated_user(&parts).unwrap(), user);
    }

    #[test]
    fn test_extract_authenticated_user_missing() {
        let request = Request::builder()
            .uri("http://example.com")
            .body(())
            .unwrap();
        let (parts, _) = request.into_parts();

        let err = extract_authenticated_user(&parts).unwrap_err();
        assert_eq!(err.status_code(), StatusCode::UNAUTHORIZED);
    }
}
