/**
 * JWT Handlers
 *
 * - `POST /api/v1/jwt/create/` - exchange username and password for a pair
 * - `POST /api/v1/jwt/refresh/` - exchange a refresh token for an access token
 * - `POST /api/v1/jwt/verify/` - check that a token is valid
 *
 * # Security
 *
 * - Unknown usernames and wrong passwords get the same `401`
 * - Password verification uses bcrypt
 */

use std::sync::Arc;

use axum::{extract::State, http::StatusCode};

use crate::backend::auth::handlers::types::{
    AccessToken, RefreshRequest, TokenRequest, VerifyRequest,
};
use crate::backend::auth::sessions::{JwtKeys, TokenPair, TokenType};
use crate::backend::auth::users::verify_password;
use crate::backend::error::BackendError;
use crate::backend::extract::Json;
use crate::backend::store::Store;

const BAD_CREDENTIALS: &str = "No active account found with the given credentials";
const BAD_TOKEN: &str = "Token is invalid or expired";

/// `POST /api/v1/jwt/create/`
pub async fn obtain_token(
    State(store): State<Arc<dyn Store>>,
    State(keys): State<Arc<JwtKeys>>,
    Json(request): Json<TokenRequest>,
) -> Result<Json<TokenPair>, BackendError> {
    tracing::info!("Token request for: {}", request.username);

    let user = store
        .user_by_username(&request.username)
        .await?
        .ok_or_else(|| {
            tracing::warn!("User not found: {}", request.username);
            BackendError::unauthorized(BAD_CREDENTIALS)
        })?;

    let valid = verify_password(&request.password, &user.password_hash).map_err(|e| {
        tracing::error!("Password verification error: {:?}", e);
        BackendError::handler(StatusCode::INTERNAL_SERVER_ERROR, "Server error")
    })?;
    if !valid {
        tracing::warn!("Invalid password for user: {}", request.username);
        return Err(BackendError::unauthorized(BAD_CREDENTIALS));
    }

    let tokens = keys.create_pair(user.id, &user.username).map_err(|e| {
        tracing::error!("Failed to create token: {:?}", e);
        BackendError::handler(StatusCode::INTERNAL_SERVER_ERROR, "Server error")
    })?;

    tracing::info!("Issued tokens for: {}", user.username);
    Ok(Json(tokens))
}

/// `POST /api/v1/jwt/refresh/`
///
/// Only refresh tokens are accepted, and the user must still exist.
pub async fn refresh_token(
    State(store): State<Arc<dyn Store>>,
    State(keys): State<Arc<JwtKeys>>,
    Json(request): Json<RefreshRequest>,
) -> Result<Json<AccessToken>, BackendError> {
    let claims = keys
        .verify_token(&request.refresh, TokenType::Refresh)
        .map_err(|e| {
            tracing::warn!("Refresh rejected: {}", e);
            BackendError::unauthorized(BAD_TOKEN)
        })?;

    let user_id = claims
        .user_id()
        .map_err(|_| BackendError::unauthorized(BAD_TOKEN))?;
    let user = store
        .user_by_id(user_id)
        .await?
        .ok_or_else(|| BackendError::unauthorized(BAD_TOKEN))?;

    let access = keys
        .create_token(user.id, &user.username, TokenType::Access)
        .map_err(|e| {
            tracing::error!("Failed to create token: {:?}", e);
            BackendError::handler(StatusCode::INTERNAL_SERVER_ERROR, "Server error")
        })?;

    Ok(Json(AccessToken { access }))
}

/// `POST /api/v1/jwt/verify/`
///
/// Either kind of token verifies.
pub async fn verify_token(
    State(keys): State<Arc<JwtKeys>>,
    Json(request): Json<VerifyRequest>,
) -> Result<Json<serde_json::Value>, BackendError> {
    let valid = keys.verify_token(&request.token, TokenType::Access).is_ok()
        || keys.verify_token(&request.token, TokenType::Refresh).is_ok();
    if !valid {
        return Err(BackendError::unauthorized(BAD_TOKEN));
    }
    Ok(Json(serde_json::json!({})))
}
