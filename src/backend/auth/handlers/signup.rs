/**
 * Signup Handler
 *
 * `POST /api/v1/auth/signup/`
 *
 * # Registration Process
 *
 * 1. Validate username, email and password
 * 2. Reject a username that is already taken
 * 3. Hash the password with bcrypt
 * 4. Create the user and return a token pair
 *
 * The store's unique index on `username` catches a concurrent signup that
 * slips past step 2.
 */

use std::sync::Arc;

use axum::{extract::State, http::StatusCode};

use crate::backend::auth::handlers::types::{AuthResponse, SignupRequest, UserResponse};
use crate::backend::auth::sessions::JwtKeys;
use crate::backend::auth::users::{hash_password, validate_signup, NewUser};
use crate::backend::error::BackendError;
use crate::backend::extract::Json;
use crate::backend::store::{Store, USERS_USERNAME_KEY};
use crate::shared::{AppConfig, SharedError};

const USERNAME_TAKEN: &str = "A user with that username already exists.";

pub async fn signup(
    State(store): State<Arc<dyn Store>>,
    State(keys): State<Arc<JwtKeys>>,
    State(config): State<Arc<AppConfig>>,
    Json(request): Json<SignupRequest>,
) -> Result<(StatusCode, Json<AuthResponse>), BackendError> {
    tracing::info!("Signup request for username: {}", request.username);

    let email = request
        .email
        .as_deref()
        .map(str::trim)
        .filter(|email| !email.is_empty());
    validate_signup(&request.username, email, &request.password).map_err(|e| {
        tracing::warn!("Invalid signup for {}: {}", request.username, e);
        e
    })?;

    if store.user_by_username(&request.username).await?.is_some() {
        tracing::warn!("Username already exists: {}", request.username);
        return Err(SharedError::validation("username", USERNAME_TAKEN).into());
    }

    let password_hash = hash_password(&request.password, config.bcrypt_cost).map_err(|e| {
        tracing::error!("Failed to hash password: {:?}", e);
        BackendError::handler(StatusCode::INTERNAL_SERVER_ERROR, "Server error")
    })?;

    let user = store
        .create_user(NewUser {
            username: request.username.clone(),
            email: email.map(str::to_string),
            password_hash,
        })
        .await
        .map_err(|e| {
            if e.is_unique_violation_of(USERS_USERNAME_KEY) {
                BackendError::from(SharedError::validation("username", USERNAME_TAKEN))
            } else {
                e.into()
            }
        })?;

    let tokens = keys.create_pair(user.id, &user.username).map_err(|e| {
        tracing::error!("Failed to create token: {:?}", e);
        BackendError::handler(StatusCode::INTERNAL_SERVER_ERROR, "Server error")
    })?;

    tracing::info!("User created successfully: {}", user.username);
    Ok((
        StatusCode::CREATED,
        Json(AuthResponse::new(tokens, UserResponse::from(user))),
    ))
}
