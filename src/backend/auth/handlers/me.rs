/**
 * Get Current User Handler
 *
 * `GET /api/v1/auth/me/` returns the account behind the access token.
 * Token verification happens in the auth middleware; this handler only
 * needs the `AuthUser` it leaves behind.
 */

use std::sync::Arc;

use axum::extract::State;

use crate::backend::auth::handlers::types::UserResponse;
use crate::backend::error::BackendError;
use crate::backend::extract::Json;
use crate::backend::middleware::AuthUser;
use crate::backend::store::Store;

pub async fn get_me(
    State(store): State<Arc<dyn Store>>,
    AuthUser(auth): AuthUser,
) -> Result<Json<UserResponse>, BackendError> {
    let user = store
        .user_by_id(auth.user_id)
        .await?
        .ok_or_else(|| {
            tracing::warn!("User not found: {}", auth.user_id);
            BackendError::not_found()
        })?;

    Ok(Json(UserResponse::from(user)))
}
