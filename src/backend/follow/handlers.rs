/**
 * Follow Handlers
 *
 * `GET /api/v1/follow/` lists the caller's follows, optionally filtered by
 * `?search=`. `POST /api/v1/follow/` follows another user. Both require an
 * authenticated caller; the caller is always the follower.
 */

use std::sync::Arc;

use axum::{extract::State, http::StatusCode};

use super::edge::{FollowEdge, UserRef};
use super::guard::{list_following, FollowGuard, FollowRejection};
use crate::backend::error::BackendError;
use crate::backend::extract::{Json, Query};
use crate::backend::middleware::AuthUser;
use crate::backend::store::{Store, StoreError, FOLLOWS_NO_SELF_FOLLOW, FOLLOWS_UNIQUE_PAIR};
use crate::shared::{Follow, FollowPayload, FollowSearch, SharedError};

/// List who the caller follows
pub async fn list_follows(
    State(store): State<Arc<dyn Store>>,
    AuthUser(user): AuthUser,
    Query(search): Query<FollowSearch>,
) -> Result<Json<Vec<FollowEdge>>, BackendError> {
    let actor = UserRef::from(&user);
    let rows = store.list_follows(actor.id, &search.terms()).await?;
    Ok(Json(list_following(&actor, &rows)))
}

/// Follow the user named in the body
///
/// # Errors
///
/// * `400` - `following` missing, unknown user, self-follow or duplicate
/// * `401` - anonymous caller
pub async fn create_follow(
    State(store): State<Arc<dyn Store>>,
    AuthUser(user): AuthUser,
    Json(payload): Json<FollowPayload>,
) -> Result<(StatusCode, Json<Follow>), BackendError> {
    let handle = payload
        .following
        .filter(|handle| !handle.trim().is_empty())
        .ok_or_else(|| SharedError::required("following"))?;

    let actor = UserRef::from(&user);
    let edge = FollowGuard::new(store.as_ref())
        .propose_follow(&actor, &handle)
        .await
        .map_err(|e| {
            tracing::info!(actor = %actor.username, target = %handle, "Follow refused: {}", e);
            e
        })?;

    let follow = store
        .insert_follow(&edge)
        .await
        .map_err(rejection_from_constraint)?;

    tracing::info!(
        actor = %follow.user,
        target = %follow.following,
        "Follow created"
    );
    Ok((StatusCode::CREATED, Json(follow)))
}

/// A concurrent request can pass the guard and lose the race at insert time;
/// report the constraint it hit the same way the guard would have.
fn rejection_from_constraint(err: StoreError) -> BackendError {
    if err.is_unique_violation_of(FOLLOWS_UNIQUE_PAIR) {
        FollowRejection::DuplicateFollow.into()
    } else if err.is_check_violation_of(FOLLOWS_NO_SELF_FOLLOW) {
        FollowRejection::SelfFollowNotAllowed.into()
    } else {
        err.into()
    }
}
