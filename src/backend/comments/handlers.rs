/**
 * Comment Handlers
 *
 * Comments are nested under their post:
 * `/api/v1/posts/{post_id}/comments/` and
 * `/api/v1/posts/{post_id}/comments/{id}/`.
 *
 * A comment id is only found together with the post it belongs to, so
 * `/posts/1/comments/7/` is `404` when comment 7 is on post 2.
 */

use std::sync::Arc;

use axum::{extract::State, http::StatusCode};

use crate::backend::error::BackendError;
use crate::backend::extract::{Json, Path};
use crate::backend::middleware::{AuthUser, AuthenticatedUser};
use crate::backend::permissions::ensure_owner;
use crate::backend::store::Store;
use crate::shared::{Comment, CommentPayload};

/// `GET /api/v1/posts/{post_id}/comments/`
///
/// An unknown post simply has no comments.
pub async fn list_comments(
    State(store): State<Arc<dyn Store>>,
    Path(post_id): Path<i64>,
) -> Result<Json<Vec<Comment>>, BackendError> {
    Ok(Json(store.list_comments(post_id).await?))
}

/// `POST /api/v1/posts/{post_id}/comments/`
pub async fn create_comment(
    State(store): State<Arc<dyn Store>>,
    AuthUser(user): AuthUser,
    Path(post_id): Path<i64>,
    Json(payload): Json<CommentPayload>,
) -> Result<(StatusCode, Json<Comment>), BackendError> {
    ensure_post_exists(store.as_ref(), post_id).await?;
    let text = payload.into_text(None)?;

    let comment = store.create_comment(post_id, user.user_id, text).await?;
    tracing::info!(post_id, comment_id = comment.id, author = %comment.author, "Comment created");
    Ok((StatusCode::CREATED, Json(comment)))
}

/// `GET /api/v1/posts/{post_id}/comments/{id}/`
pub async fn get_comment(
    State(store): State<Arc<dyn Store>>,
    Path((post_id, id)): Path<(i64, i64)>,
) -> Result<Json<Comment>, BackendError> {
    let comment = store
        .comment_by_id(post_id, id)
        .await?
        .ok_or_else(BackendError::not_found)?;
    Ok(Json(comment))
}

/// `PUT /api/v1/posts/{post_id}/comments/{id}/`
pub async fn update_comment(
    State(store): State<Arc<dyn Store>>,
    AuthUser(user): AuthUser,
    Path((post_id, id)): Path<(i64, i64)>,
    Json(payload): Json<CommentPayload>,
) -> Result<Json<Comment>, BackendError> {
    owned_comment(store.as_ref(), &user, post_id, id).await?;
    let text = payload.into_text(None)?;
    save_comment(store.as_ref(), post_id, id, text).await
}

/// `PATCH /api/v1/posts/{post_id}/comments/{id}/`
pub async fn partial_update_comment(
    State(store): State<Arc<dyn Store>>,
    AuthUser(user): AuthUser,
    Path((post_id, id)): Path<(i64, i64)>,
    Json(payload): Json<CommentPayload>,
) -> Result<Json<Comment>, BackendError> {
    let existing = owned_comment(store.as_ref(), &user, post_id, id).await?;
    let text = payload.into_text(Some(&existing))?;
    save_comment(store.as_ref(), post_id, id, text).await
}

/// `DELETE /api/v1/posts/{post_id}/comments/{id}/`
pub async fn delete_comment(
    State(store): State<Arc<dyn Store>>,
    AuthUser(user): AuthUser,
    Path((post_id, id)): Path<(i64, i64)>,
) -> Result<StatusCode, BackendError> {
    owned_comment(store.as_ref(), &user, post_id, id).await?;

    if !store.delete_comment(post_id, id).await? {
        return Err(BackendError::not_found());
    }
    tracing::info!(post_id, comment_id = id, "Comment deleted");
    Ok(StatusCode::NO_CONTENT)
}

async fn ensure_post_exists(store: &dyn Store, post_id: i64) -> Result<(), BackendError> {
    match store.post_by_id(post_id).await? {
        Some(_) => Ok(()),
        None => Err(BackendError::not_found()),
    }
}

/// Load a comment for modification: the post and the comment must exist and
/// the caller must be the comment's author
async fn owned_comment(
    store: &dyn Store,
    user: &AuthenticatedUser,
    post_id: i64,
    id: i64,
) -> Result<Comment, BackendError> {
    ensure_post_exists(store, post_id).await?;
    let comment = store
        .comment_by_id(post_id, id)
        .await?
        .ok_or_else(BackendError::not_found)?;
    ensure_owner(user, comment.author_id)?;
    Ok(comment)
}

async fn save_comment(
    store: &dyn Store,
    post_id: i64,
    id: i64,
    text: String,
) -> Result<Json<Comment>, BackendError> {
    let comment = store
        .update_comment(post_id, id, text)
        .await?
        .ok_or_else(BackendError::not_found)?;
    tracing::info!(post_id, comment_id = id, "Comment updated");
    Ok(Json(comment))
}
