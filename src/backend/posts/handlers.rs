/**
 * Post Handlers
 *
 * CRUD for `/api/v1/posts/`. Reads are public; writes need an authenticated
 * caller, and changes to an existing post are limited to its author.
 *
 * # Pagination
 *
 * The list endpoint only paginates when the query string carries a valid
 * `limit`; otherwise it returns a plain JSON array of every post.
 */

use std::sync::Arc;

use axum::{
    extract::{OriginalUri, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::backend::error::BackendError;
use crate::backend::extract::{Json, Path, Query};
use crate::backend::middleware::AuthUser;
use crate::backend::permissions::ensure_owner;
use crate::backend::store::Store;
use crate::shared::{LimitOffsetQuery, Page, Post, PostDraft, PostPayload, SharedError};

/// `GET /api/v1/posts/`
pub async fn list_posts(
    State(store): State<Arc<dyn Store>>,
    Query(query): Query<LimitOffsetQuery>,
    OriginalUri(uri): OriginalUri,
) -> Result<Response, BackendError> {
    match query.window() {
        Some(window) => {
            let count = store.count_posts().await?;
            let posts = store.list_posts(Some(window)).await?;
            Ok(Json(Page::new(posts, count, window, uri.path())).into_response())
        }
        None => {
            let posts = store.list_posts(None).await?;
            Ok(Json(posts).into_response())
        }
    }
}

/// `POST /api/v1/posts/`
pub async fn create_post(
    State(store): State<Arc<dyn Store>>,
    AuthUser(user): AuthUser,
    Json(payload): Json<PostPayload>,
) -> Result<(StatusCode, Json<Post>), BackendError> {
    let draft = payload.into_draft()?;
    ensure_group_exists(store.as_ref(), &draft).await?;

    let post = store.create_post(user.user_id, draft).await?;
    tracing::info!(post_id = post.id, author = %post.author, "Post created");
    Ok((StatusCode::CREATED, Json(post)))
}

/// `GET /api/v1/posts/{id}/`
pub async fn get_post(
    State(store): State<Arc<dyn Store>>,
    Path(id): Path<i64>,
) -> Result<Json<Post>, BackendError> {
    let post = store.post_by_id(id).await?.ok_or_else(BackendError::not_found)?;
    Ok(Json(post))
}

/// `PUT /api/v1/posts/{id}/`
pub async fn update_post(
    State(store): State<Arc<dyn Store>>,
    AuthUser(user): AuthUser,
    Path(id): Path<i64>,
    Json(payload): Json<PostPayload>,
) -> Result<Json<Post>, BackendError> {
    let existing = store.post_by_id(id).await?.ok_or_else(BackendError::not_found)?;
    ensure_owner(&user, existing.author_id)?;

    let draft = payload.into_draft()?;
    save_post(store.as_ref(), id, draft).await
}

/// `PATCH /api/v1/posts/{id}/`
pub async fn partial_update_post(
    State(store): State<Arc<dyn Store>>,
    AuthUser(user): AuthUser,
    Path(id): Path<i64>,
    Json(payload): Json<PostPayload>,
) -> Result<Json<Post>, BackendError> {
    let existing = store.post_by_id(id).await?.ok_or_else(BackendError::not_found)?;
    ensure_owner(&user, existing.author_id)?;

    let draft = payload.merge_into(&existing)?;
    save_post(store.as_ref(), id, draft).await
}

/// `DELETE /api/v1/posts/{id}/`
pub async fn delete_post(
    State(store): State<Arc<dyn Store>>,
    AuthUser(user): AuthUser,
    Path(id): Path<i64>,
) -> Result<StatusCode, BackendError> {
    let existing = store.post_by_id(id).await?.ok_or_else(BackendError::not_found)?;
    ensure_owner(&user, existing.author_id)?;

    if !store.delete_post(id).await? {
        return Err(BackendError::not_found());
    }
    tracing::info!(post_id = id, "Post deleted");
    Ok(StatusCode::NO_CONTENT)
}

async fn save_post(store: &dyn Store, id: i64, draft: PostDraft) -> Result<Json<Post>, BackendError> {
    ensure_group_exists(store, &draft).await?;
    let post = store
        .update_post(id, draft)
        .await?
        .ok_or_else(BackendError::not_found)?;
    tracing::info!(post_id = post.id, "Post updated");
    Ok(Json(post))
}

/// `group` must reference an existing group
async fn ensure_group_exists(store: &dyn Store, draft: &PostDraft) -> Result<(), BackendError> {
    let Some(group_id) = draft.group else {
        return Ok(());
    };
    if store.group_by_id(group_id).await?.is_none() {
        return Err(SharedError::validation(
            "group",
            format!("Invalid pk \"{}\" - object does not exist.", group_id),
        )
        .into());
    }
    Ok(())
}
