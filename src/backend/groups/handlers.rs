/**
 * Group Handlers
 *
 * Groups are read-only over HTTP. New groups go through [`register_group`],
 * which validates them before they reach the store.
 */

use std::sync::Arc;

use axum::extract::State;

use crate::backend::error::BackendError;
use crate::backend::extract::{Json, Path};
use crate::backend::store::{GroupStore, Store, GROUPS_SLUG_KEY};
use crate::shared::{Group, NewGroup, SharedError};

/// `GET /api/v1/groups/`
pub async fn list_groups(
    State(store): State<Arc<dyn Store>>,
) -> Result<Json<Vec<Group>>, BackendError> {
    Ok(Json(store.list_groups().await?))
}

/// `GET /api/v1/groups/{id}/`
pub async fn get_group(
    State(store): State<Arc<dyn Store>>,
    Path(id): Path<i64>,
) -> Result<Json<Group>, BackendError> {
    let group = store.group_by_id(id).await?.ok_or_else(BackendError::not_found)?;
    Ok(Json(group))
}

/// Validate and store a new group
///
/// A taken slug is reported as a validation error on `slug`.
pub async fn register_group<S>(store: &S, group: NewGroup) -> Result<Group, BackendError>
where
    S: GroupStore + ?Sized,
{
    group.validate()?;
    let group = store.create_group(group).await.map_err(|e| {
        if e.is_unique_violation_of(GROUPS_SLUG_KEY) {
            BackendError::from(SharedError::validation(
                "slug",
                "group with this slug already exists.",
            ))
        } else {
            e.into()
        }
    })?;
    tracing::info!(group_id = group.id, slug = %group.slug, "Group created");
    Ok(group)
}
