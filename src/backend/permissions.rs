//! Object permissions
//!
//! Posts and comments are readable by anyone and writable only by their
//! author. Anonymous writes never get this far: the `AuthUser` extractor
//! rejects them with `401` first.

use uuid::Uuid;

use crate::backend::error::BackendError;
use crate::backend::middleware::AuthenticatedUser;

/// `403` unless `user` owns the object
pub fn ensure_owner(user: &AuthenticatedUser, owner_id: Uuid) -> Result<(), BackendError> {
    if user.user_id == owner_id {
        Ok(())
    } else {
        tracing::warn!(user = %user.username, "Write to an object owned by someone else");
        Err(BackendError::forbidden())
    }
}
