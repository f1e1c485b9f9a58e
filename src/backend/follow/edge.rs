//! Follow edge types

use serde::ser::{Serialize, SerializeStruct, Serializer};
use uuid::Uuid;

use crate::backend::auth::users::User;
use crate::backend::middleware::AuthenticatedUser;
use crate::shared::Follow;

/// A user identity together with its handle
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UserRef {
    pub id: Uuid,
    pub username: String,
}

impl From<&User> for UserRef {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
        }
    }
}

impl From<User> for UserRef {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
        }
    }
}

impl From<&AuthenticatedUser> for UserRef {
    fn from(user: &AuthenticatedUser) -> Self {
        Self {
            id: user.user_id,
            username: user.username.clone(),
        }
    }
}

/// A directed "follows" relationship from `actor` to `target`
///
/// Immutable. Only [`super::FollowGuard`] hands out new edges; rows read back
/// from the store were validated when they were inserted.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FollowEdge {
    actor: UserRef,
    target: UserRef,
}

impl FollowEdge {
    pub(super) fn new(actor: UserRef, target: UserRef) -> Self {
        Self { actor, target }
    }

    /// Rebuild the edge of a stored row
    pub(crate) fn from_stored(row: &Follow) -> Self {
        Self {
            actor: UserRef {
                id: row.user_id,
                username: row.user.clone(),
            },
            target: UserRef {
                id: row.following_id,
                username: row.following.clone(),
            },
        }
    }

    /// The user who follows
    pub fn actor(&self) -> &UserRef {
        &self.actor
    }

    /// The user being followed
    pub fn target(&self) -> &UserRef {
        &self.target
    }
}

/// Same shape as [`Follow`]: `{"user": ..., "following": ...}`
impl Serialize for FollowEdge {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("FollowEdge", 2)?;
        state.serialize_field("user", &self.actor.username)?;
        state.serialize_field("following", &self.target.username)?;
        state.end()
    }
}
