//! Follow Relationship Guard
//!
//! The only way a new [`FollowEdge`] comes into existence. The guard resolves
//! the target handle, then checks, in this order and stopping at the first
//! failure:
//!
//! 1. the target is not the actor (`SelfFollowNotAllowed`)
//! 2. the edge does not exist yet (`DuplicateFollow`)
//!
//! It never writes. The duplicate check is a fast path only: two concurrent
//! requests can both pass it, and the store's unique constraint on
//! `(user_id, following_id)` rejects the second insert.

use thiserror::Error;

use super::edge::{FollowEdge, UserRef};
use crate::backend::store::{FollowStore, StoreError, UserStore};
use crate::shared::Follow;

/// Why a follow was refused
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FollowRejection {
    #[error("You cannot follow yourself.")]
    SelfFollowNotAllowed,

    #[error("You are already following this user.")]
    DuplicateFollow,

    #[error("Object with username={handle} does not exist.")]
    UnknownUser { handle: String },
}

/// Outcome of a guard call that did not produce an edge
#[derive(Debug, Error)]
pub enum GuardError {
    #[error(transparent)]
    Rejected(#[from] FollowRejection),

    /// The store could not answer a lookup
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Validates follow requests against the user directory and existing edges
pub struct FollowGuard<'a, S: ?Sized> {
    store: &'a S,
}

impl<'a, S> FollowGuard<'a, S>
where
    S: UserStore + FollowStore + ?Sized,
{
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Validate that `actor` may follow the user named `target_handle`
    pub async fn propose_follow(
        &self,
        actor: &UserRef,
        target_handle: &str,
    ) -> Result<FollowEdge, GuardError> {
        let target: UserRef = self
            .store
            .user_by_username(target_handle)
            .await?
            .ok_or_else(|| FollowRejection::UnknownUser {
                handle: target_handle.to_string(),
            })?
            .into();

        if target.id == actor.id {
            tracing::debug!(actor = %actor.username, "Rejected self-follow");
            return Err(FollowRejection::SelfFollowNotAllowed.into());
        }

        if self.store.follow_exists(actor.id, target.id).await? {
            tracing::debug!(
                actor = %actor.username,
                target = %target.username,
                "Rejected duplicate follow"
            );
            return Err(FollowRejection::DuplicateFollow.into());
        }

        Ok(FollowEdge::new(actor.clone(), target))
    }
}

/// Edges initiated by `actor`, in the order the store returned them
pub fn list_following(actor: &UserRef, rows: &[Follow]) -> Vec<FollowEdge> {
    rows.iter()
        .filter(|row| row.user_id == actor.id)
        .map(FollowEdge::from_stored)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::auth::users::NewUser;
    use crate::backend::store::MemoryStore;
    use assert_matches::assert_matches;

    async fn register(store: &MemoryStore, username: &str) -> UserRef {
        store
            .create_user(NewUser {
                username: username.to_string(),
                email: None,
                password_hash: "unused".to_string(),
            })
            .await
            .unwrap()
            .into()
    }

    #[tokio::test]
    async fn test_follow_scenario() {
        let store = MemoryStore::new();
        let alice = register(&store, "alice").await;
        let bob = register(&store, "bob").await;
        let guard = FollowGuard::new(&store);

        let edge = guard.propose_follow(&alice, "bob").await.unwrap();
        assert_eq!(edge.actor(), &alice);
        assert_eq!(edge.target(), &bob);
        store.insert_follow(&edge).await.unwrap();

        assert_matches!(
            guard.propose_follow(&alice, "bob").await,
            Err(GuardError::Rejected(FollowRejection::DuplicateFollow))
        );
        assert_matches!(
            guard.propose_follow(&alice, "alice").await,
            Err(GuardError::Rejected(FollowRejection::SelfFollowNotAllowed))
        );
        assert_matches!(
            guard.propose_follow(&alice, "nobody").await,
            Err(GuardError::Rejected(FollowRejection::UnknownUser { handle })) if handle == "nobody"
        );
    }

    #[tokio::test]
    async fn test_proposal_does_not_write() {
        let store = MemoryStore::new();
        let alice = register(&store, "alice").await;
        register(&store, "bob").await;
        let guard = FollowGuard::new(&store);

        guard.propose_follow(&alice, "bob").await.unwrap();
        guard.propose_follow(&alice, "bob").await.unwrap();
        assert!(store.list_follows(alice.id, &[]).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_reverse_direction_is_independent() {
        let store = MemoryStore::new();
        let alice = register(&store, "alice").await;
        let bob = register(&store, "bob").await;
        let guard = FollowGuard::new(&store);

        let edge = guard.propose_follow(&alice, "bob").await.unwrap();
        store.insert_follow(&edge).await.unwrap();

        assert!(guard.propose_follow(&bob, "alice").await.is_ok());
    }

    #[tokio::test]
    async fn test_list_following_keeps_store_order() {
        let store = MemoryStore::new();
        let alice = register(&store, "alice").await;
        for name in ["zed", "amy", "kim"] {
            register(&store, name).await;
            let edge = FollowGuard::new(&store)
                .propose_follow(&alice, name)
                .await
                .unwrap();
            store.insert_follow(&edge).await.unwrap();
        }

        let rows = store.list_follows(alice.id, &[]).await.unwrap();
        let edges = list_following(&alice, &rows);
        let targets: Vec<_> = edges.iter().map(|e| e.target().username.as_str()).collect();
        assert_eq!(targets, vec!["zed", "amy", "kim"]);
        assert!(edges.iter().all(|e| e.actor() == &alice));
    }

    #[test]
    fn test_rejection_messages() {
        assert_eq!(
            FollowRejection::UnknownUser { handle: "nobody".into() }.to_string(),
            "Object with username=nobody does not exist."
        );
        assert_eq!(
            FollowRejection::SelfFollowNotAllowed.to_string(),
            "You cannot follow yourself."
        );
    }
}
