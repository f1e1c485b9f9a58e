//! Persistence Module
//!
//! Storage is split into one trait per domain (`UserStore`, `GroupStore`,
//! `PostStore`, `CommentStore`, `FollowStore`). `Store` is the union of all of
//! them and is what `AppState` holds as `Arc<dyn Store>`.
//!
//! # Implementations
//!
//! - **`postgres`** - `PgStore`, PostgreSQL through `sqlx`
//! - **`memory`** - `MemoryStore`, in-process, used when `DATABASE_URL` is
//!   unset and by the test suite
//!
//! Both implementations enforce the same constraints and report violations
//! with the constraint names declared in `migrations/`, so callers can react
//! to them without knowing which backend is in use.

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::backend::auth::users::{NewUser, User};
use crate::backend::follow::FollowEdge;
use crate::shared::{Comment, Follow, Group, NewGroup, Post, PostDraft, Window};

/// PostgreSQL store
pub mod postgres;

/// In-memory store
pub mod memory;

pub use memory::MemoryStore;
pub use postgres::PgStore;

/// Unique `(user_id, following_id)` on `follows`
pub const FOLLOWS_UNIQUE_PAIR: &str = "follows_unique_pair";
/// `user_id <> following_id` on `follows`
pub const FOLLOWS_NO_SELF_FOLLOW: &str = "follows_no_self_follow";
/// Unique `username` on `users`
pub const USERS_USERNAME_KEY: &str = "users_username_key";
/// Unique `slug` on `groups`
pub const GROUPS_SLUG_KEY: &str = "groups_slug_key";

/// Errors reported by store implementations
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("unique constraint violated: {constraint}")]
    UniqueViolation { constraint: String },

    #[error("check constraint violated: {constraint}")]
    CheckViolation { constraint: String },

    #[error("foreign key constraint violated: {constraint}")]
    ForeignKeyViolation { constraint: String },

    #[error("database error: {0}")]
    Database(sqlx::Error),

    #[error("migration failed: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

impl StoreError {
    /// Whether this is a unique violation of `constraint`
    pub fn is_unique_violation_of(&self, constraint: &str) -> bool {
        matches!(self, Self::UniqueViolation { constraint: c } if c == constraint)
    }

    /// Whether this is a check violation of `constraint`
    pub fn is_check_violation_of(&self, constraint: &str) -> bool {
        matches!(self, Self::CheckViolation { constraint: c } if c == constraint)
    }
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            let constraint = db_err.constraint().unwrap_or_default().to_string();
            if db_err.is_unique_violation() {
                return Self::UniqueViolation { constraint };
            }
            if db_err.is_check_violation() {
                return Self::CheckViolation { constraint };
            }
            if db_err.is_foreign_key_violation() {
                return Self::ForeignKeyViolation { constraint };
            }
        }
        Self::Database(err)
    }
}

pub type StoreResult<T> = Result<T, StoreError>;

/// User directory
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn create_user(&self, new_user: NewUser) -> StoreResult<User>;

    async fn user_by_id(&self, id: Uuid) -> StoreResult<Option<User>>;

    /// Resolve a handle (username) to a user
    async fn user_by_username(&self, username: &str) -> StoreResult<Option<User>>;
}

#[async_trait]
pub trait GroupStore: Send + Sync {
    async fn create_group(&self, group: NewGroup) -> StoreResult<Group>;

    async fn list_groups(&self) -> StoreResult<Vec<Group>>;

    async fn group_by_id(&self, id: i64) -> StoreResult<Option<Group>>;
}

#[async_trait]
pub trait PostStore: Send + Sync {
    async fn count_posts(&self) -> StoreResult<i64>;

    /// Posts ordered by id; `None` returns all of them
    async fn list_posts(&self, window: Option<Window>) -> StoreResult<Vec<Post>>;

    async fn post_by_id(&self, id: i64) -> StoreResult<Option<Post>>;

    async fn create_post(&self, author_id: Uuid, draft: PostDraft) -> StoreResult<Post>;

    /// Replace the editable fields; `None` when the post does not exist
    async fn update_post(&self, id: i64, draft: PostDraft) -> StoreResult<Option<Post>>;

    /// Delete a post and its comments; `false` when it did not exist
    async fn delete_post(&self, id: i64) -> StoreResult<bool>;
}

/// Comments are always addressed through their post
#[async_trait]
pub trait CommentStore: Send + Sync {
    async fn list_comments(&self, post_id: i64) -> StoreResult<Vec<Comment>>;

    async fn comment_by_id(&self, post_id: i64, id: i64) -> StoreResult<Option<Comment>>;

    async fn create_comment(
        &self,
        post_id: i64,
        author_id: Uuid,
        text: String,
    ) -> StoreResult<Comment>;

    async fn update_comment(
        &self,
        post_id: i64,
        id: i64,
        text: String,
    ) -> StoreResult<Option<Comment>>;

    async fn delete_comment(&self, post_id: i64, id: i64) -> StoreResult<bool>;
}

#[async_trait]
pub trait FollowStore: Send + Sync {
    /// Read-only existence check used by the follow guard
    async fn follow_exists(&self, actor: Uuid, target: Uuid) -> StoreResult<bool>;

    /// Persist a validated edge
    ///
    /// Fails with a unique violation of [`FOLLOWS_UNIQUE_PAIR`] when a
    /// concurrent request inserted the same edge first.
    async fn insert_follow(&self, edge: &FollowEdge) -> StoreResult<Follow>;

    /// Edges initiated by `actor`, ordered by id
    ///
    /// With `terms`, only rows whose followed username contains every term,
    /// case-insensitively, are returned.
    async fn list_follows(&self, actor: Uuid, terms: &[&str]) -> StoreResult<Vec<Follow>>;
}

/// Everything the HTTP layer needs from persistence
pub trait Store: UserStore + GroupStore + PostStore + CommentStore + FollowStore {}

impl<T> Store for T where T: UserStore + GroupStore + PostStore + CommentStore + FollowStore {}
