//! Shared Module
//!
//! Wire types exchanged over the REST API, their validation rules and the
//! application configuration. Nothing in here touches HTTP or the database
//! directly, so API clients can depend on these types as well.

/// Shared error types
pub mod error;

/// Application configuration
pub mod config;

/// Serde helpers for request bodies
pub mod serde_ext;

/// Limit/offset pagination
pub mod pagination;

/// Post types
pub mod post;

/// Comment types
pub mod comment;

/// Group types
pub mod group;

/// Follow types
pub mod follow;

/// Re-export commonly used types for convenience
pub use error::SharedError;
pub use config::{AppConfig, AppConfigBuilder, ConfigError};
pub use pagination::{LimitOffsetQuery, Page, Window};
pub use post::{Post, PostDraft, PostPayload};
pub use comment::{Comment, CommentPayload};
pub use group::{Group, NewGroup};
pub use follow::{Follow, FollowPayload, FollowSearch};
