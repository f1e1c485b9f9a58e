//! Follow Module
//!
//! Directed "user A follows user B" relationships.
//!
//! - **`edge`** - `UserRef` and the validated `FollowEdge`
//! - **`guard`** - `FollowGuard`, the only producer of new edges
//! - **`handlers`** - `GET`/`POST /api/v1/follow/`
//!
//! # Flow
//!
//! ```text
//! POST {following} ──> AuthUser ──> FollowGuard::propose_follow ──> FollowStore::insert_follow
//!                                      │                                  │
//!                                      └─ FollowRejection (400)           └─ unique violation
//!                                                                            => DuplicateFollow
//! ```

pub mod edge;

pub mod guard;

pub mod handlers;

pub use edge::{FollowEdge, UserRef};
pub use guard::{list_following, FollowGuard, FollowRejection, GuardError};
pub use handlers::{create_follow, list_follows};
