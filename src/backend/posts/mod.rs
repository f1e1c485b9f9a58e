//! Posts
//!
//! HTTP handlers for `/api/v1/posts/` and `/api/v1/posts/{id}/`.

pub mod handlers;

pub use handlers::{create_post, delete_post, get_post, list_posts, partial_update_post, update_post};
