//! Comments
//!
//! HTTP handlers for comments nested under posts.

pub mod handlers;

pub use handlers::{
    create_comment, delete_comment, get_comment, list_comments, partial_update_comment,
    update_comment,
};
