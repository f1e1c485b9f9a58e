//! Groups
//!
//! Read-only HTTP handlers for `/api/v1/groups/`, plus validated group
//! creation for seeding.

pub mod handlers;

pub use handlers::{get_group, list_groups, register_group};
