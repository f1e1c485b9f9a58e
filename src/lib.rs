//! Yatube - Main Library
//!
//! Yatube is the backend of a social blogging platform: users publish posts,
//! optionally inside a group, comment on each other's posts and follow each
//! other. Everything is exposed as a JSON REST API under `/api/v1/`.
//!
//! # Module Structure
//!
//! - **`shared`** - Wire types, validation rules and configuration
//!   - Posts, comments, groups, follows
//!   - Limit/offset pagination
//!   - `AppConfig`
//!
//! - **`backend`** - Server-side code
//!   - Axum HTTP server and routes
//!   - JWT authentication
//!   - The follow relationship guard
//!   - PostgreSQL and in-memory stores
//!
//! # Usage
//!
//! ```rust,no_run
//! use yatube::backend::server::init::create_app;
//! use yatube::shared::AppConfig;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let app = create_app(AppConfig::load()?).await?;
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:3000").await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Following
//!
//! A follow is a directed edge from the authenticated user to another user,
//! named by username. `backend::follow::FollowGuard` is the only code that
//! creates new edges: it rejects unknown users, self-follows and duplicates,
//! and the database backs the duplicate check with a unique constraint.
//!
//! # Error Handling
//!
//! - `shared::SharedError` - field validation
//! - `backend::store::StoreError` - persistence
//! - `backend::error::BackendError` - everything an HTTP handler can return

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
pub mod backend;
