//! Middleware Module
//!
//! HTTP middleware for the backend server.
//!
//! - **`auth`** - Bearer token authentication and the `AuthUser` extractor
//!
//! # Example
//!
//! ```rust,no_run
//! use axum::{middleware, Router};
//! use yatube::backend::middleware::auth_middleware;
//! use yatube::backend::server::AppState;
//!
//! fn protect(router: Router<AppState>, state: AppState) -> Router<AppState> {
//!     router.layer(middleware::from_fn_with_state(state, auth_middleware))
//! }
//! ```

pub mod auth;

pub use auth::{AuthenticatedUser, AuthUser, auth_middleware, extract_authenticated_user};
