//! Backend Module
//!
//! All server-side code: the Axum HTTP server, authentication, the follow
//! guard and persistence.
//!
//! # Architecture
//!
//! - **`server`** - Application state, store selection, app creation
//! - **`routes`** - Route configuration and router assembly
//! - **`auth`** - Users, JWT tokens and account endpoints
//! - **`middleware`** - Bearer token authentication
//! - **`extract`** - `Json`, `Query` and `Path` extractors rejecting with `BackendError`
//! - **`permissions`** - Owner-or-read-only checks
//! - **`posts`** / **`comments`** / **`groups`** - Content endpoints
//! - **`follow`** - Follow relationship guard and endpoints
//! - **`store`** - Storage traits, PostgreSQL and in-memory stores
//! - **`error`** - Backend error type and its HTTP rendering
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - Server binary
//! ├── server/         - Server initialization and state
//! ├── routes/         - Route configuration
//! ├── auth/           - Authentication
//! ├── middleware/     - Request middleware
//! ├── permissions.rs  - Object permissions
//! ├── posts/          - Post handlers
//! ├── comments/       - Comment handlers
//! ├── groups/         - Group handlers
//! ├── follow/         - Follow guard and handlers
//! ├── store/          - Persistence
//! └── error/          - Error types
//! ```
//!
//! # State Management
//!
//! `AppState` holds the store as `Arc<dyn Store>`, the JWT keys and the
//! configuration. Handlers pick what they need through `FromRef`. The
//! authenticated user travels from the middleware to handlers through request
//! extensions and the `AuthUser` extractor, never through global state.
//!
//! # Error Handling
//!
//! Handlers return `Result<_, BackendError>`; `BackendError` renders itself as
//! a JSON body with the matching status code.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Backend error types
pub mod error;

/// Authentication and user management
pub mod auth;

/// Middleware for request processing
pub mod middleware;

/// Request extractors with JSON rejections
pub mod extract;

/// Owner-or-read-only permission checks
pub mod permissions;

/// Post endpoints
pub mod posts;

/// Comment endpoints
pub mod comments;

/// Group endpoints
pub mod groups;

/// Follow relationship guard and endpoints
pub mod follow;

/// Persistence
pub mod store;

/// Re-export commonly used types
pub use server::{create_app, AppState};
pub use error::BackendError;
pub use follow::{FollowEdge, FollowGuard, FollowRejection};
pub use store::{MemoryStore, PgStore, Store};
