//! Route Configuration Module
//!
//! This module configures all HTTP routes for the backend server.
//!
//! # Architecture
//!
//! - **`router`** - Main router creation, static media and middleware
//! - **`api_routes`** - The `/api/v1/` endpoints
//!
//! # Route Organization
//!
//! 1. **API Routes** - Accounts, tokens, posts, comments, groups, follows
//! 2. **Media** - `/media/*` served from `AppConfig::media_dir`
//! 3. **Fallback Handler** - JSON 404
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use yatube::backend::routes::create_router;
//! use yatube::backend::server::AppState;
//! use yatube::backend::store::MemoryStore;
//! use yatube::shared::AppConfig;
//!
//! let state = AppState::new(Arc::new(MemoryStore::new()), AppConfig::default());
//! let router = create_router(state);
//! ```

pub mod router;

pub mod api_routes;

// Re-export commonly used functions
pub use router::create_router;
