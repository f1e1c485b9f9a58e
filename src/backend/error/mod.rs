//! Backend Error Module
//!
//! This module defines error types specific to the backend server.
//! These errors are used in HTTP handlers and can be converted to HTTP responses.
//!
//! # Architecture
//!
//! The error module is organized into focused submodules:
//!
//! - **`types`** - Error type definitions and constructors
//! - **`conversion`** - Error conversion implementations (IntoResponse, etc.)
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - Error type definitions
//! └── conversion.rs - Error conversion implementations
//! ```
//!
//! # Error Types
//!
//! - `HandlerError` - Errors with an explicit status code
//! - `Unauthorized` / `Forbidden` / `NotFound` - Fixed-status errors
//! - `SharedError` - Request validation errors from the shared module
//! - `FollowRejected` - Follow requests refused by the guard
//! - `StoreError` - Persistence failures
//!
//! # HTTP Response Conversion
//!
//! All backend errors implement `IntoResponse` from Axum, allowing them to be
//! returned directly from handlers. The error is automatically converted to an
//! appropriate HTTP status code and JSON response body.
//!
//! # Example
//!
//! ```rust,no_run
//! use yatube::backend::error::BackendError;
//! use axum::Json;
//!
//! async fn handler() -> Result<Json<Vec<String>>, BackendError> {
//!     Err(BackendError::not_found())
//! }
//! ```

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use types::BackendError;

