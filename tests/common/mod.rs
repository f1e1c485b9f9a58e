//! Common test utilities and helpers
//!
//! This module provides shared utilities for all tests including:
//! - A test server over the in-memory store
//! - Authentication test helpers
//! - Custom assertion macros
//! - PostgreSQL fixtures gated on `DATABASE_URL`

#![allow(dead_code)]

pub mod assertions;
pub mod auth_helpers;
pub mod database;
pub mod test_server;

// Re-export commonly used utilities
pub use auth_helpers::*;
pub use test_server::*;
