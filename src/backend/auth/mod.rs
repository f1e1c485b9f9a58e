//! Authentication Module
//!
//! User accounts, password hashing and JWT sessions, plus the HTTP handlers
//! for the account and token endpoints.
//!
//! # Architecture
//!
//! The auth module is organized into focused submodules:
//!
//! - **`users`** - User data model and validation
//! - **`sessions`** - JWT token generation and validation
//! - **`handlers`** - HTTP handlers for authentication endpoints
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! ├── users.rs        - User model, signup validation, password hashing
//! ├── sessions.rs     - JWT access/refresh tokens
//! └── handlers/       - HTTP handlers
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Signup**: username and password → user created → token pair returned
//! 2. **JWT create**: username and password verified → token pair returned
//! 3. **JWT refresh**: refresh token → new access token
//! 4. **Requests**: `Authorization: Bearer <access>` → `AuthUser` in handlers
//!
//! # Security
//!
//! - Passwords are hashed using bcrypt before storage
//! - Access and refresh tokens carry a `token_type` claim and are not
//!   interchangeable
//! - Invalid credentials return 401 (no information leakage)

/// User data model, validation and password hashing
pub mod users;

/// JWT token generation and validation
pub mod sessions;

/// HTTP handlers for authentication endpoints
pub mod handlers;

// Re-export commonly used types and handlers
pub use handlers::types::{AuthResponse, SignupRequest, TokenRequest, UserResponse};
pub use handlers::{get_me, obtain_token, refresh_token, signup, verify_token};
pub use sessions::{Claims, JwtKeys, TokenPair, TokenType};
