//! Authentication Handlers Module
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs      - Module exports and documentation
//! ├── types.rs    - Request and response types
//! ├── signup.rs   - User registration handler
//! ├── token.rs    - JWT create/refresh/verify handlers
//! └── me.rs       - Get current user handler
//! ```
//!
//! # Handlers
//!
//! - **`signup`** - POST /api/v1/auth/signup/
//! - **`obtain_token`** - POST /api/v1/jwt/create/
//! - **`refresh_token`** - POST /api/v1/jwt/refresh/
//! - **`verify_token`** - POST /api/v1/jwt/verify/
//! - **`get_me`** - GET /api/v1/auth/me/

pub mod types;

pub mod signup;

pub mod token;

pub mod me;

// Re-export commonly used types
pub use types::{AuthResponse, SignupRequest, TokenRequest, UserResponse};

// Re-export handlers
pub use signup::signup;
pub use token::{obtain_token, refresh_token, verify_token};
pub use me::get_me;
