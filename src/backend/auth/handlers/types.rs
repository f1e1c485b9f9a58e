/**
 * Authentication Handler Types
 *
 * Request and response bodies of the signup, JWT and "me" endpoints.
 */

use serde::{Deserialize, Serialize};

use crate::backend::auth::sessions::TokenPair;
use crate::backend::auth::users::User;

/// Sign up request
#[derive(Deserialize, Serialize, Debug)]
pub struct SignupRequest {
    /// 3-150 chars: letters, digits and `@ . + - _`
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
    /// Plain text, hashed before storage
    pub password: String,
}

/// `POST /api/v1/jwt/create/` body
#[derive(Deserialize, Serialize, Debug)]
pub struct TokenRequest {
    pub username: String,
    pub password: String,
}

/// `POST /api/v1/jwt/refresh/` body
#[derive(Deserialize, Serialize, Debug)]
pub struct RefreshRequest {
    pub refresh: String,
}

/// `POST /api/v1/jwt/verify/` body
#[derive(Deserialize, Serialize, Debug)]
pub struct VerifyRequest {
    pub token: String,
}

/// A freshly issued access token
#[derive(Serialize, Deserialize, Debug)]
pub struct AccessToken {
    pub access: String,
}

/// Auth response
///
/// Returned by signup: the new account and a token pair for it.
#[derive(Serialize, Deserialize, Debug)]
pub struct AuthResponse {
    pub access: String,
    pub refresh: String,
    pub user: UserResponse,
}

impl AuthResponse {
    pub fn new(tokens: TokenPair, user: UserResponse) -> Self {
        Self {
            access: tokens.access,
            refresh: tokens.refresh,
            user,
        }
    }
}

/// User response (without sensitive data)
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct UserResponse {
    /// User's unique ID (UUID)
    pub id: String,
    pub username: String,
    pub email: Option<String>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id.to_string(),
            username: user.username,
            email: user.email,
        }
    }
}
