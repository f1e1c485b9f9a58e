/**
 * User Model
 *
 * This module holds the user record, the validation rules for new accounts
 * and password hashing. Persistence lives behind `UserStore`.
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::SharedError;

const USERNAME_MAX_LEN: usize = 150;
const USERNAME_MIN_LEN: usize = 3;
const PASSWORD_MIN_LEN: usize = 8;

/// User struct representing a user in the database
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    /// Unique user ID (UUID)
    pub id: Uuid,
    /// Username (unique handle)
    pub username: String,
    /// User email address
    pub email: Option<String>,
    /// Hashed password (bcrypt)
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
    /// Updated at timestamp
    pub updated_at: DateTime<Utc>,
}

/// Account data for a user about to be created
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub email: Option<String>,
    pub password_hash: String,
}

/// Validate username format
///
/// Usernames must be:
/// - 3-150 characters long
/// - Letters, digits and `@ . + - _` only
pub fn is_valid_username(username: &str) -> bool {
    let len = username.chars().count();
    if !(USERNAME_MIN_LEN..=USERNAME_MAX_LEN).contains(&len) {
        return false;
    }

    username
        .chars()
        .all(|c| c.is_alphanumeric() || matches!(c, '@' | '.' | '+' | '-' | '_'))
}

/// Validate signup fields
pub fn validate_signup(
    username: &str,
    email: Option<&str>,
    password: &str,
) -> Result<(), SharedError> {
    if !is_valid_username(username) {
        return Err(SharedError::validation(
            "username",
            "Enter a valid username. This value may contain only letters, numbers, and @/./+/-/_ characters.",
        ));
    }
    if let Some(email) = email {
        if !email.contains('@') {
            return Err(SharedError::validation("email", "Enter a valid email address."));
        }
    }
    if password.chars().count() < PASSWORD_MIN_LEN {
        return Err(SharedError::validation(
            "password",
            format!("Password must be at least {} characters", PASSWORD_MIN_LEN),
        ));
    }
    Ok(())
}

/// Hash a password with bcrypt
pub fn hash_password(password: &str, cost: u32) -> Result<String, bcrypt::BcryptError> {
    bcrypt::hash(password, cost)
}

/// Check a password against a stored bcrypt hash
pub fn verify_password(password: &str, password_hash: &str) -> Result<bool, bcrypt::BcryptError> {
    bcrypt::verify(password, password_hash)
}
