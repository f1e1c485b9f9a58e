/**
 * Session Management and JWT Tokens
 *
 * HS256 access/refresh token pairs. Both kinds are signed with the same
 * secret and told apart by the `token_type` claim, so a refresh token is never
 * accepted where an access token is expected (and vice versa).
 */

use chrono::Utc;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::shared::AppConfig;

/// Which of the pair a token is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenType {
    Access,
    Refresh,
}

/// JWT claims structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// User ID
    pub sub: String,
    pub username: String,
    pub token_type: TokenType,
    /// Expiration time (Unix timestamp)
    pub exp: u64,
    /// Issued at time (Unix timestamp)
    pub iat: u64,
}

impl Claims {
    /// User ID from `sub`
    pub fn user_id(&self) -> Result<Uuid, SessionError> {
        Uuid::parse_str(&self.sub).map_err(|_| SessionError::InvalidSubject)
    }
}

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Token is invalid or expired")]
    Jwt(#[from] jsonwebtoken::errors::Error),

    #[error("Token has wrong type")]
    WrongTokenType,

    #[error("Token subject is not a user id")]
    InvalidSubject,
}

/// Access and refresh tokens issued together
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenPair {
    pub access: String,
    pub refresh: String,
}

/// Signing keys and lifetimes
pub struct JwtKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
    access_ttl_secs: u64,
    refresh_ttl_secs: u64,
}

impl JwtKeys {
    pub fn new(secret: &str, access_ttl_secs: u64, refresh_ttl_secs: u64) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            access_ttl_secs,
            refresh_ttl_secs,
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(
            &config.jwt_secret,
            config.access_token_ttl_secs,
            config.refresh_token_ttl_secs,
        )
    }

    /// Create a single token of the given type
    pub fn create_token(
        &self,
        user_id: Uuid,
        username: &str,
        token_type: TokenType,
    ) -> Result<String, SessionError> {
        let now = Utc::now().timestamp().max(0) as u64;
        let ttl = match token_type {
            TokenType::Access => self.access_ttl_secs,
            TokenType::Refresh => self.refresh_ttl_secs,
        };

        let claims = Claims {
            sub: user_id.to_string(),
            username: username.to_string(),
            token_type,
            exp: now + ttl,
            iat: now,
        };

        Ok(encode(&Header::default(), &claims, &self.encoding)?)
    }

    /// Create an access/refresh pair for a user
    pub fn create_pair(&self, user_id: Uuid, username: &str) -> Result<TokenPair, SessionError> {
        Ok(TokenPair {
            access: self.create_token(user_id, username, TokenType::Access)?,
            refresh: self.create_token(user_id, username, TokenType::Refresh)?,
        })
    }

    /// Verify signature, expiry and type of a token
    pub fn verify_token(&self, token: &str, expected: TokenType) -> Result<Claims, SessionError> {
        let token_data = decode::<Claims>(token, &self.decoding, &Validation::default())?;
        if token_data.claims.token_type != expected {
            return Err(SessionError::WrongTokenType);
        }
        Ok(token_data.claims)
    }
}

impl std::fmt::Debug for JwtKeys {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtKeys")
            .field("access_ttl_secs", &self.access_ttl_secs)
            .field("refresh_ttl_secs", &self.refresh_ttl_secs)
            .finish_non_exhaustive()
    }
}
