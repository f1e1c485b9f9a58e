//! Application configuration module
//!
//! Configuration is read from an optional TOML file and then overridden by
//! environment variables. The binary loads a `.env` file before calling
//! [`AppConfig::load`].
//!
//! | Variable                 | Meaning                                   |
//! |--------------------------|-------------------------------------------|
//! | `YATUBE_CONFIG`          | path of a TOML file with the same keys    |
//! | `DATABASE_URL`           | PostgreSQL URL; unset means in-memory     |
//! | `JWT_SECRET`             | HS256 signing secret                      |
//! | `SERVER_PORT`            | listen port                               |
//! | `ACCESS_TOKEN_TTL_SECS`  | access token lifetime                     |
//! | `REFRESH_TOKEN_TTL_SECS` | refresh token lifetime                    |
//! | `BCRYPT_COST`            | bcrypt work factor                        |
//! | `MEDIA_DIR`              | directory served under `/media`           |

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

const DEV_JWT_SECRET: &str = "yatube-dev-secret-change-in-production";

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// PostgreSQL connection URL
    pub database_url: Option<String>,
    /// Secret used to sign and verify JWTs
    pub jwt_secret: String,
    /// Port the HTTP server listens on
    pub port: u16,
    /// Lifetime of access tokens in seconds
    pub access_token_ttl_secs: u64,
    /// Lifetime of refresh tokens in seconds
    pub refresh_token_ttl_secs: u64,
    /// bcrypt cost used when hashing new passwords
    pub bcrypt_cost: u32,
    /// Directory with uploaded post images
    pub media_dir: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database_url: None,
            jwt_secret: DEV_JWT_SECRET.to_string(),
            port: 3000,
            access_token_ttl_secs: 24 * 60 * 60,
            refresh_token_ttl_secs: 30 * 24 * 60 * 60,
            bcrypt_cost: bcrypt::DEFAULT_COST,
            media_dir: PathBuf::from("media"),
        }
    }
}

impl AppConfig {
    /// Create a new AppConfigBuilder
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }

    /// Load configuration from `YATUBE_CONFIG` (if set) and the environment
    pub fn load() -> Result<Self, ConfigError> {
        let base = match std::env::var("YATUBE_CONFIG") {
            Ok(path) => Self::from_file(path)?,
            Err(_) => Self::default(),
        };
        let config = base.apply_env(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Parse a TOML configuration file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&raw)
    }

    /// Parse configuration from a TOML string
    pub fn from_toml(raw: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(raw)?)
    }

    /// Override fields with values from `lookup` (normally the environment)
    pub fn apply_env<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup("DATABASE_URL") {
            self.database_url = Some(url);
        }
        if let Some(secret) = lookup("JWT_SECRET") {
            self.jwt_secret = secret;
        }
        if let Some(port) = lookup("SERVER_PORT") {
            self.port = parse_var("SERVER_PORT", &port)?;
        }
        if let Some(ttl) = lookup("ACCESS_TOKEN_TTL_SECS") {
            self.access_token_ttl_secs = parse_var("ACCESS_TOKEN_TTL_SECS", &ttl)?;
        }
        if let Some(ttl) = lookup("REFRESH_TOKEN_TTL_SECS") {
            self.refresh_token_ttl_secs = parse_var("REFRESH_TOKEN_TTL_SECS", &ttl)?;
        }
        if let Some(cost) = lookup("BCRYPT_COST") {
            self.bcrypt_cost = parse_var("BCRYPT_COST", &cost)?;
        }
        if let Some(dir) = lookup("MEDIA_DIR") {
            self.media_dir = PathBuf::from(dir);
        }
        Ok(self)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.jwt_secret.is_empty() {
            return Err(ConfigError::MissingValue("jwt_secret"));
        }
        if self.access_token_ttl_secs == 0 || self.refresh_token_ttl_secs == 0 {
            return Err(ConfigError::Invalid {
                key: "token_ttl",
                message: "token lifetimes must be positive".to_string(),
            });
        }
        // bcrypt rejects costs outside 4..=31
        if !(4..=31).contains(&self.bcrypt_cost) {
            return Err(ConfigError::Invalid {
                key: "bcrypt_cost",
                message: format!("{} is outside 4..=31", self.bcrypt_cost),
            });
        }
        if let Some(url) = &self.database_url {
            if !url.starts_with("postgres://") && !url.starts_with("postgresql://") {
                return Err(ConfigError::InvalidUrl(url.clone()));
            }
        }
        if self.jwt_secret == DEV_JWT_SECRET {
            tracing::warn!("JWT_SECRET not set, using the development secret");
        }
        Ok(())
    }
}

fn parse_var<T: std::str::FromStr>(key: &'static str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::Invalid {
        key,
        message: format!("cannot parse {:?}", value),
    })
}

/// Builder for AppConfig
#[derive(Debug, Default)]
pub struct AppConfigBuilder {
    config: AppConfig,
}

impl AppConfigBuilder {
    /// Set the database URL
    pub fn database_url(mut self, url: impl Into<String>) -> Self {
        self.config.database_url = Some(url.into());
        self
    }

    /// Set the JWT secret
    pub fn jwt_secret(mut self, secret: impl Into<String>) -> Self {
        self.config.jwt_secret = secret.into();
        self
    }

    /// Set the listen port
    pub fn port(mut self, port: u16) -> Self {
        self.config.port = port;
        self
    }

    /// Set the access token lifetime
    pub fn access_token_ttl_secs(mut self, secs: u64) -> Self {
        self.config.access_token_ttl_secs = secs;
        self
    }

    /// Set the refresh token lifetime
    pub fn refresh_token_ttl_secs(mut self, secs: u64) -> Self {
        self.config.refresh_token_ttl_secs = secs;
        self
    }

    /// Set the bcrypt cost
    pub fn bcrypt_cost(mut self, cost: u32) -> Self {
        self.config.bcrypt_cost = cost;
        self
    }

    /// Set the media directory
    pub fn media_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config.media_dir = dir.into();
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<AppConfig, ConfigError> {
        self.config.validate()?;
        Ok(self.config)
    }
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
    #[error("missing value: {0}")]
    MissingValue(&'static str),
    #[error("invalid value for {key}: {message}")]
    Invalid { key: &'static str, message: String },
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}
