//! Application configuration module
//!
//! Provides the configuration type for the club site server and a builder
//! for assembling it programmatically. Loading from the process environment
//! lives in `backend::server::config`.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default listen port
pub const DEFAULT_PORT: u16 = 3001;

/// Default token lifetime (one hour)
pub const DEFAULT_TOKEN_TTL_SECS: u64 = 60 * 60;

/// Default bcrypt cost
pub const DEFAULT_BCRYPT_COST: u32 = 10;

/// Default request body limit for uploads (10 MiB)
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Credentials for the account created or repaired at startup
#[derive(Clone, PartialEq, Eq)]
pub struct AdminCredentials {
    pub username: String,
    pub password: String,
}

impl std::fmt::Debug for AdminCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminCredentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Server configuration
#[derive(Clone)]
pub struct ServerConfig {
    /// Listen port
    pub port: u16,
    /// Directory holding the JSON collection files
    pub data_dir: PathBuf,
    /// Root directory for uploaded media
    pub uploads_dir: PathBuf,
    /// HMAC secret used to sign tokens
    pub jwt_secret: String,
    /// Token lifetime in seconds
    pub token_ttl_secs: u64,
    /// bcrypt cost used for new password hashes
    pub bcrypt_cost: u32,
    /// Maximum accepted request body size for uploads
    pub max_upload_bytes: usize,
    /// Bootstrap admin, if configured
    pub admin: Option<AdminCredentials>,
}

impl std::fmt::Debug for ServerConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServerConfig")
            .field("port", &self.port)
            .field("data_dir", &self.data_dir)
            .field("uploads_dir", &self.uploads_dir)
            .field("jwt_secret", &"<redacted>")
            .field("token_ttl_secs", &self.token_ttl_secs)
            .field("bcrypt_cost", &self.bcrypt_cost)
            .field("max_upload_bytes", &self.max_upload_bytes)
            .field("admin", &self.admin)
            .finish()
    }
}

impl ServerConfig {
    /// Create a new ServerConfigBuilder
    pub fn builder() -> ServerConfigBuilder {
        ServerConfigBuilder::default()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.jwt_secret.is_empty() {
            return Err(ConfigError::MissingValue("JWT_SECRET"));
        }
        if !bcrypt_cost_range().contains(&self.bcrypt_cost) {
            return Err(ConfigError::InvalidValue {
                key: "BCRYPT_COST",
                value: self.bcrypt_cost.to_string(),
            });
        }
        if self.token_ttl_secs == 0 {
            return Err(ConfigError::InvalidValue {
                key: "TOKEN_TTL_SECS",
                value: "0".to_string(),
            });
        }
        Ok(())
    }

    /// Path of a collection file inside the data directory
    pub fn data_file(&self, file_name: impl AsRef<Path>) -> PathBuf {
        self.data_dir.join(file_name)
    }
}

// bcrypt rejects costs outside this range
fn bcrypt_cost_range() -> std::ops::RangeInclusive<u32> {
    4..=31
}

/// Builder for ServerConfig
#[derive(Debug, Default)]
pub struct ServerConfigBuilder {
    port: Option<u16>,
    data_dir: Option<PathBuf>,
    uploads_dir: Option<PathBuf>,
    jwt_secret: Option<String>,
    token_ttl_secs: Option<u64>,
    bcrypt_cost: Option<u32>,
    max_upload_bytes: Option<usize>,
    admin: Option<AdminCredentials>,
}

impl ServerConfigBuilder {
    /// Set the listen port
    pub fn port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    /// Set the data directory (defaults to the working directory)
    pub fn data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = Some(dir.into());
        self
    }

    /// Set the uploads directory (defaults to `<data_dir>/uploads`)
    pub fn uploads_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.uploads_dir = Some(dir.into());
        self
    }

    /// Set the token signing secret
    pub fn jwt_secret(mut self, secret: impl Into<String>) -> Self {
        self.jwt_secret = Some(secret.into());
        self
    }

    /// Set the token lifetime
    pub fn token_ttl_secs(mut self, secs: u64) -> Self {
        self.token_ttl_secs = Some(secs);
        self
    }

    /// Set the bcrypt cost
    pub fn bcrypt_cost(mut self, cost: u32) -> Self {
        self.bcrypt_cost = Some(cost);
        self
    }

    /// Set the upload body limit
    pub fn max_upload_bytes(mut self, bytes: usize) -> Self {
        self.max_upload_bytes = Some(bytes);
        self
    }

    /// Configure the bootstrap admin account
    pub fn admin(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.admin = Some(AdminCredentials {
            username: username.into(),
            password: password.into(),
        });
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<ServerConfig, ConfigError> {
        let jwt_secret = self
            .jwt_secret
            .filter(|s| !s.is_empty())
            .ok_or(ConfigError::MissingValue("JWT_SECRET"))?;
        let data_dir = self.data_dir.unwrap_or_else(|| PathBuf::from("."));
        let uploads_dir = self
            .uploads_dir
            .unwrap_or_else(|| data_dir.join("uploads"));

        let config = ServerConfig {
            port: self.port.unwrap_or(DEFAULT_PORT),
            data_dir,
            uploads_dir,
            jwt_secret,
            token_ttl_secs: self.token_ttl_secs.unwrap_or(DEFAULT_TOKEN_TTL_SECS),
            bcrypt_cost: self.bcrypt_cost.unwrap_or(DEFAULT_BCRYPT_COST),
            max_upload_bytes: self.max_upload_bytes.unwrap_or(DEFAULT_MAX_UPLOAD_BYTES),
            admin: self.admin,
        };
        config.validate()?;
        Ok(config)
    }
}

/// Configuration errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing value: {0}")]
    MissingValue(&'static str),
    #[error("invalid value for {key}: {value}")]
    InvalidValue { key: &'static str, value: String },
}
