/**
 * Server Configuration
 *
 * This module loads the server configuration from environment variables
 * (after `.env` has been applied by the binary).
 *
 * # Variables
 *
 * | Variable           | Required | Default              |
 * |--------------------|----------|----------------------|
 * | `JWT_SECRET`       | yes      |                      |
 * | `PORT`             | no       | 3001                 |
 * | `DATA_DIR`         | no       | `.`                  |
 * | `UPLOADS_DIR`      | no       | `<DATA_DIR>/uploads` |
 * | `TOKEN_TTL_SECS`   | no       | 3600                 |
 * | `BCRYPT_COST`      | no       | 10                   |
 * | `MAX_UPLOAD_BYTES` | no       | 10485760             |
 * | `ADMIN_USERNAME`   | no       |                      |
 * | `ADMIN_PASSWORD`   | no       |                      |
 *
 * # Error Handling
 *
 * A missing `JWT_SECRET` or an unparsable number is a fatal configuration
 * error. The admin account is configured only when both admin variables
 * are set and non-empty.
 */

use std::str::FromStr;

use crate::shared::{ConfigError, ServerConfig};

/// Load configuration from the process environment
pub fn load_config() -> Result<ServerConfig, ConfigError> {
    from_vars(|key| std::env::var(key).ok())
}

/// Load configuration from an arbitrary variable lookup
pub fn from_vars<F>(lookup: F) -> Result<ServerConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

    let mut builder = ServerConfig::builder();

    if let Some(secret) = var("JWT_SECRET") {
        builder = builder.jwt_secret(secret);
    }
    if let Some(port) = parse_var(&var, "PORT")? {
        builder = builder.port(port);
    }
    if let Some(dir) = var("DATA_DIR") {
        builder = builder.data_dir(dir);
    }
    if let Some(dir) = var("UPLOADS_DIR") {
        builder = builder.uploads_dir(dir);
    }
    if let Some(ttl) = parse_var(&var, "TOKEN_TTL_SECS")? {
        builder = builder.token_ttl_secs(ttl);
    }
    if let Some(cost) = parse_var(&var, "BCRYPT_COST")? {
        builder = builder.bcrypt_cost(cost);
    }
    if let Some(limit) = parse_var(&var, "MAX_UPLOAD_BYTES")? {
        builder = builder.max_upload_bytes(limit);
    }
    if let (Some(username), Some(password)) = (var("ADMIN_USERNAME"), var("ADMIN_PASSWORD")) {
        builder = builder.admin(username, password);
    }

    builder.build()
}

fn parse_var<T, F>(var: &F, key: &'static str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    match var(key) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidValue { key, value: raw }),
    }
}
