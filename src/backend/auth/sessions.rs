/**
 * Session Tokens
 *
 * This module issues and verifies the signed, time-limited tokens handed out
 * at login. Tokens are HS256 JWTs whose claims carry the user ID, username
 * and role, so the role gate needs no store lookup.
 *
 * Verification failures are classified so the auth middleware can answer
 * an expired token differently from a forged or malformed one.
 */

use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::backend::auth::users::User;
use crate::backend::error::BackendError;
use crate::shared::Role;

/// JWT claims structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// User ID
    pub sub: String,
    /// Username at the time of login
    pub username: String,
    /// Role at the time of login
    pub role: Role,
    /// Expiration time (Unix timestamp)
    pub exp: u64,
    /// Issued at time (Unix timestamp)
    pub iat: u64,
}

/// Signing material and token lifetime
#[derive(Clone)]
pub struct SessionKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl_secs: u64,
}

impl std::fmt::Debug for SessionKeys {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionKeys")
            .field("ttl_secs", &self.ttl_secs)
            .finish_non_exhaustive()
    }
}

impl SessionKeys {
    pub fn new(secret: &str, ttl_secs: u64) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            ttl_secs,
        }
    }

    pub fn ttl_secs(&self) -> u64 {
        self.ttl_secs
    }
}

/// Why a token was rejected
#[derive(Debug, Error)]
pub enum TokenError {
    /// Signature valid but `exp` has passed
    #[error("token expired")]
    Expired,
    /// Malformed token, bad signature, or unexpected algorithm
    #[error("invalid token: {0}")]
    Invalid(jsonwebtoken::errors::Error),
    /// Any other verification failure
    #[error("token verification failed: {0}")]
    Other(jsonwebtoken::errors::Error),
}

impl From<jsonwebtoken::errors::Error> for TokenError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        match err.kind() {
            ErrorKind::ExpiredSignature => TokenError::Expired,
            ErrorKind::InvalidToken
            | ErrorKind::InvalidSignature
            | ErrorKind::InvalidAlgorithm
            | ErrorKind::MissingRequiredClaim(_)
            | ErrorKind::Base64(_)
            | ErrorKind::Json(_)
            | ErrorKind::Utf8(_) => TokenError::Invalid(err),
            _ => TokenError::Other(err),
        }
    }
}

impl From<TokenError> for BackendError {
    fn from(err: TokenError) -> Self {
        match err {
            TokenError::Expired => BackendError::unauthorized("Token expired."),
            TokenError::Invalid(_) => BackendError::forbidden("Invalid token."),
            TokenError::Other(_) => BackendError::internal("Failed to authenticate token."),
        }
    }
}

fn now_secs() -> u64 {
    chrono::Utc::now().timestamp().max(0) as u64
}

/// Sign arbitrary claims
pub fn sign_claims(keys: &SessionKeys, claims: &Claims) -> Result<String, jsonwebtoken::errors::Error> {
    encode(&Header::default(), claims, &keys.encoding)
}

/// Create a token for a user
///
/// The token expires `ttl_secs` after issue.
pub fn create_token(keys: &SessionKeys, user: &User) -> Result<String, jsonwebtoken::errors::Error> {
    let now = now_secs();

    let claims = Claims {
        sub: user.id.clone(),
        username: user.username.clone(),
        role: user.role,
        exp: now + keys.ttl_secs,
        iat: now,
    };

    sign_claims(keys, &claims)
}

/// Verify and decode a token
pub fn verify_token(keys: &SessionKeys, token: &str) -> Result<Claims, TokenError> {
    let token_data = decode::<Claims>(token, &keys.decoding, &Validation::default())?;
    Ok(token_data.claims)
}
