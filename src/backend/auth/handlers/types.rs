/**
 * Authentication Handler Types
 *
 * This module defines the request and response types used by authentication handlers.
 * These types are shared across register, login, and get_me handlers.
 */

use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::backend::auth::users::User;
use crate::shared::Role;

/// Register request
///
/// Both fields are optional at the type level so that a missing field is
/// answered with the API's own 400 message rather than a decode rejection.
#[derive(Deserialize, Serialize, Debug, Default)]
pub struct RegisterRequest {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

/// Login request
#[derive(Deserialize, Serialize, Debug, Default)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

/// Decode a JSON request body, treating an empty or malformed body as an
/// empty request
///
/// The handlers then answer with their own 400 for the missing fields.
pub(crate) fn decode_body<T: DeserializeOwned + Default>(body: &[u8]) -> T {
    if body.is_empty() {
        return T::default();
    }
    serde_json::from_slice(body).unwrap_or_else(|e| {
        tracing::debug!("Ignoring undecodable request body: {}", e);
        T::default()
    })
}

/// Read both credentials, treating empty strings as missing
pub(crate) fn credentials<'a>(
    username: &'a Option<String>,
    password: &'a Option<String>,
) -> Option<(&'a str, &'a str)> {
    let username = username.as_deref().filter(|u| !u.is_empty())?;
    let password = password.as_deref().filter(|p| !p.is_empty())?;
    Some((username, password))
}

/// User response (without sensitive data)
///
/// Never includes the password hash.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct UserResponse {
    pub id: String,
    pub username: String,
    pub role: Role,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.clone(),
            username: user.username.clone(),
            role: user.role,
        }
    }
}

/// Register response
#[derive(Serialize, Deserialize, Debug)]
pub struct RegisterResponse {
    pub message: String,
    pub user: UserResponse,
}

/// Login response
///
/// Carries the bearer token for subsequent requests.
#[derive(Serialize, Deserialize, Debug)]
pub struct AuthResponse {
    pub message: String,
    pub token: String,
    pub user: UserResponse,
}
