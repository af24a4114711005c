/**
 * User Model and Store Operations
 *
 * This module handles user accounts stored in the `users.json` collection.
 * Usernames are unique (exact, case-sensitive match) and passwords are kept
 * only as bcrypt hashes.
 */

use bcrypt::BcryptError;
use serde::{Deserialize, Serialize};

use crate::backend::error::BackendError;
use crate::backend::store::{JsonStore, StoreError};
use crate::shared::Role;

/// User record as stored in `users.json`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique user ID (UUID)
    pub id: String,
    /// Username (unique)
    pub username: String,
    /// Hashed password (bcrypt)
    #[serde(rename = "password")]
    pub password_hash: String,
    /// Account role
    #[serde(default)]
    pub role: Role,
}

/// Get user by username
///
/// # Returns
/// User or None if not found
pub async fn get_user_by_username(
    users: &JsonStore<User>,
    username: &str,
) -> Result<Option<User>, StoreError> {
    let records = users.load().await?;
    Ok(records.into_iter().find(|u| u.username == username))
}

/// Get user by ID
///
/// # Returns
/// User or None if not found
pub async fn get_user_by_id(
    users: &JsonStore<User>,
    user_id: &str,
) -> Result<Option<User>, StoreError> {
    let records = users.load().await?;
    Ok(records.into_iter().find(|u| u.id == user_id))
}

/// Create a new user
///
/// The uniqueness check and the insert happen inside one store update, so
/// two concurrent registrations of the same name cannot both succeed.
///
/// # Returns
/// Created user, or 400 if the username is taken
pub async fn create_user(
    users: &JsonStore<User>,
    username: &str,
    password_hash: String,
    role: Role,
) -> Result<User, BackendError> {
    users
        .update(|records| {
            if records.iter().any(|u| u.username == username) {
                return Err(BackendError::bad_request("Username already exists."));
            }

            let user = User {
                id: uuid::Uuid::new_v4().to_string(),
                username: username.to_string(),
                password_hash,
                role,
            };
            records.push(user.clone());
            Ok(user)
        })
        .await
}

/// Hash a password with the configured bcrypt cost
pub fn hash_password(password: &str, cost: u32) -> Result<String, BackendError> {
    bcrypt::hash(password, cost).map_err(|e| {
        tracing::error!("Failed to hash password: {}", e);
        BackendError::internal("Failed to hash password.")
    })
}

/// Check a password against a stored hash
///
/// A stored value that is not a bcrypt hash at all never matches.
pub fn verify_password(password: &str, password_hash: &str) -> Result<bool, BackendError> {
    match bcrypt::verify(password, password_hash) {
        Ok(matches) => Ok(matches),
        Err(
            e @ (BcryptError::InvalidHash(_)
            | BcryptError::InvalidPrefix(_)
            | BcryptError::InvalidCost(_)
            | BcryptError::InvalidBase64(_)),
        ) => {
            tracing::warn!("Stored password is not a valid bcrypt hash: {}", e);
            Ok(false)
        }
        Err(e) => {
            tracing::error!("Failed to verify password: {}", e);
            Err(BackendError::internal("Failed to verify password."))
        }
    }
}
