/**
 * Register Handler
 *
 * This module implements the user registration handler for POST /api/auth/register.
 *
 * # Registration Process
 *
 * 1. Require a non-empty username and password
 * 2. Hash password using bcrypt
 * 3. Insert the user, rejecting a taken username
 * 4. Return the public user info (no token; clients log in separately)
 *
 * New accounts always get the `user` role.
 */

use axum::{extract::State, http::StatusCode, response::Json};
use bytes::Bytes;

use crate::backend::auth::handlers::types::{
    credentials, decode_body, RegisterRequest, RegisterResponse, UserResponse,
};
use crate::backend::auth::users::{create_user, hash_password};
use crate::backend::error::BackendError;
use crate::backend::server::state::AppState;
use crate::shared::Role;

/// Register handler
///
/// # Errors
///
/// * `400 Bad Request` - If username or password is missing, or the username is taken
/// * `500 Internal Server Error` - If hashing or the store write fails
pub async fn register(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<RegisterResponse>), BackendError> {
    let request: RegisterRequest = decode_body(&body);
    let (username, password) = credentials(&request.username, &request.password)
        .ok_or_else(|| BackendError::bad_request("Username and password are required."))?;

    tracing::info!("Register request for username: {}", username);

    let password_hash = hash_password(password, state.config.bcrypt_cost)?;
    let user = create_user(&state.collections.users, username, password_hash, Role::User).await?;

    tracing::info!("User registered: {} ({})", user.username, user.id);

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            message: "User registered successfully".to_string(),
            user: UserResponse::from(&user),
        }),
    ))
}
