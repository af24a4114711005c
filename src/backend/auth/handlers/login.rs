/**
 * Login Handler
 *
 * This module implements the user authentication handler for POST /api/auth/login.
 *
 * # Authentication Process
 *
 * 1. Look up user by username
 * 2. Verify password using bcrypt
 * 3. Generate a signed token carrying id, username and role
 * 4. Return token and user info
 *
 * An unknown username and a wrong password get the same 401 response.
 */

use axum::{extract::State, response::Json};
use bytes::Bytes;

use crate::backend::auth::handlers::types::{
    credentials, decode_body, AuthResponse, LoginRequest, UserResponse,
};
use crate::backend::auth::sessions::create_token;
use crate::backend::auth::users::{get_user_by_username, verify_password};
use crate::backend::error::BackendError;
use crate::backend::server::state::AppState;

/// Login handler
///
/// # Errors
///
/// * `400 Bad Request` - If username or password is missing
/// * `401 Unauthorized` - If user is not found or password is incorrect
/// * `500 Internal Server Error` - If the store read or token generation fails
pub async fn login(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<AuthResponse>, BackendError> {
    let request: LoginRequest = decode_body(&body);
    let (username, password) = credentials(&request.username, &request.password)
        .ok_or_else(|| BackendError::bad_request("Username and password are required."))?;

    let user = get_user_by_username(&state.collections.users, username)
        .await?
        .ok_or_else(|| {
            tracing::warn!("Login failed, unknown user: {}", username);
            BackendError::unauthorized("Invalid credentials.")
        })?;

    if !verify_password(password, &user.password_hash)? {
        tracing::warn!("Login failed, wrong password for: {}", username);
        return Err(BackendError::unauthorized("Invalid credentials."));
    }

    let token = create_token(&state.sessions, &user).map_err(|e| {
        tracing::error!("Failed to create token: {:?}", e);
        BackendError::internal("Failed to create token.")
    })?;

    tracing::info!("User logged in: {} ({})", user.username, user.role);

    Ok(Json(AuthResponse {
        message: "Login successful".to_string(),
        token,
        user: UserResponse::from(&user),
    }))
}
