/**
 * Get Current User Handler
 *
 * GET /api/auth/me returns the account behind the bearer token. The token
 * is verified by the auth middleware; this handler re-reads the user so a
 * deleted account is reported as 404 even while its token is still valid.
 */

use axum::{extract::State, response::Json};

use crate::backend::auth::handlers::types::UserResponse;
use crate::backend::auth::users::get_user_by_id;
use crate::backend::error::BackendError;
use crate::backend::middleware::AuthUser;
use crate::backend::server::state::AppState;

/// Get current user handler
///
/// # Errors
///
/// * `401 Unauthorized` - If no authenticated user is attached to the request
/// * `404 Not Found` - If the user no longer exists
pub async fn get_me(
    State(state): State<AppState>,
    AuthUser(auth): AuthUser,
) -> Result<Json<UserResponse>, BackendError> {
    let user = get_user_by_id(&state.collections.users, &auth.user_id)
        .await?
        .ok_or_else(|| {
            tracing::warn!("User not found: {}", auth.user_id);
            BackendError::not_found("User not found.")
        })?;

    Ok(Json(UserResponse::from(&user)))
}
