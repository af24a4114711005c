/**
 * Authentication Middleware
 *
 * This module provides middleware for protecting routes that require
 * user authentication. It extracts and verifies the bearer token from the
 * Authorization header and attaches the token's identity to the request.
 *
 * Handlers read that identity through two extractors:
 *
 * - `AuthUser` - any authenticated user
 * - `AdminUser` - authenticated user whose token carries the admin role
 *
 * # Responses
 *
 * | Condition                        | Status | Message                                    |
 * |----------------------------------|--------|--------------------------------------------|
 * | No header / not a bearer token   | 401    | Access denied. No token provided.          |
 * | Token expired                    | 401    | Token expired.                             |
 * | Bad signature / malformed token  | 403    | Invalid token.                             |
 * | Other verification failure       | 500    | Failed to authenticate token.              |
 * | Valid token, role is not admin   | 403    | Access denied. Admin privileges required.  |
 */

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts},
    middleware::Next,
    response::Response,
};

use crate::backend::auth::sessions::verify_token;
use crate::backend::error::BackendError;
use crate::backend::server::state::AppState;
use crate::shared::Role;

/// Authenticated user data extracted from the token
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub user_id: String,
    pub username: String,
    pub role: Role,
}

/// Authentication middleware
///
/// This middleware:
/// 1. Extracts the bearer token from the Authorization header
/// 2. Verifies the token
/// 3. Attaches user data to request extensions for use in handlers
///
/// The role recorded in the token is trusted as-is; the store is not
/// consulted.
pub async fn auth_middleware(
    State(app_state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, BackendError> {
    let token = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .ok_or_else(|| {
            tracing::warn!("Missing or malformed Authorization header");
            BackendError::unauthorized("Access denied. No token provided.")
        })?;

    let claims = verify_token(&app_state.sessions, token).map_err(|e| {
        tracing::warn!("Token rejected: {}", e);
        BackendError::from(e)
    })?;

    request.extensions_mut().insert(AuthenticatedUser {
        user_id: claims.sub,
        username: claims.username,
        role: claims.role,
    });

    Ok(next.run(request).await)
}

fn authenticated_user(parts: &Parts) -> Result<AuthenticatedUser, BackendError> {
    parts
        .extensions
        .get::<AuthenticatedUser>()
        .cloned()
        .ok_or_else(|| {
            tracing::warn!("AuthenticatedUser not found in request extensions");
            BackendError::unauthorized("Access denied. No token provided.")
        })
}

/// Axum extractor for authenticated user
///
/// Requires `auth_middleware` to have run on the route.
#[derive(Clone, Debug)]
pub struct AuthUser(pub AuthenticatedUser);

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = BackendError;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(AuthUser(authenticated_user(parts)?))
    }
}

/// Axum extractor for an authenticated administrator
///
/// Place it before any body extractor so the role is checked before an
/// upload is read.
#[derive(Clone, Debug)]
pub struct AdminUser(pub AuthenticatedUser);

impl FromRequestParts<AppState> for AdminUser {
    type Rejection = BackendError;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = authenticated_user(parts)?;
        if !user.role.is_admin() {
            tracing::warn!("Admin route refused for {} ({})", user.username, user.role);
            return Err(BackendError::forbidden(
                "Access denied. Admin privileges required.",
            ));
        }
        Ok(AdminUser(user))
    }
}
