/**
 * Auth Routes
 *
 * # Routes
 *
 * - `POST /api/auth/register` - User registration (public)
 * - `POST /api/auth/login` - User login (public)
 * - `GET /api/auth/me` - Current user (requires authentication)
 */

use axum::{
    routing::{get, post},
    Router,
};

use crate::backend::auth::{get_me, login, register};
use crate::backend::server::state::AppState;

/// Configure public authentication routes
pub fn configure_api_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/api/auth/register", post(register))
        .route("/api/auth/login", post(login))
}

/// Configure authentication routes that need a token
///
/// The caller must wrap the returned router with `auth_middleware`.
pub fn configure_session_routes(router: Router<AppState>) -> Router<AppState> {
    router.route("/api/auth/me", get(get_me))
}
