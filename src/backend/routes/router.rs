/**
 * Router Configuration
 *
 * This module provides the main router creation function that combines
 * all route configurations into a single Axum router.
 *
 * # Route Groups
 *
 * 1. Public routes: welcome banner, register, login
 * 2. Protected routes: everything behind `auth_middleware` (current user,
 *    gallery, team, players); admin-only handlers additionally take the
 *    `AdminUser` extractor
 * 3. Static media under `/uploads`
 * 4. Fallback handler (JSON 404)
 *
 * # Layers
 *
 * Applied to every route: request body limit for uploads, permissive CORS
 * for the browser client, and HTTP request tracing.
 */

use axum::{
    extract::DefaultBodyLimit,
    middleware::from_fn_with_state,
    routing::get,
    Router,
};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};

use crate::backend::error::BackendError;
use crate::backend::media::UPLOADS_URL_PREFIX;
use crate::backend::middleware::auth_middleware;
use crate::backend::routes::api_routes::{configure_api_routes, configure_session_routes};
use crate::backend::routes::gallery_routes::configure_gallery_routes;
use crate::backend::routes::roster_routes::configure_roster_routes;
use crate::backend::server::state::AppState;

/// Body of `GET /`
pub const WELCOME_MESSAGE: &str = "Welcome to the club website backend API";

async fn welcome() -> &'static str {
    WELCOME_MESSAGE
}

async fn not_found() -> BackendError {
    BackendError::not_found("Route not found.")
}

/// Create the Axum router with all routes configured
///
/// # Arguments
///
/// * `app_state` - Application state (config, collections, media storage, token keys)
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
pub fn create_router(app_state: AppState) -> Router<()> {
    // Routes that need a verified token
    let protected = Router::new();
    let protected = configure_session_routes(protected);
    let protected = configure_gallery_routes(protected);
    let protected = configure_roster_routes(protected);
    let protected =
        protected.route_layer(from_fn_with_state(app_state.clone(), auth_middleware));

    // Public routes
    let router = Router::new().route("/", get(welcome));
    let router = configure_api_routes(router);

    let router = router.merge(protected);

    // Uploaded media, served without authentication
    let router = router.nest_service(
        UPLOADS_URL_PREFIX,
        ServeDir::new(app_state.media.root().to_path_buf()),
    );

    let router = router.fallback(not_found);

    let body_limit = app_state.config.max_upload_bytes;
    router
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive())
                .layer(DefaultBodyLimit::max(body_limit)),
        )
        .with_state(app_state)
}
