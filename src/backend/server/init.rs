/**
 * Server Initialization
 *
 * This module prepares everything the HTTP server needs before it starts
 * accepting requests.
 *
 * # Initialization Process
 *
 * 1. Create any missing collection file as `[]`
 * 2. Create the uploads root and its collection directories
 * 3. Reconcile the configured admin account
 * 4. Create and configure the router
 *
 * Failing to prepare files or directories aborts startup. A failed admin
 * bootstrap is logged and the server starts anyway.
 */

use axum::Router;

use crate::backend::auth::bootstrap::ensure_admin;
use crate::backend::error::BackendError;
use crate::backend::routes::router::create_router;
use crate::backend::server::state::AppState;
use crate::shared::ServerConfig;

/// Create and configure the Axum application
pub async fn create_app(config: ServerConfig) -> Result<Router<()>, BackendError> {
    tracing::info!("Initializing club site backend server");
    tracing::debug!("Configuration: {:?}", config);

    let app_state = AppState::new(config);

    app_state.collections.ensure_exists().await?;
    app_state.media.ensure_dirs().await?;
    tracing::info!(
        "Data directory {} and uploads directory {} ready",
        app_state.config.data_dir.display(),
        app_state.media.root().display()
    );

    if let Err(e) = ensure_admin(
        &app_state.collections.users,
        app_state.config.admin.as_ref(),
        app_state.config.bcrypt_cost,
    )
    .await
    {
        tracing::error!("Error during admin user bootstrap: {}", e);
    }

    let app = create_router(app_state);
    tracing::info!("Router configured");

    Ok(app)
}
