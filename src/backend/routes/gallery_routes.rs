/**
 * Gallery Routes
 *
 * All gallery routes require authentication; upload, caption change and
 * delete also require the admin role (checked by the handlers' `AdminUser`
 * extractor).
 */

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::backend::gallery::{delete_image, list_images, update_caption, upload_image};
use crate::backend::server::state::AppState;

/// Configure gallery routes
pub fn configure_gallery_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/api/gallery/images", get(list_images))
        .route("/api/gallery/upload", post(upload_image))
        .route("/api/gallery/image/{filename}/caption", put(update_caption))
        .route("/api/gallery/image/{filename}", delete(delete_image))
}
