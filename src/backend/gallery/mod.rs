//! Gallery Module
//!
//! Image gallery: files under `uploads/gallery/` plus captions in the
//! gallery metadata collection.
//!
//! - `GET    /api/gallery/images` - list (auth)
//! - `POST   /api/gallery/upload` - upload (admin)
//! - `PUT    /api/gallery/image/{filename}/caption` - change caption (admin)
//! - `DELETE /api/gallery/image/{filename}` - delete (admin)

/// HTTP handlers
pub mod handlers;

pub use handlers::{delete_image, list_images, update_caption, upload_image};
