//! Gallery types
//!
//! Gallery images are keyed by their stored file name. Captions live in a
//! separate metadata collection; a file without metadata has an empty caption.

use serde::{Deserialize, Serialize};

/// One entry of the gallery metadata collection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryImageMeta {
    pub filename: String,
    #[serde(default)]
    pub caption: String,
}

/// A gallery image as listed by the API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryImage {
    /// Public URL of the image
    pub src: String,
    pub filename: String,
    pub caption: String,
}

/// Image extensions shown in the gallery listing
pub const GALLERY_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif"];

/// Whether a stored file should appear in the gallery listing
pub fn is_gallery_image(filename: &str) -> bool {
    filename
        .rsplit_once('.')
        .map(|(_, ext)| {
            GALLERY_EXTENSIONS
                .iter()
                .any(|allowed| ext.eq_ignore_ascii_case(allowed))
        })
        .unwrap_or(false)
}
