/**
 * Gallery Handlers
 *
 * Gallery images are plain files in `uploads/gallery/`; their captions live
 * in `gallery_metadata.json` keyed by file name. The listing is driven by
 * the files on disk, so an image without metadata still shows up (with an
 * empty caption) and metadata without a file does not.
 */

use axum::{
    extract::{multipart::MultipartRejection, Multipart, Path, State},
    response::Json,
};
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::backend::error::BackendError;
use crate::backend::media::{storage::validate_filename, MediaCollection, MediaError, UploadForm};
use crate::backend::middleware::AdminUser;
use crate::backend::server::state::AppState;
use crate::shared::gallery::is_gallery_image;
use crate::shared::{GalleryImage, GalleryImageMeta};

const GALLERY: MediaCollection = MediaCollection::Gallery;

/// Response to a successful upload
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    pub message: String,
    /// Public URL of the stored image
    pub file_path: String,
    pub filename: String,
    pub caption: String,
}

/// Response to a caption change
#[derive(Debug, Serialize, Deserialize)]
pub struct CaptionResponse {
    pub message: String,
    pub filename: String,
    pub caption: String,
}

/// Response to a delete
#[derive(Debug, Serialize, Deserialize)]
pub struct DeleteResponse {
    pub message: String,
    pub filename: String,
}

/// GET /api/gallery/images
pub async fn list_images(State(state): State<AppState>) -> Result<Json<Vec<GalleryImage>>, BackendError> {
    let files = state.media.list(GALLERY).await?;
    let metadata = state.collections.gallery.load().await?;

    let images = files
        .into_iter()
        .filter(|filename| is_gallery_image(filename))
        .map(|filename| {
            let caption = metadata
                .iter()
                .find(|meta| meta.filename == filename)
                .map(|meta| meta.caption.clone())
                .unwrap_or_default();
            GalleryImage {
                src: GALLERY.public_url(&filename),
                filename,
                caption,
            }
        })
        .collect();

    Ok(Json(images))
}

/// POST /api/gallery/upload
///
/// Multipart with a `galleryImage` file and an optional `caption`.
pub async fn upload_image(
    State(state): State<AppState>,
    AdminUser(admin): AdminUser,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<UploadResponse>, BackendError> {
    let form = UploadForm::parse(multipart, &state.media, GALLERY).await?;

    let Some(stored) = form.file.as_ref() else {
        tracing::warn!("Gallery upload from {} without a file", admin.username);
        return Err(BackendError::bad_request("No file uploaded."));
    };
    let filename = stored.filename.clone();
    let caption = form.text("caption").unwrap_or_default().to_string();

    let entry = GalleryImageMeta {
        filename: filename.clone(),
        caption: caption.clone(),
    };
    let saved = state
        .collections
        .gallery
        .update(|metadata: &mut Vec<GalleryImageMeta>| -> Result<(), BackendError> {
            if metadata.iter().any(|m| m.filename == entry.filename) {
                tracing::warn!("Metadata entry for {} already exists", entry.filename);
            }
            metadata.push(entry);
            Ok(())
        })
        .await;

    if let Err(e) = saved {
        tracing::error!("Error saving metadata for {}: {}", filename, e);
        state.media.remove_best_effort(GALLERY, &filename).await;
        return Err(BackendError::internal("File uploaded, but failed to save metadata."));
    }

    tracing::info!("Uploaded {} with caption {:?}", filename, caption);
    Ok(Json(UploadResponse {
        message: "File uploaded successfully".to_string(),
        file_path: GALLERY.public_url(&filename),
        filename,
        caption,
    }))
}

/// PUT /api/gallery/image/{filename}/caption
///
/// Body `{"caption": "<text>"}`; anything else is a 400.
pub async fn update_caption(
    State(state): State<AppState>,
    AdminUser(_admin): AdminUser,
    Path(filename): Path<String>,
    body: Bytes,
) -> Result<Json<CaptionResponse>, BackendError> {
    validate_filename(&filename)?;

    let caption = serde_json::from_slice::<Value>(&body)
        .ok()
        .and_then(|body| body.get("caption").and_then(Value::as_str).map(str::to_string))
        .ok_or_else(|| BackendError::bad_request("Caption must be a string."))?;

    state
        .collections
        .gallery
        .update(|metadata: &mut Vec<GalleryImageMeta>| -> Result<(), BackendError> {
            let entry = metadata
                .iter_mut()
                .find(|m| m.filename == filename)
                .ok_or_else(|| BackendError::not_found("Image metadata not found."))?;
            entry.caption = caption.clone();
            Ok(())
        })
        .await?;

    Ok(Json(CaptionResponse {
        message: "Caption updated successfully".to_string(),
        filename,
        caption,
    }))
}

/// DELETE /api/gallery/image/{filename}
///
/// Removes the file, then its metadata. A missing file is not an error as
/// long as there was metadata to remove.
pub async fn delete_image(
    State(state): State<AppState>,
    AdminUser(admin): AdminUser,
    Path(filename): Path<String>,
) -> Result<Json<DeleteResponse>, BackendError> {
    let file_missing = match state.media.remove(GALLERY, &filename).await {
        Ok(()) => false,
        Err(e) if e.is_not_found() => true,
        Err(e @ MediaError::InvalidFilename(_)) => return Err(e.into()),
        Err(e) => {
            tracing::error!("Failed to delete gallery image {}: {}", filename, e);
            return Err(BackendError::internal("Failed to delete image or its metadata."));
        }
    };

    let removed_metadata = state
        .collections
        .gallery
        .update(|metadata: &mut Vec<GalleryImageMeta>| -> Result<bool, BackendError> {
            let before = metadata.len();
            metadata.retain(|m| m.filename != filename);
            Ok(metadata.len() < before)
        })
        .await?;

    tracing::info!("Gallery image {} deleted by {}", filename, admin.username);

    let message = match (file_missing, removed_metadata) {
        (false, _) => "Image and metadata deleted successfully",
        (true, true) => "Image file not found, but its metadata was removed.",
        (true, false) => {
            return Err(BackendError::not_found(
                "Image file not found, and no metadata found for it.",
            ))
        }
    };

    Ok(Json(DeleteResponse {
        message: message.to_string(),
        filename,
    }))
}
