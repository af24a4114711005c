//! Media Module
//!
//! Filesystem storage for uploaded images and multipart parsing of upload
//! requests.
//!
//! # Module Structure
//!
//! ```text
//! media/
//! ├── mod.rs     - MediaError and exports
//! ├── storage.rs - Collection directories, naming, listing, deletion
//! └── upload.rs  - Multipart form parsing with streamed file storage
//! ```

use std::io::ErrorKind;
use std::path::PathBuf;

use axum::extract::multipart::MultipartError;
use axum::extract::multipart::MultipartRejection;
use axum::http::StatusCode;
use thiserror::Error;

/// Collection directories, naming, listing, deletion
pub mod storage;

/// Multipart form parsing
pub mod upload;

pub use storage::{MediaCollection, MediaStore, UPLOADS_URL_PREFIX};
pub use upload::{StoredUpload, UploadForm};

/// Errors raised by media storage and upload parsing
#[derive(Debug, Error)]
pub enum MediaError {
    #[error("invalid filename: {0:?}")]
    InvalidFilename(String),

    #[error("unexpected file field: {0:?}")]
    UnexpectedField(String),

    #[error("multipart error: {0}")]
    Multipart(#[from] MultipartError),

    /// Request is not `multipart/form-data`
    #[error("not a multipart request: {0}")]
    NotMultipart(#[from] MultipartRejection),

    #[error("media I/O error at {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl MediaError {
    /// Whether this is an I/O error for a file that does not exist
    pub fn is_not_found(&self) -> bool {
        matches!(self, MediaError::Io { source, .. } if source.kind() == ErrorKind::NotFound)
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            MediaError::InvalidFilename(_) | MediaError::UnexpectedField(_) => {
                StatusCode::BAD_REQUEST
            }
            MediaError::Multipart(err) => err.status(),
            MediaError::NotMultipart(rejection) => rejection.status(),
            MediaError::Io { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn public_message(&self) -> String {
        match self {
            MediaError::InvalidFilename(_) => "Invalid filename.".to_string(),
            MediaError::UnexpectedField(name) => format!("Unexpected file field: {}", name),
            MediaError::Multipart(err) => err.body_text(),
            MediaError::NotMultipart(rejection) => rejection.body_text(),
            MediaError::Io { .. } => "Failed to process media file.".to_string(),
        }
    }
}
