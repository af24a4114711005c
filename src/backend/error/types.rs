/**
 * Backend Error Types
 *
 * This module defines the error type returned by HTTP handlers and
 * middleware. Lower layers (record store, media storage, token verification)
 * have their own error enums; they convert into `BackendError` with `?`.
 *
 * # Error Categories
 *
 * ## Handler Errors
 *
 * Raised directly by handlers with an explicit status code:
 * - Missing or empty required fields (400)
 * - Missing, expired or invalid tokens (401 / 403)
 * - Unknown record IDs (404)
 *
 * ## Storage Errors
 *
 * Raised by the flat-file record store or media storage:
 * - Collection file unreadable or not valid JSON (500)
 * - Upload could not be written (500)
 * - Malformed multipart body (400, or the status axum reports)
 */

use thiserror::Error;
use axum::http::StatusCode;
use crate::backend::media::MediaError;
use crate::backend::store::StoreError;
use crate::shared::SharedError;

/// Backend-specific error types
///
/// Each variant maps to an HTTP status code and a message that is safe to
/// return to the caller.
///
/// # Usage
///
/// ```rust
/// use clubsite::backend::error::BackendError;
/// use axum::http::StatusCode;
///
/// let err = BackendError::not_found("Player not found.");
/// assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
/// ```
#[derive(Debug, Error)]
pub enum BackendError {
    /// Handler error with an explicit status (validation, auth, not found)
    #[error("Handler error: {message}")]
    HandlerError {
        /// HTTP status code for this error
        status: StatusCode,
        /// Human-readable error message
        message: String,
    },

    /// Record store error (collection file I/O or JSON)
    #[error(transparent)]
    StoreError(#[from] StoreError),

    /// Media storage or upload parsing error
    #[error(transparent)]
    MediaError(#[from] MediaError),

    /// Shared validation error
    #[error(transparent)]
    SharedError(#[from] SharedError),

    /// Serialization error
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl BackendError {
    /// Create a new handler error with a status code
    pub fn handler(status: StatusCode, message: impl Into<String>) -> Self {
        Self::HandlerError {
            status,
            message: message.into(),
        }
    }

    /// 400 Bad Request
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::handler(StatusCode::BAD_REQUEST, message)
    }

    /// 401 Unauthorized
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::handler(StatusCode::UNAUTHORIZED, message)
    }

    /// 403 Forbidden
    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::handler(StatusCode::FORBIDDEN, message)
    }

    /// 404 Not Found
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::handler(StatusCode::NOT_FOUND, message)
    }

    /// 500 Internal Server Error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::handler(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `HandlerError` - Uses the status code from the error
    /// - `StoreError` - 500 Internal Server Error
    /// - `MediaError` - Depends on the media error (400 for bad input)
    /// - `SharedError` - 400 Bad Request
    /// - `SerializationError` - 500 Internal Server Error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::HandlerError { status, .. } => *status,
            Self::StoreError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::MediaError(err) => err.status_code(),
            Self::SharedError(_) => StatusCode::BAD_REQUEST,
            Self::SerializationError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the message returned to the caller
    ///
    /// Storage failures report a generic message; the detailed cause
    /// (which may include server paths) is only logged.
    pub fn message(&self) -> String {
        match self {
            Self::HandlerError { message, .. } => message.clone(),
            Self::StoreError(_) => "Failed to access stored data.".to_string(),
            Self::MediaError(err) => err.public_message(),
            Self::SharedError(err) => err.public_message(),
            Self::SerializationError(_) => "Failed to encode response.".to_string(),
        }
    }
}
