//! Shared Error Types
//!
//! This module defines error types that are shared between the server and any
//! client consuming the API types. They describe failures that make sense on
//! both sides of the wire, which today means a request field that is missing
//! or malformed. Collection and body decoding failures belong to the server's
//! own error types.
//!
//! # Usage
//!
//! ```rust
//! use clubsite::shared::error::SharedError;
//!
//! let error = SharedError::validation("name", "Name and role are required.");
//! assert!(error.to_string().contains("name"));
//! ```
use thiserror::Error;

/// Shared error types that can occur on either side of the API
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SharedError {
    /// Data validation error
    #[error("Validation error in field '{field}': {message}")]
    ValidationError {
        /// The field that failed validation
        field: String,
        /// Human-readable error message, safe to show to the caller
        message: String,
    },
}

impl SharedError {
    /// Create a new validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Message suitable for an API response body.
    ///
    /// Validation errors report only their message so the caller sees the
    /// same text the handler chose; the field name stays in logs.
    pub fn public_message(&self) -> String {
        match self {
            Self::ValidationError { message, .. } => message.clone(),
        }
    }
}
