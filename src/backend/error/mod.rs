//! Backend Error Module
//!
//! This module defines the error type used by HTTP handlers and middleware.
//! It can be returned directly from handlers and converts into a JSON
//! response with the matching status code.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - Error type definitions
//! └── conversion.rs - IntoResponse implementation
//! ```

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use types::BackendError;
