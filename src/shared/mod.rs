//! Shared Module
//!
//! Types and data structures shared between the server and any client of
//! its JSON API. Everything here is plain serializable data with no server
//! dependencies, so it compiles without the `ssr` feature.
//!
//! # Overview
//!
//! - **`user`** - Account roles
//! - **`roster`** - Team members, players and the image URL wrapper
//! - **`gallery`** - Gallery metadata and listing entries
//! - **`error`** - Validation and serialization errors
//! - **`config`** - Server configuration and its builder

/// Account roles
pub mod user;

/// Team member and player records
pub mod roster;

/// Gallery image types
pub mod gallery;

/// Shared error types
pub mod error;

/// Application configuration
pub mod config;

/// Re-export commonly used types for convenience
pub use user::Role;
pub use roster::{Player, TeamMember, WithImageUrl};
pub use gallery::{GalleryImage, GalleryImageMeta};
pub use error::SharedError;
pub use config::{AdminCredentials, ConfigError, ServerConfig, ServerConfigBuilder};
