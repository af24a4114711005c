//! Backend Module
//!
//! This module contains all server-side code for the club website API: an
//! Axum HTTP server over flat JSON collection files and an uploads
//! directory.
//!
//! This module is only compiled when the `ssr` feature is enabled.
//!
//! # Architecture
//!
//! The backend is organized into focused submodules:
//!
//! - **`server`** - Configuration loading, application state, initialization
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`auth`** - Users, password hashing, tokens, admin bootstrap
//! - **`middleware`** - Token verification and role extractors
//! - **`store`** - Flat-file JSON collections
//! - **`media`** - Uploaded image storage and multipart parsing
//! - **`roster`** - Team member and player records with images
//! - **`gallery`** - Gallery images and captions
//! - **`error`** - Backend-specific error types
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - Server binary
//! ├── server/         - Server initialization and state
//! ├── routes/         - Route configuration
//! ├── auth/           - Authentication
//! ├── middleware/     - Request middleware
//! ├── store/          - JSON collection files
//! ├── media/          - Upload storage
//! ├── roster/         - Team and players
//! ├── gallery/        - Image gallery
//! └── error/          - Error types
//! ```
//!
//! # Persisted Layout
//!
//! ```text
//! <DATA_DIR>/
//! ├── users.json
//! ├── gallery_metadata.json
//! ├── team_management_data.json
//! ├── players_data.json
//! └── uploads/
//!     ├── gallery/
//!     ├── team_images/
//!     └── player_images/
//! ```
//!
//! # Concurrency
//!
//! Each collection file is read and written whole. Updates of one
//! collection are serialized by an async mutex held across the
//! read-modify-write cycle; reads take no lock.

/// Server initialization, configuration, and state
pub mod server;

/// Route configuration
pub mod routes;

/// Authentication and user management
pub mod auth;

/// Request middleware
pub mod middleware;

/// Flat-file JSON collections
pub mod store;

/// Uploaded media storage
pub mod media;

/// Team members and players
pub mod roster;

/// Image gallery
pub mod gallery;

/// Backend-specific error types
pub mod error;

pub use error::BackendError;
pub use server::{create_app, load_config, AppState};
