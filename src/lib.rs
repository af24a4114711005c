//! Club Site - Backend Library
//!
//! Backend for a sports club website: user accounts with an admin role, an
//! image gallery with captions, and team member and player rosters with
//! optional photos. Records live in flat JSON files and images in an
//! uploads directory; everything is served as a JSON HTTP API.
//!
//! # Module Structure
//!
//! - **`shared`** - API types shared with clients
//!   - Roles, team member and player records, gallery entries
//!   - Server configuration and its builder
//!   - Validation and serialization errors
//!
//! - **`backend`** - Server-side code (only compiled with `ssr` feature)
//!   - Axum HTTP server, routes and auth middleware
//!   - Flat-file collections and media storage
//!   - Password hashing, tokens, admin bootstrap
//!
//! # Feature Flags
//!
//! - **`ssr`** (default) - Enables the backend modules and the server binary
//!
//! # Usage
//!
//! ```rust,no_run
//! use clubsite::shared::ServerConfig;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ServerConfig::builder()
//!     .jwt_secret("change-me")
//!     .data_dir("/srv/club")
//!     .build()?;
//! let app = clubsite::backend::create_app(config).await?;
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:3001").await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```

/// Types shared between server and clients
pub mod shared;

/// Server-side code (Axum server, storage, auth)
#[cfg(feature = "ssr")]
pub mod backend;
