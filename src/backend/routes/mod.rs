//! Route Configuration Module
//!
//! This module configures all HTTP routes for the backend server.
//! Routes are organized by functionality into focused submodules.
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs            - Module exports and documentation
//! ├── router.rs         - Main router creation, layers, static media
//! ├── api_routes.rs     - Authentication endpoints
//! ├── gallery_routes.rs - Gallery endpoints
//! └── roster_routes.rs  - Team and player endpoints
//! ```
//!
//! # Access Levels
//!
//! | Route                                   | Access |
//! |-----------------------------------------|--------|
//! | `GET /`                                 | public |
//! | `POST /api/auth/register`, `/login`     | public |
//! | `GET /uploads/...`                      | public |
//! | `GET /api/auth/me`                      | auth   |
//! | `GET /api/gallery/images`               | auth   |
//! | `GET /api/team[/{id}]`, `/api/players[/{id}]` | auth |
//! | every other gallery, team, player route | admin  |

/// Main router creation
pub mod router;

/// Authentication endpoints
pub mod api_routes;

/// Gallery endpoints
pub mod gallery_routes;

/// Team and player endpoints
pub mod roster_routes;

// Re-export commonly used functions
pub use router::create_router;
