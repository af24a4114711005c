//! Authentication Handlers Module
//!
//! This module contains all HTTP handlers for authentication endpoints.
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs      - Module exports and documentation
//! ├── types.rs    - Request and response types
//! ├── register.rs - User registration handler
//! ├── login.rs    - User authentication handler
//! └── me.rs       - Get current user handler
//! ```
//!
//! # Handlers
//!
//! - **`register`** - POST /api/auth/register - User registration
//! - **`login`** - POST /api/auth/login - User authentication
//! - **`get_me`** - GET /api/auth/me - Get current user info

/// Request and response types
pub mod types;

/// Register handler
pub mod register;

/// Login handler
pub mod login;

/// Get current user handler
pub mod me;

// Re-export commonly used types
pub use types::{AuthResponse, LoginRequest, RegisterRequest, RegisterResponse, UserResponse};

// Re-export handlers
pub use login::login;
pub use me::get_me;
pub use register::register;
