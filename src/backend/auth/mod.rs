//! Authentication Module
//!
//! This module handles user accounts, registration, login and the signed
//! tokens that authorize later requests.
//!
//! # Architecture
//!
//! - **`users`** - User record and `users.json` operations
//! - **`sessions`** - Token generation and validation
//! - **`bootstrap`** - Startup reconciliation of the configured admin account
//! - **`handlers`** - HTTP handlers for authentication endpoints
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! ├── users.rs        - User model and store operations
//! ├── sessions.rs     - Token management
//! ├── bootstrap.rs    - Admin account bootstrap
//! └── handlers/       - HTTP handlers
//!     ├── mod.rs      - Handler exports
//!     ├── types.rs    - Request/response types
//!     ├── register.rs - User registration handler
//!     ├── login.rs    - User authentication handler
//!     └── me.rs       - Get current user handler
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Register**: username and password → user stored with role `user`
//! 2. **Login**: credentials verified → token carrying id, username and role returned
//! 3. **Protected requests**: `Authorization: Bearer <token>` → verified by middleware
//!
//! # Security
//!
//! - Passwords are hashed using bcrypt before storage
//! - Tokens are stateless and expire after the configured TTL (one hour by default)
//! - Unknown usernames and wrong passwords get the same 401 response

/// User data model and store operations
pub mod users;

/// Token generation and validation
pub mod sessions;

/// Admin account bootstrap
pub mod bootstrap;

/// HTTP handlers for authentication endpoints
pub mod handlers;

// Re-export commonly used types and handlers
pub use bootstrap::{ensure_admin, AdminBootstrap};
pub use handlers::types::{AuthResponse, LoginRequest, RegisterRequest, UserResponse};
pub use handlers::{get_me, login, register};
pub use sessions::{Claims, SessionKeys, TokenError};
pub use users::User;
