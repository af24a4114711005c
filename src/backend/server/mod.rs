//! Server Module
//!
//! This module contains the code that configures and starts the Axum HTTP
//! server.
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs    - Module exports and documentation
//! ├── state.rs  - AppState and FromRef implementations
//! ├── config.rs - Configuration loading from the environment
//! └── init.rs   - Storage preparation, admin bootstrap, app creation
//! ```
//!
//! # Initialization Flow
//!
//! 1. **Configuration Loading**: `load_config` reads the environment
//! 2. **State Creation**: collection stores, media storage and token keys
//! 3. **Storage Preparation**: collection files and upload directories
//! 4. **Admin Bootstrap**: configured admin account created or repaired
//! 5. **Router Creation**: all routes and middleware

/// Application state management
pub mod state;

/// Server configuration loading
pub mod config;

/// Server initialization
pub mod init;

// Re-export commonly used types
pub use config::load_config;
pub use init::create_app;
pub use state::AppState;
