//! Roster Module
//!
//! Team members and players: JSON records with an optional image each.
//!
//! # Module Structure
//!
//! ```text
//! roster/
//! ├── mod.rs      - Module exports
//! ├── record.rs   - MediaRecord trait and the shared record lifecycle
//! ├── team.rs     - TeamMember form rules
//! ├── players.rs  - Player form rules
//! └── handlers.rs - Generic HTTP handlers
//! ```

/// MediaRecord trait and shared lifecycle
pub mod record;

/// Team member form rules
pub mod team;

/// Player form rules
pub mod players;

/// HTTP handlers
pub mod handlers;

pub use record::{parse_int_lenient, with_image_url, MediaRecord};
