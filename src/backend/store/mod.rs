//! Flat-file Record Store
//!
//! Each collection (users, team members, players, gallery metadata) lives in
//! its own JSON file under the data directory and is read and written as a
//! whole array.
//!
//! # Module Structure
//!
//! ```text
//! store/
//! ├── mod.rs        - Collections, file names, StoreError
//! └── json_store.rs - Generic JSON array file with serialized updates
//! ```

use std::path::PathBuf;

use thiserror::Error;

use crate::backend::auth::users::User;
use crate::shared::{GalleryImageMeta, Player, ServerConfig, TeamMember};

/// Generic JSON array file
pub mod json_store;

pub use json_store::JsonStore;

/// Collection file names inside the data directory
pub const USERS_FILE: &str = "users.json";
pub const GALLERY_METADATA_FILE: &str = "gallery_metadata.json";
pub const TEAM_FILE: &str = "team_management_data.json";
pub const PLAYERS_FILE: &str = "players_data.json";

/// Errors raised while reading or writing a collection file
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to access {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("{} does not contain a valid JSON array: {}", .path.display(), .source)]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("failed to serialize records for {}: {}", .path.display(), .source)]
    Serialize {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// All collections used by the server
#[derive(Clone, Debug)]
pub struct Collections {
    pub users: JsonStore<User>,
    pub gallery: JsonStore<GalleryImageMeta>,
    pub team: JsonStore<TeamMember>,
    pub players: JsonStore<Player>,
}

impl Collections {
    pub fn open(config: &ServerConfig) -> Self {
        Self {
            users: JsonStore::new(config.data_file(USERS_FILE)),
            gallery: JsonStore::new(config.data_file(GALLERY_METADATA_FILE)),
            team: JsonStore::new(config.data_file(TEAM_FILE)),
            players: JsonStore::new(config.data_file(PLAYERS_FILE)),
        }
    }

    /// Create any missing collection file as an empty array
    pub async fn ensure_exists(&self) -> Result<(), StoreError> {
        self.users.ensure_exists().await?;
        self.gallery.ensure_exists().await?;
        self.team.ensure_exists().await?;
        self.players.ensure_exists().await?;
        Ok(())
    }
}
