/**
 * Application State
 *
 * `AppState` is cloned into every handler. All members are cheap handles:
 * the config behind an `Arc`, collection stores that share their write
 * locks between clones, and path-only media storage.
 */

use std::sync::Arc;

use axum::extract::FromRef;

use crate::backend::auth::sessions::SessionKeys;
use crate::backend::media::MediaStore;
use crate::backend::store::Collections;
use crate::shared::ServerConfig;

/// Application state shared across all handlers
#[derive(Clone, Debug)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
    /// Token signing and verification keys
    pub sessions: SessionKeys,
    pub collections: Collections,
    pub media: MediaStore,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Self {
        let sessions = SessionKeys::new(&config.jwt_secret, config.token_ttl_secs);
        let collections = Collections::open(&config);
        let media = MediaStore::new(config.uploads_dir.clone());

        Self {
            config: Arc::new(config),
            sessions,
            collections,
            media,
        }
    }
}

impl FromRef<AppState> for SessionKeys {
    fn from_ref(state: &AppState) -> Self {
        state.sessions.clone()
    }
}

impl FromRef<AppState> for Collections {
    fn from_ref(state: &AppState) -> Self {
        state.collections.clone()
    }
}

impl FromRef<AppState> for MediaStore {
    fn from_ref(state: &AppState) -> Self {
        state.media.clone()
    }
}

/// State rooted in a temporary directory, with a cheap bcrypt cost
#[cfg(test)]
pub(crate) fn test_state(dir: &tempfile::TempDir) -> AppState {
    let config = ServerConfig::builder()
        .jwt_secret("test-secret")
        .data_dir(dir.path())
        .bcrypt_cost(4)
        .build()
        .expect("test config");
    AppState::new(config)
}
