//! Common test utilities and helpers
//!
//! This module provides shared utilities for all tests including:
//! - A test application rooted in a temporary data directory
//! - Authentication test helpers
//! - Custom assertion macros

pub mod assertions;
pub mod auth_helpers;

use std::path::{Path, PathBuf};

use axum_test::TestServer;
use clubsite::backend::create_app;
use clubsite::shared::ServerConfig;
use tempfile::TempDir;

pub use auth_helpers::*;

/// Secret shared by the test server and tests that mint their own tokens
pub const JWT_SECRET: &str = "integration-test-secret";

/// Server configuration rooted at `dir`, with a cheap bcrypt cost
pub fn test_config(dir: &Path, admin_password: &str) -> ServerConfig {
    ServerConfig::builder()
        .jwt_secret(JWT_SECRET)
        .data_dir(dir)
        .bcrypt_cost(4)
        .admin(ADMIN_USERNAME, admin_password)
        .build()
        .expect("valid test config")
}

/// Start a server over an existing data directory
pub async fn start_server(dir: &Path, admin_password: &str) -> TestServer {
    let app = create_app(test_config(dir, admin_password))
        .await
        .expect("Failed to create app");
    TestServer::new(app).expect("Failed to start test server")
}

/// A running test server and the data directory it owns
pub struct TestApp {
    pub server: TestServer,
    pub dir: TempDir,
}

impl TestApp {
    pub async fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let server = start_server(dir.path(), ADMIN_PASSWORD).await;
        Self { server, dir }
    }

    /// Start a fresh server over the same data directory
    pub async fn restart(&mut self, admin_password: &str) {
        self.server = start_server(self.dir.path(), admin_password).await;
    }

    /// Path of a stored upload
    pub fn upload_path(&self, media_dir: &str, filename: &str) -> PathBuf {
        self.dir.path().join("uploads").join(media_dir).join(filename)
    }

    /// Parsed contents of a collection file
    pub fn read_collection(&self, file: &str) -> serde_json::Value {
        let raw = std::fs::read_to_string(self.dir.path().join(file)).expect("collection file");
        serde_json::from_str(&raw).expect("collection JSON")
    }

    /// Number of files in a media directory
    pub fn media_file_count(&self, media_dir: &str) -> usize {
        std::fs::read_dir(self.dir.path().join("uploads").join(media_dir))
            .map(|entries| entries.count())
            .unwrap_or(0)
    }
}
