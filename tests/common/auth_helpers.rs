//! Authentication test helpers
//!
//! Provides utilities for registering users, logging in, and building
//! bearer headers.

use axum::http::HeaderValue;
use axum_test::{TestResponse, TestServer};
use serde_json::json;

/// Admin account configured on every test server
pub const ADMIN_USERNAME: &str = "clubadmin";
pub const ADMIN_PASSWORD: &str = "admin-pass-1";

/// POST /api/auth/register
pub async fn register(server: &TestServer, username: &str, password: &str) -> TestResponse {
    server
        .post("/api/auth/register")
        .json(&json!({ "username": username, "password": password }))
        .await
}

/// POST /api/auth/login
pub async fn login(server: &TestServer, username: &str, password: &str) -> TestResponse {
    server
        .post("/api/auth/login")
        .json(&json!({ "username": username, "password": password }))
        .await
}

/// Log in and return the token
pub async fn login_token(server: &TestServer, username: &str, password: &str) -> String {
    let response = login(server, username, password).await;
    assert_eq!(response.status_code(), 200, "login as {} failed", username);
    let body: serde_json::Value = response.json();
    body["token"].as_str().expect("token in login response").to_string()
}

/// Token of the bootstrapped admin
pub async fn admin_token(server: &TestServer) -> String {
    login_token(server, ADMIN_USERNAME, ADMIN_PASSWORD).await
}

/// Register a regular user and return their token
pub async fn user_token(server: &TestServer, username: &str) -> String {
    let response = register(server, username, "user-pass-1").await;
    assert_eq!(response.status_code(), 201, "register {} failed", username);
    login_token(server, username, "user-pass-1").await
}

/// Create authorization header value
pub fn bearer(token: &str) -> HeaderValue {
    HeaderValue::from_str(&format!("Bearer {}", token)).expect("valid header value")
}
