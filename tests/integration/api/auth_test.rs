//! Authentication API integration tests
//!
//! Tests for registration, login, token verification, and admin bootstrap.

use axum::http::{header::AUTHORIZATION, HeaderValue, StatusCode};
use clubsite::backend::auth::sessions::{sign_claims, Claims, SessionKeys};
use clubsite::shared::Role;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use crate::assert_error;
use crate::common::{
    admin_token, bearer, login, login_token, register, user_token, TestApp, ADMIN_PASSWORD,
    ADMIN_USERNAME, JWT_SECRET,
};

fn signed_token(exp_offset_secs: i64, role: Role) -> String {
    let now = chrono::Utc::now().timestamp();
    let claims = Claims {
        sub: "someone".to_string(),
        username: "someone".to_string(),
        role,
        exp: (now + exp_offset_secs) as u64,
        iat: (now - 7200) as u64,
    };
    sign_claims(&SessionKeys::new(JWT_SECRET, 3600), &claims).unwrap()
}

#[tokio::test]
async fn test_welcome_banner() {
    let app = TestApp::new().await;
    let response = app.server.get("/").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert!(response.text().contains("Welcome"));
}

#[tokio::test]
async fn test_register_login_and_access_flow() {
    let app = TestApp::new().await;
    let server = &app.server;

    let response = register(server, "alice", "Secret123!").await;
    assert_eq!(response.status_code(), StatusCode::CREATED);
    let body: Value = response.json();
    assert_eq!(body["message"], "User registered successfully");
    assert_eq!(body["user"]["username"], "alice");
    assert_eq!(body["user"]["role"], "user");
    assert!(body["user"].get("password").is_none());

    let response = login(server, "alice", "wrong").await;
    assert_error!(response, StatusCode::UNAUTHORIZED, "Invalid credentials.");

    let response = login(server, "alice", "Secret123!").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["message"], "Login successful");
    let token = body["token"].as_str().unwrap().to_string();

    let response = server.get("/api/players").await;
    assert_error!(response, StatusCode::UNAUTHORIZED, "Access denied. No token provided.");

    let response = server
        .get("/api/players")
        .add_header(AUTHORIZATION, bearer(&token))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<Value>(), json!([]));

    let response = server
        .post("/api/players")
        .add_header(AUTHORIZATION, bearer(&token))
        .multipart(
            axum_test::multipart::MultipartForm::new()
                .add_text("name", "Ali")
                .add_text("position", "GK"),
        )
        .await;
    assert_error!(
        response,
        StatusCode::FORBIDDEN,
        "Access denied. Admin privileges required."
    );
}

#[tokio::test]
async fn test_register_duplicate_and_missing_fields() {
    let app = TestApp::new().await;

    assert_eq!(register(&app.server, "bob", "pw").await.status_code(), StatusCode::CREATED);

    let response = register(&app.server, "bob", "other").await;
    assert_error!(response, StatusCode::BAD_REQUEST, "Username already exists.");

    let response = app
        .server
        .post("/api/auth/register")
        .json(&json!({ "username": "carol" }))
        .await;
    assert_error!(response, StatusCode::BAD_REQUEST, "Username and password are required.");

    let response = app.server.post("/api/auth/login").json(&json!({})).await;
    assert_error!(response, StatusCode::BAD_REQUEST, "Username and password are required.");
}

#[tokio::test]
async fn test_bodyless_or_non_json_credentials_get_json_400() {
    let app = TestApp::new().await;

    let response = app.server.post("/api/auth/register").await;
    assert_error!(response, StatusCode::BAD_REQUEST, "Username and password are required.");

    let response = app
        .server
        .post("/api/auth/login")
        .text("username=bob&password=pw")
        .await;
    assert_error!(response, StatusCode::BAD_REQUEST, "Username and password are required.");
}

#[tokio::test]
async fn test_unknown_user_and_wrong_password_look_alike() {
    let app = TestApp::new().await;
    register(&app.server, "dave", "pw").await;

    let unknown = login(&app.server, "nobody", "pw").await;
    let wrong = login(&app.server, "dave", "nope").await;

    assert_eq!(unknown.status_code(), wrong.status_code());
    assert_eq!(unknown.text(), wrong.text());
}

#[tokio::test]
async fn test_me_returns_current_user() {
    let app = TestApp::new().await;
    let token = user_token(&app.server, "erin").await;

    let response = app
        .server
        .get("/api/auth/me")
        .add_header(AUTHORIZATION, bearer(&token))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["username"], "erin");
    assert_eq!(body["role"], "user");
}

#[tokio::test]
async fn test_expired_and_invalid_tokens_are_distinguished() {
    let app = TestApp::new().await;

    let expired = signed_token(-3600, Role::Admin);
    let response = app
        .server
        .get("/api/team")
        .add_header(AUTHORIZATION, bearer(&expired))
        .await;
    assert_error!(response, StatusCode::UNAUTHORIZED, "Token expired.");

    let response = app
        .server
        .get("/api/team")
        .add_header(AUTHORIZATION, bearer("definitely.not.valid"))
        .await;
    assert_error!(response, StatusCode::FORBIDDEN, "Invalid token.");

    let response = app
        .server
        .get("/api/team")
        .add_header(AUTHORIZATION, HeaderValue::from_static("Token abc"))
        .await;
    assert_error!(response, StatusCode::UNAUTHORIZED, "Access denied. No token provided.");
}

#[tokio::test]
async fn test_role_in_token_is_trusted() {
    let app = TestApp::new().await;

    // never stored, but signed with the server's secret
    let forged_admin = signed_token(600, Role::Admin);
    let response = app
        .server
        .delete("/api/team/does-not-exist")
        .add_header(AUTHORIZATION, bearer(&forged_admin))
        .await;
    assert_error!(response, StatusCode::NOT_FOUND, "Team member not found.");
}

#[tokio::test]
async fn test_admin_bootstrap_creates_and_repairs_admin() {
    let mut app = TestApp::new().await;

    let token = admin_token(&app.server).await;
    assert!(!token.is_empty());

    let users = app.read_collection("users.json");
    let admins: Vec<&Value> = users
        .as_array()
        .unwrap()
        .iter()
        .filter(|u| u["username"] == ADMIN_USERNAME)
        .collect();
    assert_eq!(admins.len(), 1);
    assert_eq!(admins[0]["role"], "admin");
    assert_ne!(admins[0]["password"], ADMIN_PASSWORD);

    // restarting with a different password rotates it
    app.restart("rotated-pass").await;
    let response = login(&app.server, ADMIN_USERNAME, ADMIN_PASSWORD).await;
    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
    let token = login_token(&app.server, ADMIN_USERNAME, "rotated-pass").await;
    assert!(!token.is_empty());

    let users = app.read_collection("users.json");
    assert_eq!(users.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_missing_collection_files_are_recreated() {
    let app = TestApp::new().await;
    let token = admin_token(&app.server).await;

    std::fs::remove_file(app.dir.path().join("players_data.json")).unwrap();

    let response = app
        .server
        .get("/api/players")
        .add_header(AUTHORIZATION, bearer(&token))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<Value>(), json!([]));
    assert_eq!(app.read_collection("players_data.json"), json!([]));
}

#[tokio::test]
async fn test_unknown_route_is_json_404() {
    let app = TestApp::new().await;
    let response = app.server.get("/api/nothing-here").await;
    assert_error!(response, StatusCode::NOT_FOUND, "Route not found.");
}
