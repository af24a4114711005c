//! Players API integration tests

use axum::http::{header::AUTHORIZATION, StatusCode};
use axum_test::multipart::{MultipartForm, Part};
use pretty_assertions::assert_eq;
use serde_json::Value;

use crate::assert_error;
use crate::common::{admin_token, bearer, TestApp};

fn player_image(file_name: &str) -> Part {
    Part::bytes(b"player photo".to_vec())
        .file_name(file_name)
        .mime_type("image/png")
}

fn player_form(name: &str, position: &str) -> MultipartForm {
    MultipartForm::new()
        .add_text("name", name)
        .add_text("position", position)
}

async fn create_player(app: &TestApp, token: &str, form: MultipartForm) -> Value {
    let response = app
        .server
        .post("/api/players")
        .add_header(AUTHORIZATION, bearer(token))
        .multipart(form)
        .await;
    assert_eq!(response.status_code(), StatusCode::CREATED);
    let body: Value = response.json();
    assert_eq!(body["message"], "Player added successfully");
    body["player"].clone()
}

#[tokio::test]
async fn test_create_and_get_player() {
    let app = TestApp::new().await;
    let token = admin_token(&app.server).await;

    let form = player_form("Ali Rahimi", "Goalkeeper")
        .add_text("jerseyNumber", " 12abc")
        .add_text("dateOfBirth", "2001-04-09")
        .add_text("nationality", "IR")
        .add_text("bio", "Safe hands")
        .add_part("playerImage", player_image("ali.png"));
    let player = create_player(&app, &token, form).await;

    assert_eq!(player["name"], "Ali Rahimi");
    assert_eq!(player["position"], "Goalkeeper");
    assert_eq!(player["jerseyNumber"], 12);
    assert_eq!(player["dateOfBirth"], "2001-04-09");
    assert_eq!(player["nationality"], "IR");
    assert_eq!(player["order"], 0);
    assert_eq!(player["createdAt"], player["updatedAt"]);
    let filename = player["imageFilename"].as_str().unwrap();
    assert!(filename.starts_with("player-"));
    assert_eq!(player["imageUrl"], format!("/uploads/player_images/{}", filename));

    let id = player["id"].as_str().unwrap();
    let response = app
        .server
        .get(&format!("/api/players/{}", id))
        .add_header(AUTHORIZATION, bearer(&token))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<Value>(), player);
}

#[tokio::test]
async fn test_optional_fields_default() {
    let app = TestApp::new().await;
    let token = admin_token(&app.server).await;

    let player = create_player(
        &app,
        &token,
        player_form("Omid", "Defender").add_text("jerseyNumber", "ten"),
    )
    .await;

    assert_eq!(player["jerseyNumber"], Value::Null);
    assert_eq!(player["dateOfBirth"], Value::Null);
    assert_eq!(player["nationality"], "");
    assert_eq!(player["imageFilename"], Value::Null);
    assert_eq!(player["imageUrl"], Value::Null);
}

#[tokio::test]
async fn test_list_players_in_insertion_order() {
    let app = TestApp::new().await;
    let token = admin_token(&app.server).await;

    create_player(&app, &token, player_form("First", "Forward")).await;
    create_player(&app, &token, player_form("Second", "Midfielder")).await;

    let response = app
        .server
        .get("/api/players")
        .add_header(AUTHORIZATION, bearer(&token))
        .await;
    let players: Value = response.json();
    let names: Vec<&str> = players
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["First", "Second"]);
}

#[tokio::test]
async fn test_missing_position_rejected() {
    let app = TestApp::new().await;
    let token = admin_token(&app.server).await;

    let response = app
        .server
        .post("/api/players")
        .add_header(AUTHORIZATION, bearer(&token))
        .multipart(
            MultipartForm::new()
                .add_text("name", "Ali")
                .add_part("playerImage", player_image("ali.png")),
        )
        .await;

    assert_error!(
        response,
        StatusCode::BAD_REQUEST,
        "Name and position are required."
    );
    assert_eq!(app.media_file_count("player_images"), 0);
}

#[tokio::test]
async fn test_remove_current_image() {
    let app = TestApp::new().await;
    let token = admin_token(&app.server).await;
    let player = create_player(
        &app,
        &token,
        player_form("Ali", "Goalkeeper")
            .add_text("jerseyNumber", "1")
            .add_part("playerImage", player_image("ali.png")),
    )
    .await;
    let id = player["id"].as_str().unwrap();
    let filename = player["imageFilename"].as_str().unwrap().to_string();

    let response = app
        .server
        .put(&format!("/api/players/{}", id))
        .add_header(AUTHORIZATION, bearer(&token))
        .multipart(
            MultipartForm::new()
                .add_text("removeCurrentImage", "true")
                .add_text("jerseyNumber", "")
                .add_text("nationality", ""),
        )
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["message"], "Player updated successfully");

    let updated = &body["player"];
    assert_eq!(updated["imageFilename"], Value::Null);
    assert_eq!(updated["imageUrl"], Value::Null);
    assert_eq!(updated["jerseyNumber"], 1);
    assert_eq!(updated["name"], "Ali");
    assert_ne!(updated["updatedAt"], player["updatedAt"]);
    assert!(!app.upload_path("player_images", &filename).exists());
}

#[tokio::test]
async fn test_unknown_player() {
    let app = TestApp::new().await;
    let token = admin_token(&app.server).await;

    let response = app
        .server
        .get("/api/players/missing")
        .add_header(AUTHORIZATION, bearer(&token))
        .await;
    assert_error!(response, StatusCode::NOT_FOUND, "Player not found.");

    let response = app
        .server
        .delete("/api/players/missing")
        .add_header(AUTHORIZATION, bearer(&token))
        .await;
    assert_error!(response, StatusCode::NOT_FOUND, "Player not found.");
}
