//! Gallery API integration tests
//!
//! Upload, listing, caption changes, deletion and static serving of
//! gallery images.

use axum::http::{header::AUTHORIZATION, StatusCode};
use axum_test::multipart::{MultipartForm, Part};
use axum_test::TestServer;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use crate::common::{admin_token, bearer, user_token, TestApp};
use crate::{assert_contains, assert_error};

const PNG_BYTES: &[u8] = b"\x89PNG\r\n\x1a\nnot really a png";

fn image_form(file_name: &str, caption: Option<&str>) -> MultipartForm {
    let form = MultipartForm::new().add_part(
        "galleryImage",
        Part::bytes(PNG_BYTES.to_vec())
            .file_name(file_name)
            .mime_type("image/png"),
    );
    match caption {
        Some(caption) => form.add_text("caption", caption),
        None => form,
    }
}

async fn upload(server: &TestServer, token: &str, file_name: &str, caption: Option<&str>) -> Value {
    let response = server
        .post("/api/gallery/upload")
        .add_header(AUTHORIZATION, bearer(token))
        .multipart(image_form(file_name, caption))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    response.json()
}

#[tokio::test]
async fn test_upload_and_list() {
    let app = TestApp::new().await;
    let token = admin_token(&app.server).await;

    let body = upload(&app.server, &token, "match day.png", Some("Final whistle")).await;
    assert_eq!(body["message"], "File uploaded successfully");
    assert_eq!(body["caption"], "Final whistle");

    let filename = body["filename"].as_str().unwrap().to_string();
    assert!(filename.starts_with("gallery-"));
    assert!(filename.ends_with("-match_day.png"));
    assert_eq!(body["filePath"], format!("/uploads/gallery/{}", filename));
    assert!(app.upload_path("gallery", &filename).exists());

    let response = app
        .server
        .get("/api/gallery/images")
        .add_header(AUTHORIZATION, bearer(&token))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(
        response.json::<Value>(),
        json!([{
            "src": format!("/uploads/gallery/{}", filename),
            "filename": filename,
            "caption": "Final whistle",
        }])
    );

    let served = app.server.get(&format!("/uploads/gallery/{}", filename)).await;
    assert_eq!(served.status_code(), StatusCode::OK);
    assert_eq!(served.as_bytes().to_vec(), PNG_BYTES.to_vec());
}

#[tokio::test]
async fn test_listing_filters_extensions_and_defaults_caption() {
    let app = TestApp::new().await;
    let token = admin_token(&app.server).await;

    std::fs::write(app.upload_path("gallery", "b-orphan.JPG"), b"jpg").unwrap();
    std::fs::write(app.upload_path("gallery", "a-notes.txt"), b"text").unwrap();

    let response = app
        .server
        .get("/api/gallery/images")
        .add_header(AUTHORIZATION, bearer(&token))
        .await;
    let images: Value = response.json();
    assert_eq!(
        images,
        json!([{ "src": "/uploads/gallery/b-orphan.JPG", "filename": "b-orphan.JPG", "caption": "" }])
    );
}

#[tokio::test]
async fn test_upload_requires_file_and_admin() {
    let app = TestApp::new().await;
    let admin = admin_token(&app.server).await;
    let member = user_token(&app.server, "fan").await;

    let response = app
        .server
        .post("/api/gallery/upload")
        .add_header(AUTHORIZATION, bearer(&admin))
        .multipart(MultipartForm::new().add_text("caption", "no file"))
        .await;
    assert_error!(response, StatusCode::BAD_REQUEST, "No file uploaded.");

    let response = app
        .server
        .post("/api/gallery/upload")
        .add_header(AUTHORIZATION, bearer(&member))
        .multipart(image_form("x.png", None))
        .await;
    assert_error!(
        response,
        StatusCode::FORBIDDEN,
        "Access denied. Admin privileges required."
    );

    assert_eq!(app.media_file_count("gallery"), 0);
    assert_eq!(app.read_collection("gallery_metadata.json"), json!([]));
}

#[tokio::test]
async fn test_upload_rejects_unexpected_file_field() {
    let app = TestApp::new().await;
    let token = admin_token(&app.server).await;

    let form = MultipartForm::new().add_part(
        "teamImage",
        Part::bytes(PNG_BYTES.to_vec()).file_name("x.png"),
    );
    let response = app
        .server
        .post("/api/gallery/upload")
        .add_header(AUTHORIZATION, bearer(&token))
        .multipart(form)
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(app.media_file_count("gallery"), 0);
}

#[tokio::test]
async fn test_metadata_failure_discards_upload() {
    let app = TestApp::new().await;
    let token = admin_token(&app.server).await;
    std::fs::write(app.dir.path().join("gallery_metadata.json"), "not json").unwrap();

    let response = app
        .server
        .post("/api/gallery/upload")
        .add_header(AUTHORIZATION, bearer(&token))
        .multipart(image_form("a.png", Some("lost")))
        .await;

    assert_error!(
        response,
        StatusCode::INTERNAL_SERVER_ERROR,
        "File uploaded, but failed to save metadata."
    );
    assert_eq!(app.media_file_count("gallery"), 0);
}

#[tokio::test]
async fn test_update_caption() {
    let app = TestApp::new().await;
    let token = admin_token(&app.server).await;
    let body = upload(&app.server, &token, "a.png", None).await;
    let filename = body["filename"].as_str().unwrap().to_string();
    assert_eq!(body["caption"], "");

    let response = app
        .server
        .put(&format!("/api/gallery/image/{}/caption", filename))
        .add_header(AUTHORIZATION, bearer(&token))
        .json(&json!({ "caption": "Champions" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(
        response.json::<Value>(),
        json!({ "message": "Caption updated successfully", "filename": filename, "caption": "Champions" })
    );
    assert_eq!(
        app.read_collection("gallery_metadata.json"),
        json!([{ "filename": filename, "caption": "Champions" }])
    );

    let response = app
        .server
        .put(&format!("/api/gallery/image/{}/caption", filename))
        .add_header(AUTHORIZATION, bearer(&token))
        .json(&json!({ "caption": 42 }))
        .await;
    assert_error!(response, StatusCode::BAD_REQUEST, "Caption must be a string.");

    let response = app
        .server
        .put("/api/gallery/image/unknown.png/caption")
        .add_header(AUTHORIZATION, bearer(&token))
        .json(&json!({ "caption": "x" }))
        .await;
    assert_error!(response, StatusCode::NOT_FOUND, "Image metadata not found.");
}

#[tokio::test]
async fn test_delete_image() {
    let app = TestApp::new().await;
    let token = admin_token(&app.server).await;
    let body = upload(&app.server, &token, "a.png", Some("first")).await;
    let filename = body["filename"].as_str().unwrap().to_string();

    let response = app
        .server
        .delete(&format!("/api/gallery/image/{}", filename))
        .add_header(AUTHORIZATION, bearer(&token))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["message"], "Image and metadata deleted successfully");
    assert!(!app.upload_path("gallery", &filename).exists());
    assert_eq!(app.read_collection("gallery_metadata.json"), json!([]));

    let response = app
        .server
        .delete(&format!("/api/gallery/image/{}", filename))
        .add_header(AUTHORIZATION, bearer(&token))
        .await;
    assert_error!(
        response,
        StatusCode::NOT_FOUND,
        "Image file not found, and no metadata found for it."
    );
}

#[tokio::test]
async fn test_delete_missing_file_removes_metadata() {
    let app = TestApp::new().await;
    let token = admin_token(&app.server).await;
    let body = upload(&app.server, &token, "a.png", Some("gone")).await;
    let filename = body["filename"].as_str().unwrap().to_string();

    std::fs::remove_file(app.upload_path("gallery", &filename)).unwrap();

    let response = app
        .server
        .delete(&format!("/api/gallery/image/{}", filename))
        .add_header(AUTHORIZATION, bearer(&token))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_contains!(body["message"].as_str().unwrap(), "metadata was removed");
    assert_eq!(app.read_collection("gallery_metadata.json"), json!([]));
}

#[tokio::test]
async fn test_path_traversal_is_rejected() {
    let app = TestApp::new().await;
    let token = admin_token(&app.server).await;

    let response = app
        .server
        .delete("/api/gallery/image/..%2Fusers.json")
        .add_header(AUTHORIZATION, bearer(&token))
        .await;
    assert_error!(response, StatusCode::BAD_REQUEST, "Invalid filename.");
    assert!(app.dir.path().join("users.json").exists());
}
