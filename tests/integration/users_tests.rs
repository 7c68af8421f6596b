//! Sign-up endpoint tests.

use axum::http::StatusCode;
use serde_json::json;

use secure_gallery::db;

use super::test_utils::{json_request, TestApp};

#[tokio::test]
async fn test_sign_up_returns_generated_id_and_password() {
    let app = TestApp::new().await;

    let response = app.sign_up("abc").await;

    assert_eq!(response.status, StatusCode::OK);
    let body = response.json();
    assert_eq!(body["result"]["password"], "abc");
    let id = body["result"]["_id"].as_str().unwrap();
    assert!(!id.is_empty());

    let stored = db::users::find_by_id(&app.pool, id).await.unwrap().unwrap();
    assert_eq!(stored.password, "abc");
}

#[tokio::test]
async fn test_sign_up_allows_duplicate_passwords() {
    let app = TestApp::new().await;

    let first = app.sign_up("same").await.json();
    let second = app.sign_up("same").await.json();

    assert_ne!(first["result"]["_id"], second["result"]["_id"]);
}

#[tokio::test]
async fn test_sign_up_accepts_empty_password() {
    let app = TestApp::new().await;

    let response = app.sign_up("").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json()["result"]["password"], "");
}

#[tokio::test]
async fn test_sign_up_without_password_is_rejected() {
    let app = TestApp::new().await;

    let response = app.send(json_request("/signUp", "{}".to_string())).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.json(), json!({ "error": "Password is required" }));
}

#[tokio::test]
async fn test_sign_up_with_malformed_json_is_rejected() {
    let app = TestApp::new().await;

    let response = app
        .send(json_request("/signUp", "{\"password\":".to_string()))
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(response.json()["error"].is_string());
}

#[tokio::test]
async fn test_sign_up_store_failure_is_generic() {
    let app = TestApp::new().await;
    app.pool.close().await;

    let response = app.sign_up("abc").await;

    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.json(), json!({ "error": "Something went wrong" }));
}
