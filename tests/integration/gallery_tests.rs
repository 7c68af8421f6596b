//! Gallery upload and retrieval tests.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use serde_json::json;

use secure_gallery::db;
use secure_gallery::routes::{MAX_FILES, MAX_FILE_SIZE};

use super::test_utils::{Part, TestApp, TestResponse, FAILING_CONTENT_TYPE};

fn assert_json_content_type(response: &TestResponse) {
    let content_type = response.headers.get(header::CONTENT_TYPE).unwrap();
    assert!(content_type
        .to_str()
        .unwrap()
        .starts_with("application/json"));
}

// =============================================================================
// Retrieval
// =============================================================================

#[tokio::test]
async fn test_unknown_user_has_no_gallery() {
    let app = TestApp::new().await;

    for uri in [
        "/api/secure-gallery/nobody",
        "/api/secure-gallery?user=nobody",
    ] {
        let response = app.get(uri).await;
        assert_eq!(response.status, StatusCode::NOT_FOUND, "{uri}");
        assert_eq!(response.json(), json!({ "message": "Gallery not found" }));
    }
}

#[tokio::test]
async fn test_query_endpoint_requires_user() {
    let app = TestApp::new().await;

    let response = app.get("/api/secure-gallery").await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json(),
        json!({ "message": "Missing user query parameter" })
    );
}

#[tokio::test]
async fn test_duplicate_user_query_is_a_json_bad_request() {
    let app = TestApp::new().await;

    let response = app.get("/api/secure-gallery?user=a&user=b").await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_json_content_type(&response);
    assert!(response.json()["message"].is_string());
}

#[tokio::test]
async fn test_non_utf8_path_id_is_a_json_bad_request() {
    let app = TestApp::new().await;

    let fetched = app.get("/api/secure-gallery/%FF").await;
    assert_eq!(fetched.status, StatusCode::BAD_REQUEST);
    assert_json_content_type(&fetched);
    assert!(fetched.json()["message"].is_string());

    let uploaded = app.upload("%FF", &[Part::image("a.png", b"a")]).await;
    assert_eq!(uploaded.status, StatusCode::BAD_REQUEST);
    assert_json_content_type(&uploaded);
    assert!(uploaded.json()["message"].is_string());
    assert!(app.media.uploads().is_empty());
}

#[tokio::test]
async fn test_store_failure_on_fetch_is_generic() {
    let app = TestApp::new().await;
    app.pool.close().await;

    for uri in ["/api/secure-gallery/u1", "/api/secure-gallery?user=u1"] {
        let response = app.get(uri).await;
        assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR, "{uri}");
        assert_eq!(response.json(), json!({ "message": "Something went wrong" }));
    }
}

#[tokio::test]
async fn test_fetch_is_idempotent() {
    let app = TestApp::new().await;
    app.upload("u1", &[Part::image("a.png", b"aaa")]).await;

    let first = app.get("/api/secure-gallery/u1").await;
    let second = app.get("/api/secure-gallery/u1").await;

    assert_eq!(first.status, StatusCode::OK);
    assert_eq!(first.body, second.body);
}

#[tokio::test]
async fn test_galleries_are_listed_in_creation_order() {
    let app = TestApp::new().await;
    let first = app.upload("u1", &[Part::image("a.png", b"a")]).await.json();
    let second = app.upload("u1", &[Part::image("b.png", b"b")]).await.json();
    app.upload("someone-else", &[Part::image("c.png", b"c")]).await;

    let listed = app.get("/api/secure-gallery?user=u1").await.json();

    assert_eq!(listed, json!([first, second]));
}

// =============================================================================
// Upload
// =============================================================================

#[tokio::test]
async fn test_upload_creates_gallery_with_one_url_per_file() {
    let app = TestApp::new().await;

    let response = app
        .upload(
            "u1",
            &[Part::image("a.png", b"first"), Part::image("b.png", b"second")],
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    let gallery = response.json();
    assert!(gallery["_id"].is_string());
    assert_eq!(gallery["user"], json!(["u1"]));
    assert_eq!(
        gallery["imageUrl"],
        json!([
            "https://media.test/image-1.png",
            "https://media.test/image-2.png"
        ])
    );

    assert_eq!(
        app.media.uploads(),
        vec![
            "data:image/png;base64,Zmlyc3Q=".to_string(),
            "data:image/png;base64,c2Vjb25k".to_string(),
        ]
    );
}

#[tokio::test]
async fn test_upload_ignores_other_fields() {
    let app = TestApp::new().await;
    let stray_file = Part {
        name: "otherFile",
        file_name: Some("x.png"),
        content_type: "image/png",
        data: b"x".to_vec(),
    };

    let response = app
        .upload(
            "u1",
            &[
                Part::text("caption", "holiday"),
                stray_file,
                Part::image("a.png", b"a"),
            ],
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.json()["imageUrl"].as_array().unwrap().len(), 1);
    assert_eq!(app.media.uploads().len(), 1);
}

#[tokio::test]
async fn test_upload_without_files_is_rejected() {
    let app = TestApp::new().await;

    let response = app.upload("u1", &[Part::text("caption", "nothing")]).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.json(), json!({ "message": "No files uploaded" }));
}

#[tokio::test]
async fn test_upload_without_multipart_body_is_rejected() {
    let app = TestApp::new().await;
    let request = Request::builder()
        .method("POST")
        .uri("/api/secure-gallery/u1")
        .body(Body::empty())
        .unwrap();

    let response = app.send(request).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.json(), json!({ "message": "No files uploaded" }));
}

#[tokio::test]
async fn test_upload_with_too_many_files_is_rejected() {
    let app = TestApp::new().await;
    let parts: Vec<Part> = (0..=MAX_FILES).map(|_| Part::image("a.png", b"a")).collect();

    let response = app.upload("u1", &parts).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(app.media.uploads().is_empty());
    assert!(db::galleries::find_by_user(&app.pool, "u1")
        .await
        .unwrap()
        .is_empty());
}

#[tokio::test]
async fn test_upload_with_oversized_file_is_rejected() {
    let app = TestApp::new().await;
    let big = vec![0u8; MAX_FILE_SIZE + 1];

    let response = app.upload("u1", &[Part::image("big.png", &big)]).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(app.media.uploads().is_empty());
}

#[tokio::test]
async fn test_failed_upload_persists_nothing() {
    let app = TestApp::new().await;
    let bad = Part {
        name: "imageFile",
        file_name: Some("bad.png"),
        content_type: FAILING_CONTENT_TYPE,
        data: b"broken".to_vec(),
    };

    let response = app
        .upload("u1", &[Part::image("a.png", b"a"), bad])
        .await;

    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.json(), json!({ "message": "Something went wrong" }));
    assert!(db::galleries::find_by_user(&app.pool, "u1")
        .await
        .unwrap()
        .is_empty());
}

#[tokio::test]
async fn test_store_failure_on_upload_is_generic() {
    let app = TestApp::new().await;
    app.pool.close().await;

    let response = app.upload("u1", &[Part::image("a.png", b"a")]).await;

    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.json(), json!({ "message": "Something went wrong" }));
}

// =============================================================================
// End-to-end
// =============================================================================

#[tokio::test]
async fn test_sign_up_upload_and_fetch() {
    let app = TestApp::new().await;

    let signed_up = app.sign_up("abc").await;
    assert_eq!(signed_up.status, StatusCode::OK);
    let user = signed_up.json();
    assert_eq!(user["result"]["password"], "abc");
    let user_id = user["result"]["_id"].as_str().unwrap().to_string();

    let uploaded = app
        .upload(
            &user_id,
            &[Part::image("1.png", b"one"), Part::image("2.png", b"two")],
        )
        .await;
    assert_eq!(uploaded.status, StatusCode::CREATED);
    let gallery = uploaded.json();
    assert_eq!(gallery["imageUrl"].as_array().unwrap().len(), 2);

    let by_path = app.get(&format!("/api/secure-gallery/{user_id}")).await;
    assert_eq!(by_path.status, StatusCode::OK);
    let listed = by_path.json();
    assert_eq!(listed.as_array().unwrap().len(), 1);
    assert_eq!(listed[0]["imageUrl"], gallery["imageUrl"]);
    assert_eq!(listed[0]["user"], json!([user_id]));

    let by_query = app.get(&format!("/api/secure-gallery?user={user_id}")).await;
    assert_eq!(by_query.status, StatusCode::OK);
    assert_eq!(by_query.body, by_path.body);
}
