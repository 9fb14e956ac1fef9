//! Route-level tests for the request taxonomy: authentication,
//! validation, and routing outcomes that resolve before any storage
//! access.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::json;
use tower::ServiceExt;

use crate::helpers::{self, TEST_ISSUER, identity_token, request, test_app};

#[tokio::test]
async fn test_health_check() {
    let app = test_app().await;

    let res = request(&app, "GET", "/health", None, None).await;

    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.body.get("status").unwrap().as_str().unwrap(), "ok");
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let app = test_app().await;

    let res = request(&app, "GET", "/api/nope", None, None).await;

    assert_eq!(res.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_get_directory_without_caller_is_unauthorized() {
    let app = test_app().await;
    let id = uuid::Uuid::new_v4();

    let res = request(&app, "GET", &format!("/api/directory/{id}"), None, None).await;

    assert_eq!(res.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_get_directory_with_malformed_id_is_bad_request() {
    let app = test_app().await;

    let res = request(&app, "GET", "/api/directory/not-a-uuid", None, Some("uid-1")).await;

    assert_eq!(res.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_root_dir_without_caller_is_unauthorized() {
    let app = test_app().await;

    let res = request(&app, "GET", "/api/root-dir", None, None).await;

    assert_eq!(res.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_most_accessed_without_caller_is_validation_error() {
    let app = test_app().await;

    let res = request(&app, "GET", "/api/getMostAccessedDirectory", None, None).await;

    assert_eq!(res.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_metadata_without_caller_is_validation_error() {
    let app = test_app().await;

    let res = request(&app, "GET", "/api/getMetadata", None, None).await;

    assert_eq!(res.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_login_missing_fields() {
    let app = test_app().await;

    let res = request(&app, "POST", "/api/identity/login", Some(json!({})), None).await;

    assert_eq!(res.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_login_invalid_token() {
    let app = test_app().await;

    let res = request(
        &app,
        "POST",
        "/api/identity/login",
        Some(json!({ "token": "not-a-jwt", "name": "Ada" })),
        None,
    )
    .await;

    assert_eq!(res.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_login_expired_token() {
    let app = test_app().await;
    let token = identity_token("uid-exp", TEST_ISSUER, -3600);

    let res = request(
        &app,
        "POST",
        "/api/identity/login",
        Some(json!({ "token": token, "name": "Ada" })),
        None,
    )
    .await;

    assert_eq!(res.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_login_wrong_issuer_token() {
    let app = test_app().await;
    let token = identity_token("uid-iss", "somebody-else", 3600);

    let res = request(
        &app,
        "POST",
        "/api/identity/login",
        Some(json!({ "token": token, "name": "Ada" })),
        None,
    )
    .await;

    assert_eq!(res.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_create_directory_without_caller_is_unauthorized() {
    let app = test_app().await;

    let res = request(
        &app,
        "POST",
        "/api/directory/create",
        Some(json!({ "parent_id": uuid::Uuid::new_v4(), "name": "docs" })),
        None,
    )
    .await;

    assert_eq!(res.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_create_directory_empty_name() {
    let app = test_app().await;

    let res = request(
        &app,
        "POST",
        "/api/directory/create",
        Some(json!({ "parent_id": uuid::Uuid::new_v4(), "name": "" })),
        Some("uid-1"),
    )
    .await;

    assert_eq!(res.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_directory_missing_parent() {
    let app = test_app().await;

    let res = request(
        &app,
        "POST",
        "/api/directory/create",
        Some(json!({ "name": "docs" })),
        Some("uid-1"),
    )
    .await;

    assert_eq!(res.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_under_root_missing_fields() {
    let app = test_app().await;

    let res = request(
        &app,
        "POST",
        "/api/root-dir/create",
        Some(json!({ "user_id": "uid-1" })),
        None,
    )
    .await;

    assert_eq!(res.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_update_access_missing_id() {
    let app = test_app().await;

    let res = request(
        &app,
        "POST",
        "/api/updateDirectoryAccess",
        Some(json!({})),
        None,
    )
    .await;

    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        res.body.get("message").unwrap().as_str().unwrap(),
        "Directory ID is required"
    );
}

#[tokio::test]
async fn test_process_directory_without_caller_is_unauthorized() {
    let app = test_app().await;
    let id = uuid::Uuid::new_v4();

    let res = request(
        &app,
        "POST",
        &format!("/api/process-directory/{id}"),
        None,
        None,
    )
    .await;

    assert_eq!(res.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_upload_with_no_parts_is_validation_error() {
    let app = test_app().await;

    let boundary = "nestbox-test-boundary";
    let body = format!("--{boundary}--\r\n");

    let req = Request::builder()
        .method("POST")
        .uri("/api/file/upload")
        .header(
            "content-type",
            format!("multipart/form-data; boundary={boundary}"),
        )
        .body(Body::from(body))
        .unwrap();

    let response = app.clone().oneshot(req).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_error_body_shape() {
    let app = test_app().await;

    let res = request(&app, "GET", "/api/root-dir", None, None).await;

    assert_eq!(res.status, StatusCode::UNAUTHORIZED);
    assert_eq!(
        res.body.get("error").unwrap().as_str().unwrap(),
        "UNAUTHORIZED"
    );
    assert!(res.body.get("message").is_some());
}

#[tokio::test]
async fn test_valid_token_reaches_database_layer() {
    // With no database behind the lazy pool, a well-formed login makes
    // it past verification and fails as a server error, never as 401.
    let app = test_app().await;
    let token = helpers::identity_token("uid-ok", TEST_ISSUER, 3600);

    let res = request(
        &app,
        "POST",
        "/api/identity/login",
        Some(json!({ "token": token, "name": "Ada" })),
        None,
    )
    .await;

    assert_eq!(res.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        res.body.get("message").unwrap().as_str().unwrap(),
        "Internal server error"
    );
}
