//! File API Tests

use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::common::{assert_failure_envelope, TestApp};

#[tokio::test]
async fn test_upload_then_fetch_metadata() {
    let app = TestApp::new();
    let renter = app.register_renter().await;
    let blob_id = app.upload_file(&renter.token, "my passport.jpg").await;

    let response = app
        .server
        .get(&format!("/api/v1/files/{blob_id}"))
        .authorization_bearer(&renter.token)
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["data"]["id"], blob_id.to_string());
    assert_eq!(body["data"]["fileName"], "my passport.jpg");
    assert_eq!(body["data"]["containerName"], "kyc-documents");
    assert_eq!(
        body["data"]["blobName"],
        format!("{blob_id}/my_passport.jpg")
    );
}

#[tokio::test]
async fn test_invalid_container_name() {
    let app = TestApp::new();
    let renter = app.register_renter().await;

    let response = app
        .server
        .post("/api/v1/files")
        .authorization_bearer(&renter.token)
        .json(&json!({ "fileName": "a.txt", "containerName": "Bad_Container" }))
        .await;

    response.assert_status_bad_request();
    let body: Value = response.json();
    assert_failure_envelope(&body);
    assert_eq!(body["errors"][0]["field"], "container_name");
}

#[tokio::test]
async fn test_unknown_file_is_not_found() {
    let app = TestApp::new();
    let renter = app.register_renter().await;

    let response = app
        .server
        .get(&format!("/api/v1/files/{}", Uuid::new_v4()))
        .authorization_bearer(&renter.token)
        .await;

    response.assert_status_not_found();
}
