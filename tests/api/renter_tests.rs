//! Renter and KYC API Tests

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::common::{assert_failure_envelope, TestApp};

#[tokio::test]
async fn test_get_own_profile() {
    let app = TestApp::new();
    let renter = app.register_renter().await;

    let response = app
        .server
        .get("/api/v1/renters/me")
        .authorization_bearer(&renter.token)
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["data"]["id"], renter.id.to_string());
    assert_eq!(body["data"]["kycStatus"], "pending");
    assert!(body["data"].get("passwordHash").is_none());
}

#[tokio::test]
async fn test_update_own_profile() {
    let app = TestApp::new();
    let renter = app.register_renter().await;

    let response = app
        .server
        .patch("/api/v1/renters/me")
        .authorization_bearer(&renter.token)
        .json(&json!({ "driverLicenseNumber": "NL-1234567" }))
        .await;

    response.assert_status_ok();
    assert_eq!(
        response.json::<Value>()["data"]["driverLicenseNumber"],
        "NL-1234567"
    );
}

#[tokio::test]
async fn test_submit_kyc_document() {
    let app = TestApp::new();
    let renter = app.register_renter().await;
    let blob_id = app.upload_file(&renter.token, "passport.jpg").await;

    let response = app
        .server
        .post("/api/v1/renters/me/kyc")
        .authorization_bearer(&renter.token)
        .json(&json!({ "blobId": blob_id }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["data"]["kycStatus"], "submitted");
    assert_eq!(body["data"]["kycDocumentBlobId"], blob_id.to_string());
}

#[tokio::test]
async fn test_submit_unknown_document() {
    let app = TestApp::new();
    let renter = app.register_renter().await;

    let response = app
        .server
        .post("/api/v1/renters/me/kyc")
        .authorization_bearer(&renter.token)
        .json(&json!({ "blobId": Uuid::new_v4() }))
        .await;

    response.assert_status_not_found();
}

#[tokio::test]
async fn test_verify_in_person_records_audit() {
    let app = TestApp::new();
    let renter = app.register_renter().await;
    let clerk = app.register_renter().await;

    let response = app
        .server
        .post(&format!("/api/v1/renters/{}/kyc/verify-in-person", renter.id))
        .authorization_bearer(&clerk.token)
        .json(&json!({ "isVerified": true, "notes": "Passport checked at desk" }))
        .await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["data"], true);

    let profile = app
        .server
        .get("/api/v1/renters/me")
        .authorization_bearer(&renter.token)
        .await
        .json::<Value>();
    assert_eq!(profile["data"]["kycStatus"], "verified");

    let history = app
        .server
        .get(&format!("/api/v1/renters/{}/kyc", renter.id))
        .authorization_bearer(&clerk.token)
        .await
        .json::<Value>();
    let entries = history["data"].as_array().expect("history array");
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["verifiedBy"], clerk.id.to_string());
    assert_eq!(entries[0]["method"], "in_person");
    assert_eq!(entries[0]["notes"], "Passport checked at desk");
}

#[tokio::test]
async fn test_verified_renter_cannot_resubmit() {
    let app = TestApp::new();
    let renter = app.register_renter().await;
    let clerk = app.register_renter().await;

    app.server
        .post(&format!("/api/v1/renters/{}/kyc/verify-in-person", renter.id))
        .authorization_bearer(&clerk.token)
        .json(&json!({ "isVerified": true }))
        .await
        .assert_status_ok();

    let blob_id = app.upload_file(&renter.token, "license.png").await;
    let response = app
        .server
        .post("/api/v1/renters/me/kyc")
        .authorization_bearer(&renter.token)
        .json(&json!({ "blobId": blob_id }))
        .await;

    response.assert_status(StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_self_verification_rejected() {
    let app = TestApp::new();
    let renter = app.register_renter().await;

    let response = app
        .server
        .post(&format!("/api/v1/renters/{}/kyc/verify-in-person", renter.id))
        .authorization_bearer(&renter.token)
        .json(&json!({ "isVerified": true }))
        .await;

    response.assert_status_bad_request();
    assert_failure_envelope(&response.json());
}

#[tokio::test]
async fn test_verify_unknown_renter() {
    let app = TestApp::new();
    let clerk = app.register_renter().await;

    let response = app
        .server
        .post(&format!(
            "/api/v1/renters/{}/kyc/verify-in-person",
            Uuid::new_v4()
        ))
        .authorization_bearer(&clerk.token)
        .json(&json!({ "isVerified": false }))
        .await;

    response.assert_status_not_found();
}

#[tokio::test]
async fn test_charge_without_payment_provider() {
    let app = TestApp::new();
    let renter = app.register_renter().await;

    let response = app
        .server
        .post(&format!("/api/v1/renters/{}/charges", renter.id))
        .authorization_bearer(&renter.token)
        .json(&json!({ "amountCents": 1999, "currency": "EUR" }))
        .await;

    response.assert_status(StatusCode::NOT_IMPLEMENTED);
    assert_failure_envelope(&response.json());
}

#[tokio::test]
async fn test_charge_rejects_non_positive_amount() {
    let app = TestApp::new();
    let renter = app.register_renter().await;

    let response = app
        .server
        .post(&format!("/api/v1/renters/{}/charges", renter.id))
        .authorization_bearer(&renter.token)
        .json(&json!({ "amountCents": 0, "currency": "EUR" }))
        .await;

    response.assert_status_bad_request();
    assert_eq!(
        response.json::<Value>()["errors"][0]["field"],
        "amount_cents"
    );
}
