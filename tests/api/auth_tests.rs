//! Authentication API Tests

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use crate::common::{assert_failure_envelope, TestApp, TEST_PASSWORD};

#[tokio::test]
async fn test_register_with_valid_data() {
    let app = TestApp::new();

    let response = app
        .server
        .post("/api/v1/auth/register")
        .json(&json!({
            "email": "Ada.Lovelace@Example.com",
            "password": TEST_PASSWORD,
            "fullName": "Ada Lovelace",
        }))
        .await;

    response.assert_status(StatusCode::CREATED);
    let body: Value = response.json();
    assert_eq!(body["isSuccess"], true);
    assert_eq!(body["data"]["tokenType"], "Bearer");
    assert!(body["data"]["accessToken"].is_string());
    assert!(body["data"]["refreshToken"].is_string());
}

#[tokio::test]
async fn test_register_with_invalid_email_fails() {
    let app = TestApp::new();

    let response = app
        .server
        .post("/api/v1/auth/register")
        .json(&json!({
            "email": "not-an-email",
            "password": TEST_PASSWORD,
            "fullName": "Ada",
        }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_failure_envelope(&body);
    assert_eq!(body["errors"][0]["field"], "email");
}

#[tokio::test]
async fn test_register_with_short_password_fails() {
    let app = TestApp::new();

    let response = app
        .server
        .post("/api/v1/auth/register")
        .json(&json!({
            "email": "ada@example.com",
            "password": "short",
            "fullName": "Ada",
        }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["errors"][0]["field"], "password");
}

#[tokio::test]
async fn test_register_duplicate_email_conflicts() {
    let app = TestApp::new();
    let renter = app.register_renter().await;

    let response = app
        .server
        .post("/api/v1/auth/register")
        .json(&json!({
            "email": renter.email.to_uppercase(),
            "password": TEST_PASSWORD,
            "fullName": "Someone Else",
        }))
        .await;

    response.assert_status(StatusCode::CONFLICT);
    assert_failure_envelope(&response.json());
}

#[tokio::test]
async fn test_malformed_json_gets_envelope() {
    let app = TestApp::new();

    let response = app
        .server
        .post("/api/v1/auth/register")
        .json(&json!({ "email": "ada@example.com" }))
        .await;

    assert!(response.status_code().is_client_error());
    assert_failure_envelope(&response.json());
}

#[tokio::test]
async fn test_login_with_valid_credentials() {
    let app = TestApp::new();
    let renter = app.register_renter().await;

    let response = app
        .server
        .post("/api/v1/auth/login")
        .json(&json!({ "email": renter.email, "password": TEST_PASSWORD }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["isSuccess"], true);
    assert!(body["data"]["accessToken"].is_string());
}

#[tokio::test]
async fn test_login_ignores_surrounding_whitespace_in_email() {
    let app = TestApp::new();
    let renter = app.register_renter().await;

    let response = app
        .server
        .post("/api/v1/auth/login")
        .json(&json!({ "email": format!("  {}  ", renter.email), "password": TEST_PASSWORD }))
        .await;

    response.assert_status_ok();
}

#[tokio::test]
async fn test_login_with_wrong_password_fails() {
    let app = TestApp::new();
    let renter = app.register_renter().await;

    let response = app
        .server
        .post("/api/v1/auth/login")
        .json(&json!({ "email": renter.email, "password": "WrongPassword123!" }))
        .await;

    response.assert_status_unauthorized();
    let body: Value = response.json();
    assert_failure_envelope(&body);
    assert_eq!(body["message"], "Invalid credentials");
}

#[tokio::test]
async fn test_login_with_unknown_email_matches_wrong_password() {
    let app = TestApp::new();

    let response = app
        .server
        .post("/api/v1/auth/login")
        .json(&json!({ "email": "ghost@example.com", "password": TEST_PASSWORD }))
        .await;

    response.assert_status_unauthorized();
    assert_eq!(response.json::<Value>()["message"], "Invalid credentials");
}

#[tokio::test]
async fn test_protected_route_without_token() {
    let app = TestApp::new();

    let response = app.server.get("/api/v1/renters/me").await;

    response.assert_status_unauthorized();
    assert_failure_envelope(&response.json());
}

#[tokio::test]
async fn test_protected_route_with_garbage_token() {
    let app = TestApp::new();

    let response = app
        .server
        .get("/api/v1/renters/me")
        .authorization_bearer("not.a.jwt")
        .await;

    response.assert_status_unauthorized();
    assert_eq!(response.json::<Value>()["message"], "Invalid token");
}
