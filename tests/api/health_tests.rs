//! Health Check and Metrics API Tests

use pretty_assertions::assert_eq;
use serde_json::Value;

use crate::common::TestApp;

#[tokio::test]
async fn test_health_check_returns_ok() {
    let app = TestApp::new();

    let response = app.server.get("/health").await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["status"], "healthy");
}

#[tokio::test]
async fn test_liveness() {
    let app = TestApp::new();

    let response = app.server.get("/health/live").await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["status"], "alive");
}

#[tokio::test]
async fn test_readiness_reports_handlers() {
    let app = TestApp::new();

    let response = app.server.get("/health/ready").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["checks"]["dispatch"]["registeredHandlers"], 15);
    assert_eq!(body["checks"]["storage"]["message"], "in-memory storage");
}

#[tokio::test]
async fn test_metrics_after_dispatch() {
    let app = TestApp::new();
    app.server.get("/api/v1/stations").await.assert_status_ok();

    let response = app.server.get("/metrics").await;

    response.assert_status_ok();
    let text = response.text();
    assert!(text.contains("station_rental_dispatch_requests_total"));
    assert!(text.contains("request=\"GetStationsQuery\""));
}
