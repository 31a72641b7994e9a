//! Station API Tests

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::common::{assert_failure_envelope, TestApp};

#[tokio::test]
async fn test_create_and_get_station() {
    let app = TestApp::new();
    let renter = app.register_renter().await;
    let id = app
        .create_station(&renter.token, "Central", "1 Main St")
        .await;

    let response = app.server.get(&format!("/api/v1/stations/{id}")).await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["isSuccess"], true);
    assert_eq!(body["data"]["name"], "Central");
    assert_eq!(body["data"]["isActive"], true);
}

#[tokio::test]
async fn test_create_station_requires_auth() {
    let app = TestApp::new();

    let response = app
        .server
        .post("/api/v1/stations")
        .json(&json!({
            "name": "Central",
            "address": "1 Main St",
            "latitude": 0.0,
            "longitude": 0.0,
            "capacity": 1,
        }))
        .await;

    response.assert_status_unauthorized();
}

#[tokio::test]
async fn test_create_station_rejects_bad_coordinates() {
    let app = TestApp::new();
    let renter = app.register_renter().await;

    let response = app
        .server
        .post("/api/v1/stations")
        .authorization_bearer(&renter.token)
        .json(&json!({
            "name": "Nowhere",
            "address": "Off the map",
            "latitude": 123.0,
            "longitude": 0.0,
            "capacity": 5,
        }))
        .await;

    response.assert_status_bad_request();
    let body: Value = response.json();
    assert_failure_envelope(&body);
    assert_eq!(body["errors"][0]["field"], "latitude");
}

#[tokio::test]
async fn test_create_station_rejects_blank_name() {
    let app = TestApp::new();
    let renter = app.register_renter().await;

    let response = app
        .server
        .post("/api/v1/stations")
        .authorization_bearer(&renter.token)
        .json(&json!({
            "name": "   ",
            "address": "1 Main St",
            "latitude": 0.0,
            "longitude": 0.0,
            "capacity": 5,
        }))
        .await;

    response.assert_status_bad_request();
    let body: Value = response.json();
    assert_failure_envelope(&body);
    assert_eq!(body["errors"][0]["field"], "name");
}

#[tokio::test]
async fn test_duplicate_station_name_conflicts() {
    let app = TestApp::new();
    let renter = app.register_renter().await;
    app.create_station(&renter.token, "Central", "1 Main St")
        .await;

    let response = app
        .server
        .post("/api/v1/stations")
        .authorization_bearer(&renter.token)
        .json(&json!({
            "name": "Central",
            "address": "2 Side St",
            "latitude": 1.0,
            "longitude": 1.0,
            "capacity": 3,
        }))
        .await;

    response.assert_status(StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_list_stations_filters_and_pages() {
    let app = TestApp::new();
    let renter = app.register_renter().await;
    for (name, address) in [
        ("Harbor", "Quay 1"),
        ("Airport North", "Terminal 2"),
        ("Airport South", "Terminal 3"),
        ("Central", "Main St"),
    ] {
        app.create_station(&renter.token, name, address).await;
    }

    let response = app
        .server
        .get("/api/v1/stations")
        .add_query_param("name", "airport")
        .add_query_param("pageSize", 1)
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["data"]["totalCount"], 2);
    assert_eq!(body["data"]["totalPages"], 2);
    assert_eq!(body["data"]["items"][0]["name"], "Airport North");

    let second = app
        .server
        .get("/api/v1/stations")
        .add_query_param("name", "airport")
        .add_query_param("pageSize", 1)
        .add_query_param("page", 2)
        .await
        .json::<Value>();
    assert_eq!(second["data"]["items"][0]["name"], "Airport South");
}

#[tokio::test]
async fn test_list_stations_is_repeatable() {
    let app = TestApp::new();
    let renter = app.register_renter().await;
    for i in 0..5 {
        app.create_station(&renter.token, &format!("Depot {i}"), "Harbor")
            .await;
    }

    let first = app.server.get("/api/v1/stations").await.json::<Value>();
    let second = app.server.get("/api/v1/stations").await.json::<Value>();
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_list_stations_rejects_oversized_page() {
    let app = TestApp::new();

    let response = app
        .server
        .get("/api/v1/stations")
        .add_query_param("pageSize", 500)
        .await;

    response.assert_status_bad_request();
    assert_eq!(response.json::<Value>()["errors"][0]["field"], "page_size");
}

#[tokio::test]
async fn test_update_station() {
    let app = TestApp::new();
    let renter = app.register_renter().await;
    let id = app
        .create_station(&renter.token, "Central", "1 Main St")
        .await;

    let response = app
        .server
        .patch(&format!("/api/v1/stations/{id}"))
        .authorization_bearer(&renter.token)
        .json(&json!({ "capacity": 25, "isActive": false }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["data"]["capacity"], 25);
    assert_eq!(body["data"]["isActive"], false);
    assert_eq!(body["data"]["address"], "1 Main St");
}

#[tokio::test]
async fn test_delete_station() {
    let app = TestApp::new();
    let renter = app.register_renter().await;
    let id = app
        .create_station(&renter.token, "Central", "1 Main St")
        .await;

    let response = app
        .server
        .delete(&format!("/api/v1/stations/{id}"))
        .authorization_bearer(&renter.token)
        .await;
    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["data"], true);

    app.server
        .get(&format!("/api/v1/stations/{id}"))
        .await
        .assert_status_not_found();

    app.server
        .delete(&format!("/api/v1/stations/{id}"))
        .authorization_bearer(&renter.token)
        .await
        .assert_status_not_found();
}

#[tokio::test]
async fn test_unknown_station_is_not_found() {
    let app = TestApp::new();

    let response = app
        .server
        .get(&format!("/api/v1/stations/{}", Uuid::new_v4()))
        .await;

    response.assert_status_not_found();
    assert_failure_envelope(&response.json());
}

#[tokio::test]
async fn test_malformed_station_id() {
    let app = TestApp::new();

    let response = app.server.get("/api/v1/stations/not-a-uuid").await;

    response.assert_status_bad_request();
    assert_failure_envelope(&response.json());
}
