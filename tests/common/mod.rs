//! Common Test Utilities
//!
//! Shared helpers, fixtures, and test infrastructure.

use axum_test::TestServer;
use fake::faker::internet::en::SafeEmail;
use fake::faker::name::en::Name;
use fake::Fake;
use serde_json::{json, Value};
use uuid::Uuid;

use station_rental::config::{
    CorsSettings, DatabaseSettings, DispatchSettings, JwtSettings, ServerSettings, Settings,
    StorageBackend, StorageSettings, TelemetrySettings,
};
use station_rental::startup::{build_router, AppState};

pub const TEST_PASSWORD: &str = "TestPassword123!";

/// Settings for the in-memory backend
pub fn test_settings() -> Settings {
    Settings {
        server: ServerSettings {
            host: "127.0.0.1".into(),
            port: 0,
        },
        storage: StorageSettings {
            backend: StorageBackend::Memory,
        },
        database: DatabaseSettings {
            url: String::new(),
            max_connections: 1,
            min_connections: 0,
            acquire_timeout: 1,
            run_migrations: false,
        },
        jwt: JwtSettings {
            secret: "integration-test-secret-0123456789abcdef".into(),
            access_token_expiry_minutes: 15,
            refresh_token_expiry_days: 7,
        },
        dispatch: DispatchSettings { timeout_secs: 60 },
        cors: CorsSettings {
            allowed_origins: vec![],
        },
        telemetry: TelemetrySettings { json: false },
        environment: "test".into(),
    }
}

/// Test application over a fresh in-memory store
pub struct TestApp {
    pub server: TestServer,
}

/// A registered renter and its access token
pub struct TestRenter {
    pub id: Uuid,
    pub email: String,
    pub token: String,
}

impl TestApp {
    pub fn new() -> Self {
        let state = AppState::in_memory(test_settings()).expect("state builds");
        let server = TestServer::new(build_router(state)).expect("test server starts");
        Self { server }
    }

    /// Register a renter with generated details and return its token
    pub async fn register_renter(&self) -> TestRenter {
        let email: String = SafeEmail().fake();
        let full_name: String = Name().fake();

        let response = self
            .server
            .post("/api/v1/auth/register")
            .json(&json!({
                "email": email,
                "password": TEST_PASSWORD,
                "fullName": full_name,
            }))
            .await;
        response.assert_status(axum::http::StatusCode::CREATED);

        let token = response.json::<Value>()["data"]["accessToken"]
            .as_str()
            .expect("access token")
            .to_string();

        let me = self
            .server
            .get("/api/v1/renters/me")
            .authorization_bearer(&token)
            .await
            .json::<Value>();
        let id = me["data"]["id"]
            .as_str()
            .and_then(|s| s.parse().ok())
            .expect("renter id");

        TestRenter {
            id,
            email: email.to_lowercase(),
            token,
        }
    }

    /// Create a station and return its ID
    pub async fn create_station(&self, token: &str, name: &str, address: &str) -> Uuid {
        let response = self
            .server
            .post("/api/v1/stations")
            .authorization_bearer(token)
            .json(&json!({
                "name": name,
                "address": address,
                "latitude": 52.37,
                "longitude": 4.89,
                "capacity": 10,
            }))
            .await;
        response.assert_status(axum::http::StatusCode::CREATED);

        response.json::<Value>()["data"]["id"]
            .as_str()
            .and_then(|s| s.parse().ok())
            .expect("station id")
    }

    /// Reserve a blob and return its ID
    pub async fn upload_file(&self, token: &str, file_name: &str) -> Uuid {
        let response = self
            .server
            .post("/api/v1/files")
            .authorization_bearer(token)
            .json(&json!({
                "fileName": file_name,
                "containerName": "kyc-documents",
            }))
            .await;
        response.assert_status(axum::http::StatusCode::CREATED);

        response.json::<Value>()["data"]
            .as_str()
            .and_then(|s| s.parse().ok())
            .expect("blob id")
    }
}

/// Assert the failure envelope shape
pub fn assert_failure_envelope(body: &Value) {
    assert_eq!(body["isSuccess"], false, "body: {body}");
    assert!(body["data"].is_null(), "body: {body}");
    assert!(body["message"].is_string(), "body: {body}");
}
