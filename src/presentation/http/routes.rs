//! Route Configuration
//!
//! Configures all HTTP routes for the API.

use axum::{
    middleware,
    response::IntoResponse,
    routing::{get, post},
    Router,
};

use super::handlers;
use crate::infrastructure::metrics;
use crate::presentation::middleware::auth_middleware;
use crate::startup::AppState;

/// Create the main API router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/api/v1", api_routes(state.clone()))
        // Health check endpoints
        .route("/health", get(handlers::health::health_check))
        .route("/health/live", get(handlers::health::liveness))
        .route("/health/ready", get(handlers::health::readiness))
        // Prometheus metrics endpoint
        .route("/metrics", get(metrics_handler))
        .with_state(state)
}

/// Prometheus metrics endpoint handler
async fn metrics_handler() -> impl IntoResponse {
    (
        [(
            axum::http::header::CONTENT_TYPE,
            "text/plain; version=0.0.4; charset=utf-8",
        )],
        metrics::gather_metrics(),
    )
}

/// API v1 routes
fn api_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .merge(public_routes())
        .merge(protected_routes(state))
}

/// Routes reachable without a token
fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(handlers::auth::register))
        .route("/auth/login", post(handlers::auth::login))
        .route("/stations", get(handlers::station::list_stations))
        .route("/stations/{id}", get(handlers::station::get_station))
}

/// Routes behind bearer authentication.
///
/// Any valid token reaches every route here; there are no roles.
fn protected_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/stations", post(handlers::station::create_station))
        .route(
            "/stations/{id}",
            axum::routing::patch(handlers::station::update_station)
                .delete(handlers::station::delete_station),
        )
        .route(
            "/renters/me",
            get(handlers::renter::get_current_renter).patch(handlers::renter::update_current_renter),
        )
        .route("/renters/me/kyc", post(handlers::renter::submit_kyc_document))
        .route("/renters/{id}/kyc", get(handlers::renter::get_kyc_history))
        .route(
            "/renters/{id}/kyc/verify-in-person",
            post(handlers::renter::verify_in_person),
        )
        .route("/renters/{id}/charges", post(handlers::renter::charge_renter))
        .route("/files", post(handlers::file::upload_file))
        .route("/files/{id}", get(handlers::file::get_file))
        .route_layer(middleware::from_fn_with_state(state, auth_middleware))
}
