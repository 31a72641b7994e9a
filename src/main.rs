//! # Station Rental Server
//!
//! Application entry point that initializes:
//! - Configuration loading
//! - Tracing/logging subsystem
//! - Storage backend (PostgreSQL or in-memory)
//! - HTTP server

use anyhow::Result;
use tracing::info;

use station_rental::config::Settings;
use station_rental::startup::Application;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration from environment and config files
    let settings = Settings::load()?;

    // Initialize tracing subscriber for structured logging
    station_rental::telemetry::init_tracing(&settings.telemetry);

    info!(
        host = %settings.server.host,
        port = %settings.server.port,
        environment = %settings.environment,
        backend = ?settings.storage.backend,
        "Configuration loaded"
    );

    // Build and run the application
    let application = Application::build(settings).await?;

    info!("Server ready to accept connections");
    application.run_until_stopped().await?;

    Ok(())
}
