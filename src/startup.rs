//! Application Startup
//!
//! Composition root: picks the storage backend, wires collaborators into the
//! handler registry and builds the router.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use axum::Router;
use sqlx::PgPool;
use tokio::net::TcpListener;
use tower::ServiceBuilder;

use crate::application::cqrs::Mediator;
use crate::application::registration::{build_registry, Collaborators};
use crate::application::services::{
    JwtTokenService, RepositoryBlobStore, UnconfiguredPaymentService,
};
use crate::config::{Settings, StorageBackend};
use crate::domain::TokenService;
use crate::infrastructure::database;
use crate::infrastructure::memory::{
    InMemoryBlobRepository, InMemoryKycVerificationRepository, InMemoryRenterRepository,
    InMemoryStationRepository,
};
use crate::infrastructure::repositories::{
    PgBlobRepository, PgKycVerificationRepository, PgRenterRepository, PgStationRepository,
};
use crate::presentation::http::{handlers, routes};
use crate::presentation::middleware::{cors, logging};
use crate::shared::error::AppError;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub mediator: Mediator,
    pub tokens: Arc<dyn TokenService>,
    pub settings: Arc<Settings>,
    /// Present only with the PostgreSQL backend
    pub db: Option<PgPool>,
}

impl AppState {
    /// Wire handlers around the given collaborators.
    ///
    /// # Errors
    ///
    /// Fails if the handler registry is misconfigured.
    pub fn new(
        settings: Settings,
        collaborators: Collaborators,
        db: Option<PgPool>,
    ) -> Result<Self, AppError> {
        let registry = build_registry(&collaborators)?;
        tracing::debug!(handlers = ?registry.request_names(), "Handler registry built");

        Ok(Self {
            mediator: Mediator::new(registry, settings.dispatch.timeout()),
            tokens: collaborators.tokens,
            settings: Arc::new(settings),
            db,
        })
    }

    /// State backed by in-memory repositories.
    pub fn in_memory(settings: Settings) -> Result<Self, AppError> {
        let collaborators = in_memory_collaborators(&settings);
        Self::new(settings, collaborators, None)
    }
}

fn in_memory_collaborators(settings: &Settings) -> Collaborators {
    let renters = Arc::new(InMemoryRenterRepository::new());

    Collaborators {
        stations: Arc::new(InMemoryStationRepository::new()),
        renters: renters.clone(),
        verifications: Arc::new(InMemoryKycVerificationRepository::new(renters)),
        blobs: Arc::new(RepositoryBlobStore::new(Arc::new(
            InMemoryBlobRepository::new(),
        ))),
        tokens: Arc::new(JwtTokenService::new(settings.jwt.clone())),
        payments: Arc::new(UnconfiguredPaymentService),
    }
}

fn postgres_collaborators(settings: &Settings, pool: &PgPool) -> Collaborators {
    Collaborators {
        stations: Arc::new(PgStationRepository::new(pool.clone())),
        renters: Arc::new(PgRenterRepository::new(pool.clone())),
        verifications: Arc::new(PgKycVerificationRepository::new(pool.clone())),
        blobs: Arc::new(RepositoryBlobStore::new(Arc::new(PgBlobRepository::new(
            pool.clone(),
        )))),
        tokens: Arc::new(JwtTokenService::new(settings.jwt.clone())),
        payments: Arc::new(UnconfiguredPaymentService),
    }
}

/// Full router with tracing and CORS layers.
pub fn build_router(state: AppState) -> Router {
    let cors = cors::create_cors_layer(&state.settings.cors);

    routes::create_router(state).layer(
        ServiceBuilder::new()
            .layer(logging::create_trace_layer())
            .layer(cors),
    )
}

/// Application instance
pub struct Application {
    listener: TcpListener,
    router: Router,
    db: Option<PgPool>,
}

impl Application {
    /// Build the application from settings
    pub async fn build(settings: Settings) -> Result<Self> {
        handlers::health::init_server_start();

        let state = match settings.storage.backend {
            StorageBackend::Postgres => {
                let pool = database::create_pool(&settings.database).await?;
                tracing::info!("Database connection pool created");

                if settings.database.run_migrations {
                    database::run_migrations(&pool).await?;
                    tracing::info!("Database migrations applied");
                }

                let collaborators = postgres_collaborators(&settings, &pool);
                AppState::new(settings.clone(), collaborators, Some(pool))?
            }
            StorageBackend::Memory => {
                tracing::warn!("Using in-memory storage; data is lost on restart");
                AppState::in_memory(settings.clone())?
            }
        };

        tracing::info!(
            handlers = state.mediator.registered_count(),
            "Request handlers registered"
        );

        let db = state.db.clone();
        let router = build_router(state);

        let addr = settings.server_addr();
        let listener = TcpListener::bind(&addr).await?;
        tracing::info!("Listening on {}", addr);

        Ok(Self {
            listener,
            router,
            db,
        })
    }

    /// Run the server until a shutdown signal arrives
    pub async fn run_until_stopped(self) -> Result<()> {
        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server shutting down...");
        if let Some(pool) = self.db {
            pool.close().await;
            tracing::info!("Database connections closed");
        }

        Ok(())
    }

    /// Get the bound address
    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.listener.local_addr()
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Received Ctrl+C, initiating graceful shutdown..."),
        _ = terminate => tracing::info!("Received SIGTERM, initiating graceful shutdown..."),
    }
}
