//! # Station Rental Library
//!
//! Backend for a vehicle rental network:
//! - Station catalogue with paged search
//! - Renter accounts with JWT authentication
//! - KYC document submission and in-person verification audit trail
//! - File metadata and payment collaborators
//!
//! ## Architecture
//!
//! Every use case is a command or query dispatched through a mediator:
//!
//! - **Domain Layer**: Entities, repository and collaborator traits
//! - **Application Layer**: Commands, queries, the CQRS core and services
//! - **Infrastructure Layer**: PostgreSQL and in-memory repositories, metrics
//! - **Presentation Layer**: HTTP handlers and middleware
//!
//! ## Module Structure
//!
//! ```text
//! station_rental/
//! +-- config/         Configuration management
//! +-- domain/         Entities and traits
//! +-- application/    CQRS core, commands, queries, DTOs, services
//! +-- infrastructure/ Repositories, database, metrics
//! +-- presentation/   HTTP routes, handlers, middleware
//! +-- shared/         Errors, envelope, pagination, validation
//! ```

// Configuration module
pub mod config;

// Domain layer - Core business logic
pub mod domain;

// Application layer - Use cases
pub mod application;

// Infrastructure layer - External implementations
pub mod infrastructure;

// Presentation layer - HTTP handlers
pub mod presentation;

// Shared utilities
pub mod shared;

// Composition root and server lifecycle
pub mod startup;

// Telemetry and observability
pub mod telemetry;
