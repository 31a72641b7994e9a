//! Infrastructure Layer
//!
//! Implementations of the domain's repository traits:
//! - PostgreSQL repositories and pool management
//! - In-memory repositories for development and tests
//! - Prometheus metrics

pub mod database;
pub mod memory;
pub mod metrics;
pub mod repositories;
