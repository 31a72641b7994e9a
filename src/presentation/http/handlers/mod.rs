//! HTTP Handlers
//!
//! Request handlers for all HTTP endpoints.

pub mod auth;
pub mod file;
pub mod health;
pub mod renter;
pub mod station;
