//! # Domain Layer
//!
//! The domain layer contains the core business objects of the rental backend.
//! It is independent of any external frameworks or infrastructure concerns.
//!
//! ## Structure
//!
//! - **entities**: Stations, renter profiles, KYC audit records, blobs
//! - **services**: Contracts for collaborators the use cases depend on
//!   (token issuance, payments, blob storage)
//!
//! ## Design Principles
//!
//! - No dependencies on infrastructure or presentation layers
//! - Repository traits define data access contracts
//! - Collaborators are injected as trait objects, never looked up

pub mod entities;
pub mod services;

// Re-export commonly used types
pub use entities::*;
pub use services::*;
