//! Application Services
//!
//! Concrete collaborators injected into use-case handlers.
//!
//! ## Available Services
//!
//! - **JwtTokenService**: Signs and checks access tokens
//! - **password**: Argon2 hashing helpers
//! - **RepositoryBlobStore**: Blob allocation backed by a blob repository
//! - **UnconfiguredPaymentService**: Payment stand-in until a provider is wired

pub mod blob_store;
pub mod password;
pub mod payment_service;
pub mod token_service;

pub use blob_store::RepositoryBlobStore;
pub use payment_service::UnconfiguredPaymentService;
pub use token_service::{Claims, JwtTokenService};
