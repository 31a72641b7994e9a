//! # Collaborator Contracts
//!
//! Capabilities the use-case handlers depend on but do not implement.
//! Concrete implementations are wired in at startup.

mod blob_store;
mod payment;
mod token;

pub use blob_store::BlobStore;
pub use payment::{ChargeRequest, PaymentReceipt, PaymentService, PaymentStatus};
pub use token::{AuthTokens, Identity, TokenService};

#[cfg(test)]
pub use blob_store::MockBlobStore;
#[cfg(test)]
pub use payment::MockPaymentService;
#[cfg(test)]
pub use token::MockTokenService;
