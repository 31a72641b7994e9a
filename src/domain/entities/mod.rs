//! # Domain Entities
//!
//! Core domain entities of the rental backend. All entities map directly to
//! their corresponding database tables.
//!
//! - **Station**: A pick-up/drop-off location with vehicle capacity
//! - **RenterProfile**: A customer account with KYC state
//! - **KycVerification**: Audit record of a verification decision
//! - **DomainBlob**: Metadata of a stored file
//!
//! ## Repository Traits
//!
//! Each entity has an associated repository trait defining data access operations.
//! These traits are implemented in the infrastructure layer, following the
//! dependency inversion principle.

mod blob;
mod kyc;
mod renter;
mod station;

pub use blob::{BlobRepository, DomainBlob};
pub use kyc::{KycVerification, KycVerificationRepository, VerificationMethod};
pub use renter::{KycStatus, RenterProfile, RenterRepository};
pub use station::{Station, StationFilter, StationRepository};

#[cfg(test)]
pub use blob::MockBlobRepository;
#[cfg(test)]
pub use kyc::MockKycVerificationRepository;
#[cfg(test)]
pub use renter::MockRenterRepository;
#[cfg(test)]
pub use station::MockStationRepository;
