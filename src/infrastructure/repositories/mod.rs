//! Repository Implementations
//!
//! PostgreSQL implementations of domain repository traits.
//!
//! ## Available Repositories
//!
//! - **StationRepository** - Rental stations with paged name/address search
//! - **RenterRepository** - Renter accounts and KYC status
//! - **KycVerificationRepository** - Append-only verification audit trail
//! - **BlobRepository** - Uploaded file metadata
//!
//! ## Usage Example
//!
//! ```rust,ignore
//! use sqlx::PgPool;
//! use station_rental::infrastructure::repositories::{PgRenterRepository, PgStationRepository};
//!
//! fn setup_repositories(pool: PgPool) {
//!     let stations = PgStationRepository::new(pool.clone());
//!     let renters = PgRenterRepository::new(pool);
//! }
//! ```

pub mod blob_repository;
pub mod kyc_repository;
pub mod renter_repository;
pub mod station_repository;

pub use blob_repository::PgBlobRepository;
pub use kyc_repository::PgKycVerificationRepository;
pub use renter_repository::PgRenterRepository;
pub use station_repository::PgStationRepository;
