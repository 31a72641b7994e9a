//! Queries
//!
//! Read-only use cases. Sending the same query twice against unchanged data
//! yields equal results.

pub mod file;
pub mod renter;
pub mod station;

pub use file::{GetFileHandler, GetFileQuery};
pub use renter::{
    GetKycHistoryHandler, GetKycHistoryQuery, GetRenterProfileHandler, GetRenterProfileQuery,
};
pub use station::{GetStationByIdHandler, GetStationByIdQuery, GetStationsHandler, GetStationsQuery};
