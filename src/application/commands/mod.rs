//! Commands
//!
//! State-changing use cases. Each command is a [`Request`](crate::application::cqrs::Request)
//! paired with exactly one handler.

pub mod auth;
pub mod file;
pub mod payment;
pub mod renter;
pub mod station;

pub use auth::{LoginCommand, LoginHandler, RegisterRenterCommand, RegisterRenterHandler};
pub use file::{UploadFileCommand, UploadFileHandler};
pub use payment::{ChargeRenterCommand, ChargeRenterHandler};
pub use renter::{
    SubmitKycDocumentCommand, SubmitKycDocumentHandler, UpdateRenterProfileCommand,
    UpdateRenterProfileHandler, VerifyCustomerInPersonCommand, VerifyCustomerInPersonHandler,
};
pub use station::{
    CreateStationCommand, CreateStationHandler, DeleteStationCommand, DeleteStationHandler,
    UpdateStationCommand, UpdateStationHandler,
};
