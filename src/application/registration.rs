//! Wires every command and query to its handler.

use std::sync::Arc;

use crate::application::commands::*;
use crate::application::cqrs::HandlerRegistry;
use crate::application::queries::*;
use crate::domain::{
    BlobStore, KycVerificationRepository, PaymentService, RenterRepository, StationRepository,
    TokenService,
};
use crate::shared::error::AppError;

/// Shared collaborators injected into handlers.
#[derive(Clone)]
pub struct Collaborators {
    pub stations: Arc<dyn StationRepository>,
    pub renters: Arc<dyn RenterRepository>,
    pub verifications: Arc<dyn KycVerificationRepository>,
    pub blobs: Arc<dyn BlobStore>,
    pub tokens: Arc<dyn TokenService>,
    pub payments: Arc<dyn PaymentService>,
}

/// Build the registry holding one handler per request type.
///
/// # Errors
///
/// Returns `AppError::Configuration` if a request type is registered twice.
pub fn build_registry(c: &Collaborators) -> Result<HandlerRegistry, AppError> {
    HandlerRegistry::builder()
        // Commands
        .register::<RegisterRenterCommand, _>(RegisterRenterHandler::new(
            c.renters.clone(),
            c.tokens.clone(),
        ))
        .register::<LoginCommand, _>(LoginHandler::new(c.renters.clone(), c.tokens.clone()))
        .register::<CreateStationCommand, _>(CreateStationHandler::new(c.stations.clone()))
        .register::<UpdateStationCommand, _>(UpdateStationHandler::new(c.stations.clone()))
        .register::<DeleteStationCommand, _>(DeleteStationHandler::new(c.stations.clone()))
        .register::<UpdateRenterProfileCommand, _>(UpdateRenterProfileHandler::new(
            c.renters.clone(),
        ))
        .register::<SubmitKycDocumentCommand, _>(SubmitKycDocumentHandler::new(
            c.renters.clone(),
            c.blobs.clone(),
        ))
        .register::<VerifyCustomerInPersonCommand, _>(VerifyCustomerInPersonHandler::new(
            c.renters.clone(),
            c.verifications.clone(),
        ))
        .register::<UploadFileCommand, _>(UploadFileHandler::new(c.blobs.clone()))
        .register::<ChargeRenterCommand, _>(ChargeRenterHandler::new(
            c.renters.clone(),
            c.payments.clone(),
        ))
        // Queries
        .register::<GetStationsQuery, _>(GetStationsHandler::new(c.stations.clone()))
        .register::<GetStationByIdQuery, _>(GetStationByIdHandler::new(c.stations.clone()))
        .register::<GetRenterProfileQuery, _>(GetRenterProfileHandler::new(c.renters.clone()))
        .register::<GetKycHistoryQuery, _>(GetKycHistoryHandler::new(
            c.renters.clone(),
            c.verifications.clone(),
        ))
        .register::<GetFileQuery, _>(GetFileHandler::new(c.blobs.clone()))
        .build()
}
