//! Renter profile and KYC commands.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::application::cqrs::{Request, RequestHandler, RequestKind};
use crate::application::dto::RenterProfileDto;
use crate::domain::{
    BlobStore, KycStatus, KycVerification, KycVerificationRepository, RenterProfile,
    RenterRepository,
};
use crate::shared::error::AppError;
use crate::shared::validation::not_blank;

async fn load_renter(
    renters: &dyn RenterRepository,
    renter_id: Uuid,
) -> Result<RenterProfile, AppError> {
    renters
        .find_by_id(renter_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Renter not found".into()))
}

/// `PATCH /renters/me`
#[derive(Debug, Clone, Validate)]
pub struct UpdateRenterProfileCommand {
    pub renter_id: Uuid,

    #[validate(
        length(min = 1, max = 100, message = "Full name must be 1-100 characters"),
        custom(function = "not_blank")
    )]
    pub full_name: Option<String>,

    #[validate(length(max = 32))]
    pub phone_number: Option<String>,

    #[validate(length(min = 1, max = 64), custom(function = "not_blank"))]
    pub driver_license_number: Option<String>,
}

impl Request for UpdateRenterProfileCommand {
    type Output = RenterProfileDto;
    const NAME: &'static str = "UpdateRenterProfileCommand";
    const KIND: RequestKind = RequestKind::Command;
}

pub struct UpdateRenterProfileHandler {
    renters: Arc<dyn RenterRepository>,
}

impl UpdateRenterProfileHandler {
    pub fn new(renters: Arc<dyn RenterRepository>) -> Self {
        Self { renters }
    }
}

#[async_trait]
impl RequestHandler<UpdateRenterProfileCommand> for UpdateRenterProfileHandler {
    async fn handle(
        &self,
        command: UpdateRenterProfileCommand,
    ) -> Result<RenterProfileDto, AppError> {
        let mut renter = load_renter(self.renters.as_ref(), command.renter_id).await?;

        if let Some(full_name) = command.full_name {
            renter.full_name = full_name.trim().to_string();
        }
        if let Some(phone) = command.phone_number {
            renter.phone_number = Some(phone).filter(|p| !p.is_empty());
        }
        if let Some(license) = command.driver_license_number {
            renter.driver_license_number = Some(license.trim().to_string());
        }
        renter.updated_at = Utc::now();

        Ok(self.renters.update(&renter).await?.into())
    }
}

/// `POST /renters/me/kyc`: attach an uploaded identity document.
#[derive(Debug, Clone, Validate)]
pub struct SubmitKycDocumentCommand {
    pub renter_id: Uuid,
    pub blob_id: Uuid,
}

impl Request for SubmitKycDocumentCommand {
    type Output = RenterProfileDto;
    const NAME: &'static str = "SubmitKycDocumentCommand";
    const KIND: RequestKind = RequestKind::Command;
}

pub struct SubmitKycDocumentHandler {
    renters: Arc<dyn RenterRepository>,
    blobs: Arc<dyn BlobStore>,
}

impl SubmitKycDocumentHandler {
    pub fn new(renters: Arc<dyn RenterRepository>, blobs: Arc<dyn BlobStore>) -> Self {
        Self { renters, blobs }
    }
}

#[async_trait]
impl RequestHandler<SubmitKycDocumentCommand> for SubmitKycDocumentHandler {
    async fn handle(&self, command: SubmitKycDocumentCommand) -> Result<RenterProfileDto, AppError> {
        let mut renter = load_renter(self.renters.as_ref(), command.renter_id).await?;

        if renter.is_verified() {
            return Err(AppError::Conflict("Renter is already verified".into()));
        }

        if self.blobs.get(command.blob_id).await?.is_none() {
            return Err(AppError::NotFound("Document not found".into()));
        }

        renter.kyc_document_blob_id = Some(command.blob_id);
        renter.kyc_status = KycStatus::Submitted;
        renter.updated_at = Utc::now();

        let renter = self.renters.update(&renter).await?;
        tracing::info!(renter_id = %renter.id, blob_id = %command.blob_id, "KYC document submitted");

        Ok(renter.into())
    }
}

fn verifier_is_not_renter(command: &VerifyCustomerInPersonCommand) -> Result<(), ValidationError> {
    if command.verified_by == command.renter_id {
        let mut err = ValidationError::new("self_verification");
        err.message = Some("Renters cannot verify themselves".into());
        return Err(err);
    }
    Ok(())
}

/// Records the outcome of an in-person identity check.
#[derive(Debug, Clone, Validate)]
#[validate(schema(function = "verifier_is_not_renter"))]
pub struct VerifyCustomerInPersonCommand {
    pub renter_id: Uuid,
    pub is_verified: bool,
    pub verified_by: Uuid,

    #[validate(length(max = 1000))]
    pub notes: Option<String>,
}

impl Request for VerifyCustomerInPersonCommand {
    type Output = bool;
    const NAME: &'static str = "VerifyCustomerInPersonCommand";
    const KIND: RequestKind = RequestKind::Command;
}

pub struct VerifyCustomerInPersonHandler {
    renters: Arc<dyn RenterRepository>,
    verifications: Arc<dyn KycVerificationRepository>,
}

impl VerifyCustomerInPersonHandler {
    pub fn new(
        renters: Arc<dyn RenterRepository>,
        verifications: Arc<dyn KycVerificationRepository>,
    ) -> Self {
        Self {
            renters,
            verifications,
        }
    }
}

#[async_trait]
impl RequestHandler<VerifyCustomerInPersonCommand> for VerifyCustomerInPersonHandler {
    async fn handle(&self, command: VerifyCustomerInPersonCommand) -> Result<bool, AppError> {
        let renter = load_renter(self.renters.as_ref(), command.renter_id).await?;

        let status = if command.is_verified {
            KycStatus::Verified
        } else {
            KycStatus::Rejected
        };
        let record = KycVerification::in_person(
            renter.id,
            command.is_verified,
            command.verified_by,
            command.notes,
        );
        self.verifications.record_decision(&record, status).await?;

        tracing::info!(
            renter_id = %renter.id,
            verified_by = %command.verified_by,
            status = %status,
            "In-person verification recorded"
        );

        Ok(true)
    }
}
