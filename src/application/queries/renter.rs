//! Renter lookups.

use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;
use validator::Validate;

use crate::application::cqrs::{Request, RequestHandler, RequestKind};
use crate::application::dto::{KycVerificationDto, RenterProfileDto};
use crate::domain::{KycVerificationRepository, RenterRepository};
use crate::shared::error::AppError;

/// `GET /renters/me`
#[derive(Debug, Clone, Validate)]
pub struct GetRenterProfileQuery {
    pub renter_id: Uuid,
}

impl Request for GetRenterProfileQuery {
    type Output = RenterProfileDto;
    const NAME: &'static str = "GetRenterProfileQuery";
    const KIND: RequestKind = RequestKind::Query;
}

pub struct GetRenterProfileHandler {
    renters: Arc<dyn RenterRepository>,
}

impl GetRenterProfileHandler {
    pub fn new(renters: Arc<dyn RenterRepository>) -> Self {
        Self { renters }
    }
}

#[async_trait]
impl RequestHandler<GetRenterProfileQuery> for GetRenterProfileHandler {
    async fn handle(&self, query: GetRenterProfileQuery) -> Result<RenterProfileDto, AppError> {
        self.renters
            .find_by_id(query.renter_id)
            .await?
            .map(RenterProfileDto::from)
            .ok_or_else(|| AppError::NotFound("Renter not found".into()))
    }
}

/// `GET /renters/{id}/kyc`: audit trail, oldest first.
#[derive(Debug, Clone, Validate)]
pub struct GetKycHistoryQuery {
    pub renter_id: Uuid,
}

impl Request for GetKycHistoryQuery {
    type Output = Vec<KycVerificationDto>;
    const NAME: &'static str = "GetKycHistoryQuery";
    const KIND: RequestKind = RequestKind::Query;
}

pub struct GetKycHistoryHandler {
    renters: Arc<dyn RenterRepository>,
    verifications: Arc<dyn KycVerificationRepository>,
}

impl GetKycHistoryHandler {
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
impl RequestHandler<GetKycHistoryQuery> for GetKycHistoryHandler {
    async fn handle(&self, query: GetKycHistoryQuery) -> Result<Vec<KycVerificationDto>, AppError> {
        if self.renters.find_by_id(query.renter_id).await?.is_none() {
            return Err(AppError::NotFound("Renter not found".into()));
        }

        let mut records = self.verifications.find_by_renter(query.renter_id).await?;
        records.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));

        Ok(records.into_iter().map(KycVerificationDto::from).collect())
    }
}
