//! KYC verification audit record and repository trait.
//!
//! Maps to the `kyc_verifications` table. Records are append-only.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::renter::KycStatus;
use crate::shared::error::AppError;

/// How a verification decision was reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum VerificationMethod {
    /// Staff checked documents face to face at a station
    #[default]
    InPerson,
}

impl VerificationMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InPerson => "in_person",
        }
    }
}

/// One verification decision about a renter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KycVerification {
    pub id: Uuid,
    pub renter_id: Uuid,
    pub is_verified: bool,
    /// Staff member who made the decision
    pub verified_by: Uuid,
    pub notes: Option<String>,
    pub method: VerificationMethod,
    pub created_at: DateTime<Utc>,
}

impl KycVerification {
    pub fn in_person(
        renter_id: Uuid,
        is_verified: bool,
        verified_by: Uuid,
        notes: Option<String>,
    ) -> Self {
        Self {
            id: Uuid::now_v7(),
            renter_id,
            is_verified,
            verified_by,
            notes,
            method: VerificationMethod::InPerson,
            created_at: Utc::now(),
        }
    }
}

/// Repository trait for KYC audit records.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait KycVerificationRepository: Send + Sync {
    /// Append an audit record and move the renter to `status` in one
    /// atomic write. Neither change is kept if the renter does not exist.
    async fn record_decision(
        &self,
        record: &KycVerification,
        status: KycStatus,
    ) -> Result<KycVerification, AppError>;

    /// All records for a renter, oldest first.
    async fn find_by_renter(&self, renter_id: Uuid) -> Result<Vec<KycVerification>, AppError>;
}
