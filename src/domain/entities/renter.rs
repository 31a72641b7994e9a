//! Renter profile entity and repository trait.
//!
//! Maps to the `renters` table in the database schema.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::error::AppError;

/// KYC state of a renter, stored as VARCHAR.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum KycStatus {
    /// No documents yet
    #[default]
    Pending,
    /// Documents uploaded, awaiting review
    Submitted,
    Verified,
    Rejected,
}

impl KycStatus {
    /// Convert from database string representation.
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "submitted" => Self::Submitted,
            "verified" => Self::Verified,
            "rejected" => Self::Rejected,
            _ => Self::Pending,
        }
    }

    /// Convert to database string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Submitted => "submitted",
            Self::Verified => "verified",
            Self::Rejected => "rejected",
        }
    }
}

impl std::fmt::Display for KycStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A customer account able to rent vehicles.
///
/// Maps to the `renters` table:
/// - id: UUID PRIMARY KEY
/// - email: VARCHAR(255) NOT NULL UNIQUE
/// - password_hash: TEXT NOT NULL
/// - full_name: VARCHAR(100) NOT NULL
/// - phone_number: VARCHAR(32) NULL
/// - driver_license_number: VARCHAR(64) NULL
/// - kyc_status: VARCHAR(16) NOT NULL DEFAULT 'pending'
/// - kyc_document_blob_id: UUID NULL REFERENCES blobs(id)
/// - created_at / updated_at: TIMESTAMPTZ
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenterProfile {
    pub id: Uuid,

    pub email: String,

    /// Argon2 password hash
    #[serde(skip_serializing)]
    pub password_hash: String,

    pub full_name: String,
    pub phone_number: Option<String>,
    pub driver_license_number: Option<String>,

    #[serde(default)]
    pub kyc_status: KycStatus,

    /// Identity document uploaded for KYC
    pub kyc_document_blob_id: Option<Uuid>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl RenterProfile {
    /// Create a renter awaiting KYC.
    pub fn new(
        email: impl Into<String>,
        password_hash: impl Into<String>,
        full_name: impl Into<String>,
        phone_number: Option<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::now_v7(),
            email: email.into(),
            password_hash: password_hash.into(),
            full_name: full_name.into(),
            phone_number,
            driver_license_number: None,
            kyc_status: KycStatus::Pending,
            kyc_document_blob_id: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn is_verified(&self) -> bool {
        self.kyc_status == KycStatus::Verified
    }
}

/// Repository trait for RenterProfile data access operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RenterRepository: Send + Sync {
    /// Find a renter by id.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<RenterProfile>, AppError>;

    /// Find a renter by email (case-insensitive).
    async fn find_by_email(&self, email: &str) -> Result<Option<RenterProfile>, AppError>;

    /// Check whether an email is already registered.
    async fn email_exists(&self, email: &str) -> Result<bool, AppError>;

    /// Create a new renter.
    async fn create(&self, renter: &RenterProfile) -> Result<RenterProfile, AppError>;

    /// Persist changes to an existing renter.
    async fn update(&self, renter: &RenterProfile) -> Result<RenterProfile, AppError>;
}
