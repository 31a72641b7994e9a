//! Response DTOs
//!
//! Payloads placed in the `data` field of the response envelope.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{
    AuthTokens, DomainBlob, KycStatus, KycVerification, PaymentReceipt, PaymentStatus,
    RenterProfile, Station,
};

/// Token pair returned by login and registration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthTokensDto {
    pub access_token: String,
    pub access_token_expiry: DateTime<Utc>,
    pub refresh_token: String,
    pub refresh_token_expiry: DateTime<Utc>,
    pub token_type: String,
}

impl From<AuthTokens> for AuthTokensDto {
    fn from(tokens: AuthTokens) -> Self {
        Self {
            access_token: tokens.access_token,
            access_token_expiry: tokens.access_token_expiry,
            refresh_token: tokens.refresh_token,
            refresh_token_expiry: tokens.refresh_token_expiry,
            token_type: "Bearer".to_string(),
        }
    }
}

/// Station response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StationDto {
    pub id: Uuid,
    pub name: String,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
    pub capacity: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Station> for StationDto {
    fn from(station: Station) -> Self {
        Self {
            id: station.id,
            name: station.name,
            address: station.address,
            latitude: station.latitude,
            longitude: station.longitude,
            capacity: station.capacity,
            is_active: station.is_active,
            created_at: station.created_at,
            updated_at: station.updated_at,
        }
    }
}

/// Renter profile response (never includes the password hash)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenterProfileDto {
    pub id: Uuid,
    pub email: String,
    pub full_name: String,
    pub phone_number: Option<String>,
    pub driver_license_number: Option<String>,
    pub kyc_status: KycStatus,
    pub kyc_document_blob_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<RenterProfile> for RenterProfileDto {
    fn from(renter: RenterProfile) -> Self {
        Self {
            id: renter.id,
            email: renter.email,
            full_name: renter.full_name,
            phone_number: renter.phone_number,
            driver_license_number: renter.driver_license_number,
            kyc_status: renter.kyc_status,
            kyc_document_blob_id: renter.kyc_document_blob_id,
            created_at: renter.created_at,
            updated_at: renter.updated_at,
        }
    }
}

/// KYC audit entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KycVerificationDto {
    pub id: Uuid,
    pub renter_id: Uuid,
    pub is_verified: bool,
    pub verified_by: Uuid,
    pub notes: Option<String>,
    pub method: String,
    pub created_at: DateTime<Utc>,
}

impl From<KycVerification> for KycVerificationDto {
    fn from(record: KycVerification) -> Self {
        Self {
            id: record.id,
            renter_id: record.renter_id,
            is_verified: record.is_verified,
            verified_by: record.verified_by,
            notes: record.notes,
            method: record.method.as_str().to_string(),
            created_at: record.created_at,
        }
    }
}

/// Stored file metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainBlobDto {
    pub id: Uuid,
    pub container_name: String,
    pub blob_name: String,
    pub file_name: String,
    pub created_at: DateTime<Utc>,
}

impl From<DomainBlob> for DomainBlobDto {
    fn from(blob: DomainBlob) -> Self {
        Self {
            id: blob.id,
            container_name: blob.container_name,
            blob_name: blob.blob_name,
            file_name: blob.file_name,
            created_at: blob.created_at,
        }
    }
}

/// Charge outcome
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentReceiptDto {
    pub payment_id: Uuid,
    pub amount_cents: i64,
    pub currency: String,
    pub status: PaymentStatus,
    pub processed_at: DateTime<Utc>,
}

impl From<PaymentReceipt> for PaymentReceiptDto {
    fn from(receipt: PaymentReceipt) -> Self {
        Self {
            payment_id: receipt.payment_id,
            amount_cents: receipt.amount_cents,
            currency: receipt.currency,
            status: receipt.status,
            processed_at: receipt.processed_at,
        }
    }
}
