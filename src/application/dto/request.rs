//! Request DTOs
//!
//! Bodies of endpoints that combine client input with path parameters or the
//! authenticated caller before building a command. Validation happens on the
//! resulting command.

use serde::Deserialize;
use uuid::Uuid;

/// `PATCH /stations/{id}`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStationRequest {
    pub name: Option<String>,
    pub address: Option<String>,
    pub capacity: Option<i32>,
    pub is_active: Option<bool>,
}

/// `PATCH /renters/me`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRenterProfileRequest {
    pub full_name: Option<String>,
    pub phone_number: Option<String>,
    pub driver_license_number: Option<String>,
}

/// `POST /renters/me/kyc`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitKycDocumentRequest {
    pub blob_id: Uuid,
}

/// `POST /renters/{id}/kyc/verify-in-person`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyInPersonRequest {
    pub is_verified: bool,
    pub notes: Option<String>,
}

/// `POST /renters/{id}/charges`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChargeRenterRequest {
    pub amount_cents: i64,
    pub currency: String,
    pub description: Option<String>,
}
