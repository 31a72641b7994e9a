//! Payment contract.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::error::AppError;

/// Amount to collect from a renter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChargeRequest {
    pub renter_id: Uuid,
    /// Minor currency units
    pub amount_cents: i64,
    /// ISO 4217 code
    pub currency: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Succeeded,
    Pending,
    Refunded,
}

/// Outcome of a charge or refund.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentReceipt {
    pub payment_id: Uuid,
    pub amount_cents: i64,
    pub currency: String,
    pub status: PaymentStatus,
    pub processed_at: DateTime<Utc>,
}

/// Charges and refunds renters through an external provider.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PaymentService: Send + Sync {
    async fn charge(&self, request: &ChargeRequest) -> Result<PaymentReceipt, AppError>;

    async fn refund(&self, payment_id: Uuid) -> Result<PaymentReceipt, AppError>;
}
