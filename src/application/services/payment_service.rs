//! Payment service stand-in.
//!
//! Payment processing is provided by an external integration. Until one is
//! configured every call fails with `AppError::Unimplemented`, which keeps the
//! charge endpoint wired and testable end to end.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{ChargeRequest, PaymentReceipt, PaymentService};
use crate::shared::error::AppError;

#[derive(Debug, Default)]
pub struct UnconfiguredPaymentService;

#[async_trait]
impl PaymentService for UnconfiguredPaymentService {
    async fn charge(&self, request: &ChargeRequest) -> Result<PaymentReceipt, AppError> {
        tracing::warn!(
            renter_id = %request.renter_id,
            amount_cents = request.amount_cents,
            "Charge requested but no payment provider is configured"
        );
        Err(AppError::Unimplemented("payment processing".into()))
    }

    async fn refund(&self, payment_id: Uuid) -> Result<PaymentReceipt, AppError> {
        tracing::warn!(%payment_id, "Refund requested but no payment provider is configured");
        Err(AppError::Unimplemented("payment processing".into()))
    }
}
