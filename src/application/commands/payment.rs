//! Charging renters through the payment collaborator.

use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;
use validator::Validate;

use crate::application::cqrs::{Request, RequestHandler, RequestKind};
use crate::application::dto::PaymentReceiptDto;
use crate::domain::{ChargeRequest, PaymentService, RenterRepository};
use crate::shared::error::AppError;

/// `POST /renters/{id}/charges`
#[derive(Debug, Clone, Validate)]
pub struct ChargeRenterCommand {
    pub renter_id: Uuid,

    #[validate(range(min = 1, message = "Amount must be positive"))]
    pub amount_cents: i64,

    #[validate(length(equal = 3, message = "Currency must be an ISO 4217 code"))]
    pub currency: String,

    #[validate(length(max = 255))]
    pub description: Option<String>,
}

impl Request for ChargeRenterCommand {
    type Output = PaymentReceiptDto;
    const NAME: &'static str = "ChargeRenterCommand";
    const KIND: RequestKind = RequestKind::Command;
}

pub struct ChargeRenterHandler {
    renters: Arc<dyn RenterRepository>,
    payments: Arc<dyn PaymentService>,
}

impl ChargeRenterHandler {
    pub fn new(renters: Arc<dyn RenterRepository>, payments: Arc<dyn PaymentService>) -> Self {
        Self { renters, payments }
    }
}

#[async_trait]
impl RequestHandler<ChargeRenterCommand> for ChargeRenterHandler {
    async fn handle(&self, command: ChargeRenterCommand) -> Result<PaymentReceiptDto, AppError> {
        if self.renters.find_by_id(command.renter_id).await?.is_none() {
            return Err(AppError::NotFound("Renter not found".into()));
        }

        let receipt = self
            .payments
            .charge(&ChargeRequest {
                renter_id: command.renter_id,
                amount_cents: command.amount_cents,
                currency: command.currency.to_uppercase(),
                description: command.description,
            })
            .await?;

        tracing::info!(
            renter_id = %command.renter_id,
            payment_id = %receipt.payment_id,
            amount_cents = receipt.amount_cents,
            "Renter charged"
        );

        Ok(receipt.into())
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::application::services::UnconfiguredPaymentService;
    use crate::domain::{MockPaymentService, MockRenterRepository, PaymentReceipt, PaymentStatus, RenterProfile};
    use crate::shared::validation;

    fn command(renter_id: Uuid) -> ChargeRenterCommand {
        ChargeRenterCommand {
            renter_id,
            amount_cents: 2500,
            currency: "eur".into(),
            description: Some("Weekend rental".into()),
        }
    }

    fn known_renter() -> MockRenterRepository {
        let renter = RenterProfile::new("ada@example.com", "hash", "Ada", None);
        let mut repo = MockRenterRepository::new();
        repo.expect_find_by_id()
            .returning(move |_| Ok(Some(renter.clone())));
        repo
    }

    #[test]
    fn test_charge_rules() {
        let mut bad = command(Uuid::new_v4());
        bad.amount_cents = 0;
        bad.currency = "EURO".into();
        match validation::validate(&bad) {
            Err(AppError::Validation { errors, .. }) => assert_eq!(errors.len(), 2),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_charge_delegates_to_payment_service() {
        let mut payments = MockPaymentService::new();
        payments
            .expect_charge()
            .withf(|req| req.currency == "EUR" && req.amount_cents == 2500)
            .times(1)
            .returning(|req| {
                Ok(PaymentReceipt {
                    payment_id: Uuid::new_v4(),
                    amount_cents: req.amount_cents,
                    currency: req.currency.clone(),
                    status: PaymentStatus::Succeeded,
                    processed_at: Utc::now(),
                })
            });

        let receipt = ChargeRenterHandler::new(Arc::new(known_renter()), Arc::new(payments))
            .handle(command(Uuid::new_v4()))
            .await
            .unwrap();
        assert_eq!(receipt.status, PaymentStatus::Succeeded);
    }

    #[tokio::test]
    async fn test_unconfigured_provider_is_unimplemented() {
        let err = ChargeRenterHandler::new(
            Arc::new(known_renter()),
            Arc::new(UnconfiguredPaymentService),
        )
        .handle(command(Uuid::new_v4()))
        .await
        .unwrap_err();
        assert!(matches!(err, AppError::Unimplemented(_)));
    }

    #[tokio::test]
    async fn test_unknown_renter_is_not_charged() {
        let mut renters = MockRenterRepository::new();
        renters.expect_find_by_id().returning(|_| Ok(None));
        let mut payments = MockPaymentService::new();
        payments.expect_charge().never();

        let err = ChargeRenterHandler::new(Arc::new(renters), Arc::new(payments))
            .handle(command(Uuid::new_v4()))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }
}
