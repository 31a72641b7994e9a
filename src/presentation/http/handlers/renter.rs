//! Renter Handlers

use axum::extract::State;
use uuid::Uuid;

use crate::application::commands::{
    ChargeRenterCommand, SubmitKycDocumentCommand, UpdateRenterProfileCommand,
    VerifyCustomerInPersonCommand,
};
use crate::application::dto::{
    ChargeRenterRequest, KycVerificationDto, PaymentReceiptDto, RenterProfileDto,
    SubmitKycDocumentRequest, UpdateRenterProfileRequest, VerifyInPersonRequest,
};
use crate::application::queries::{GetKycHistoryQuery, GetRenterProfileQuery};
use crate::presentation::http::extractors::{AppJson, AppPath, AuthUser};
use crate::shared::error::AppError;
use crate::shared::response::ApiResponse;
use crate::startup::AppState;

/// Get the caller's profile
pub async fn get_current_renter(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<ApiResponse<RenterProfileDto>, AppError> {
    let profile = state
        .mediator
        .send(GetRenterProfileQuery {
            renter_id: auth.renter_id,
        })
        .await?;
    Ok(ApiResponse::ok(profile))
}

/// Update the caller's profile
pub async fn update_current_renter(
    State(state): State<AppState>,
    auth: AuthUser,
    AppJson(body): AppJson<UpdateRenterProfileRequest>,
) -> Result<ApiResponse<RenterProfileDto>, AppError> {
    let command = UpdateRenterProfileCommand {
        renter_id: auth.renter_id,
        full_name: body.full_name,
        phone_number: body.phone_number,
        driver_license_number: body.driver_license_number,
    };
    Ok(ApiResponse::ok(state.mediator.send(command).await?))
}

/// Attach an uploaded identity document to the caller's profile
pub async fn submit_kyc_document(
    State(state): State<AppState>,
    auth: AuthUser,
    AppJson(body): AppJson<SubmitKycDocumentRequest>,
) -> Result<ApiResponse<RenterProfileDto>, AppError> {
    let command = SubmitKycDocumentCommand {
        renter_id: auth.renter_id,
        blob_id: body.blob_id,
    };
    let profile = state.mediator.send(command).await?;
    Ok(ApiResponse::ok_with_message(profile, "Document submitted"))
}

/// Verification audit trail of a renter
pub async fn get_kyc_history(
    State(state): State<AppState>,
    AppPath(renter_id): AppPath<Uuid>,
) -> Result<ApiResponse<Vec<KycVerificationDto>>, AppError> {
    let history = state.mediator.send(GetKycHistoryQuery { renter_id }).await?;
    Ok(ApiResponse::ok(history))
}

/// Record an in-person identity check; the caller is the verifier.
///
/// Any authenticated caller other than the renter may verify. There is no
/// staff or clerk role; restricting verifiers is left to a deployment's
/// gateway.
pub async fn verify_in_person(
    State(state): State<AppState>,
    auth: AuthUser,
    AppPath(renter_id): AppPath<Uuid>,
    AppJson(body): AppJson<VerifyInPersonRequest>,
) -> Result<ApiResponse<bool>, AppError> {
    let command = VerifyCustomerInPersonCommand {
        renter_id,
        is_verified: body.is_verified,
        verified_by: auth.renter_id,
        notes: body.notes,
    };
    let done = state.mediator.send(command).await?;
    Ok(ApiResponse::ok_with_message(done, "Verification recorded"))
}

/// Charge a renter through the payment provider
pub async fn charge_renter(
    State(state): State<AppState>,
    AppPath(renter_id): AppPath<Uuid>,
    AppJson(body): AppJson<ChargeRenterRequest>,
) -> Result<ApiResponse<PaymentReceiptDto>, AppError> {
    let command = ChargeRenterCommand {
        renter_id,
        amount_cents: body.amount_cents,
        currency: body.currency,
        description: body.description,
    };
    Ok(ApiResponse::ok(state.mediator.send(command).await?))
}
