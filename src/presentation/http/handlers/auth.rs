//! Authentication Handlers

use axum::{extract::State, http::StatusCode};

use crate::application::commands::{LoginCommand, RegisterRenterCommand};
use crate::application::dto::AuthTokensDto;
use crate::presentation::http::extractors::AppJson;
use crate::shared::error::AppError;
use crate::shared::response::ApiResponse;
use crate::startup::AppState;

/// Register a new renter
pub async fn register(
    State(state): State<AppState>,
    AppJson(command): AppJson<RegisterRenterCommand>,
) -> Result<(StatusCode, ApiResponse<AuthTokensDto>), AppError> {
    let tokens = state.mediator.send(command).await?;
    Ok((
        StatusCode::CREATED,
        ApiResponse::ok_with_message(tokens, "Registration successful"),
    ))
}

/// Login with credentials
pub async fn login(
    State(state): State<AppState>,
    AppJson(command): AppJson<LoginCommand>,
) -> Result<ApiResponse<AuthTokensDto>, AppError> {
    let tokens = state.mediator.send(command).await?;
    Ok(ApiResponse::ok(tokens))
}
