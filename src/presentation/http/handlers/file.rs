//! File Handlers

use axum::{extract::State, http::StatusCode};
use uuid::Uuid;

use crate::application::commands::UploadFileCommand;
use crate::application::dto::DomainBlobDto;
use crate::application::queries::GetFileQuery;
use crate::presentation::http::extractors::{AppJson, AppPath};
use crate::shared::error::AppError;
use crate::shared::response::ApiResponse;
use crate::startup::AppState;

/// Reserve a blob for an upload and return its ID
pub async fn upload_file(
    State(state): State<AppState>,
    AppJson(command): AppJson<UploadFileCommand>,
) -> Result<(StatusCode, ApiResponse<Uuid>), AppError> {
    let blob_id = state.mediator.send(command).await?;
    Ok((StatusCode::CREATED, ApiResponse::ok(blob_id)))
}

/// File metadata
pub async fn get_file(
    State(state): State<AppState>,
    AppPath(blob_id): AppPath<Uuid>,
) -> Result<ApiResponse<DomainBlobDto>, AppError> {
    Ok(ApiResponse::ok(
        state.mediator.send(GetFileQuery { blob_id }).await?,
    ))
}
