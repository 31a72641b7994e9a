//! Station Handlers

use axum::{extract::State, http::StatusCode};
use uuid::Uuid;

use crate::application::commands::{
    CreateStationCommand, DeleteStationCommand, UpdateStationCommand,
};
use crate::application::dto::{StationDto, UpdateStationRequest};
use crate::application::queries::{GetStationByIdQuery, GetStationsQuery};
use crate::presentation::http::extractors::{AppJson, AppPath, AppQuery};
use crate::shared::error::AppError;
use crate::shared::pagination::Page;
use crate::shared::response::ApiResponse;
use crate::startup::AppState;

/// List stations, filtered and paged
pub async fn list_stations(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<GetStationsQuery>,
) -> Result<ApiResponse<Page<StationDto>>, AppError> {
    Ok(ApiResponse::ok(state.mediator.send(query).await?))
}

/// Get a station by ID
pub async fn get_station(
    State(state): State<AppState>,
    AppPath(id): AppPath<Uuid>,
) -> Result<ApiResponse<StationDto>, AppError> {
    Ok(ApiResponse::ok(
        state.mediator.send(GetStationByIdQuery { id }).await?,
    ))
}

/// Create a station
pub async fn create_station(
    State(state): State<AppState>,
    AppJson(command): AppJson<CreateStationCommand>,
) -> Result<(StatusCode, ApiResponse<StationDto>), AppError> {
    let station = state.mediator.send(command).await?;
    Ok((StatusCode::CREATED, ApiResponse::ok(station)))
}

/// Partially update a station
pub async fn update_station(
    State(state): State<AppState>,
    AppPath(id): AppPath<Uuid>,
    AppJson(body): AppJson<UpdateStationRequest>,
) -> Result<ApiResponse<StationDto>, AppError> {
    let command = UpdateStationCommand {
        id,
        name: body.name,
        address: body.address,
        capacity: body.capacity,
        is_active: body.is_active,
    };
    Ok(ApiResponse::ok(state.mediator.send(command).await?))
}

/// Delete a station
pub async fn delete_station(
    State(state): State<AppState>,
    AppPath(id): AppPath<Uuid>,
) -> Result<ApiResponse<bool>, AppError> {
    let deleted = state.mediator.send(DeleteStationCommand { id }).await?;
    Ok(ApiResponse::ok_with_message(deleted, "Station deleted"))
}
