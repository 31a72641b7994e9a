//! Station management commands.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use crate::application::cqrs::{Request, RequestHandler, RequestKind};
use crate::application::dto::StationDto;
use crate::domain::{Station, StationRepository};
use crate::shared::error::AppError;
use crate::shared::validation::not_blank;

/// `POST /stations`
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateStationCommand {
    #[validate(
        length(min = 1, max = 100, message = "Name must be 1-100 characters"),
        custom(function = "not_blank")
    )]
    pub name: String,

    #[validate(
        length(min = 1, max = 255, message = "Address must be 1-255 characters"),
        custom(function = "not_blank")
    )]
    pub address: String,

    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude: f64,

    #[validate(range(min = -180.0, max = 180.0))]
    pub longitude: f64,

    #[validate(range(min = 1, max = 10000))]
    pub capacity: i32,
}

impl Request for CreateStationCommand {
    type Output = StationDto;
    const NAME: &'static str = "CreateStationCommand";
    const KIND: RequestKind = RequestKind::Command;
}

pub struct CreateStationHandler {
    stations: Arc<dyn StationRepository>,
}

impl CreateStationHandler {
    pub fn new(stations: Arc<dyn StationRepository>) -> Self {
        Self { stations }
    }
}

#[async_trait]
impl RequestHandler<CreateStationCommand> for CreateStationHandler {
    async fn handle(&self, command: CreateStationCommand) -> Result<StationDto, AppError> {
        let name = command.name.trim();
        if self.stations.find_by_name(name).await?.is_some() {
            return Err(AppError::Conflict(format!("Station '{}' already exists", name)));
        }

        let station = Station::new(
            name,
            command.address.trim(),
            command.latitude,
            command.longitude,
            command.capacity,
        );
        let station = self.stations.create(&station).await?;

        tracing::info!(station_id = %station.id, "Station created");
        Ok(station.into())
    }
}

/// `PATCH /stations/{id}`; absent fields keep their value.
#[derive(Debug, Clone, Validate)]
pub struct UpdateStationCommand {
    pub id: Uuid,

    #[validate(
        length(min = 1, max = 100, message = "Name must be 1-100 characters"),
        custom(function = "not_blank")
    )]
    pub name: Option<String>,

    #[validate(
        length(min = 1, max = 255, message = "Address must be 1-255 characters"),
        custom(function = "not_blank")
    )]
    pub address: Option<String>,

    #[validate(range(min = 1, max = 10000))]
    pub capacity: Option<i32>,

    pub is_active: Option<bool>,
}

impl Request for UpdateStationCommand {
    type Output = StationDto;
    const NAME: &'static str = "UpdateStationCommand";
    const KIND: RequestKind = RequestKind::Command;
}

pub struct UpdateStationHandler {
    stations: Arc<dyn StationRepository>,
}

impl UpdateStationHandler {
    pub fn new(stations: Arc<dyn StationRepository>) -> Self {
        Self { stations }
    }
}

#[async_trait]
impl RequestHandler<UpdateStationCommand> for UpdateStationHandler {
    async fn handle(&self, command: UpdateStationCommand) -> Result<StationDto, AppError> {
        let mut station = self
            .stations
            .find_by_id(command.id)
            .await?
            .ok_or_else(|| AppError::NotFound("Station not found".into()))?;

        if let Some(name) = command.name {
            let name = name.trim().to_string();
            if name != station.name {
                if let Some(other) = self.stations.find_by_name(&name).await? {
                    if other.id != station.id {
                        return Err(AppError::Conflict(format!(
                            "Station '{}' already exists",
                            name
                        )));
                    }
                }
                station.name = name;
            }
        }
        if let Some(address) = command.address {
            station.address = address.trim().to_string();
        }
        if let Some(capacity) = command.capacity {
            station.capacity = capacity;
        }
        if let Some(is_active) = command.is_active {
            station.is_active = is_active;
        }
        station.updated_at = Utc::now();

        Ok(self.stations.update(&station).await?.into())
    }
}

/// `DELETE /stations/{id}`
#[derive(Debug, Clone, Validate)]
pub struct DeleteStationCommand {
    pub id: Uuid,
}

impl Request for DeleteStationCommand {
    type Output = bool;
    const NAME: &'static str = "DeleteStationCommand";
    const KIND: RequestKind = RequestKind::Command;
}

pub struct DeleteStationHandler {
    stations: Arc<dyn StationRepository>,
}

impl DeleteStationHandler {
    pub fn new(stations: Arc<dyn StationRepository>) -> Self {
        Self { stations }
    }
}

#[async_trait]
impl RequestHandler<DeleteStationCommand> for DeleteStationHandler {
    async fn handle(&self, command: DeleteStationCommand) -> Result<bool, AppError> {
        if !self.stations.delete(command.id).await? {
            return Err(AppError::NotFound("Station not found".into()));
        }

        tracing::info!(station_id = %command.id, "Station deleted");
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use mockall::predicate::eq;
    use test_case::test_case;

    use super::*;
    use crate::domain::MockStationRepository;
    use crate::shared::validation;

    fn create(latitude: f64, longitude: f64, capacity: i32) -> CreateStationCommand {
        CreateStationCommand {
            name: "Central".into(),
            address: "1 Main St".into(),
            latitude,
            longitude,
            capacity,
        }
    }

    #[test_case(52.37, 4.89, 10, true ; "valid")]
    #[test_case(91.0, 4.89, 10, false ; "latitude out of range")]
    #[test_case(52.37, -180.5, 10, false ; "longitude out of range")]
    #[test_case(52.37, 4.89, 0, false ; "zero capacity")]
    fn test_create_rules(lat: f64, lon: f64, capacity: i32, ok: bool) {
        assert_eq!(validation::validate(&create(lat, lon, capacity)).is_ok(), ok);
    }

    #[test_case("Central", "1 Main St", true ; "named")]
    #[test_case("   ", "1 Main St", false ; "blank name")]
    #[test_case("Central", " \t ", false ; "blank address")]
    fn test_create_text_rules(name: &str, address: &str, ok: bool) {
        let mut command = create(52.37, 4.89, 10);
        command.name = name.into();
        command.address = address.into();
        assert_eq!(validation::validate(&command).is_ok(), ok);
    }

    #[test]
    fn test_update_rejects_blank_name() {
        let command = UpdateStationCommand {
            id: Uuid::new_v4(),
            name: Some("  ".into()),
            address: None,
            capacity: None,
            is_active: None,
        };
        assert!(validation::validate(&command).is_err());
    }

    #[tokio::test]
    async fn test_create_rejects_duplicate_name() {
        let existing = Station::new("Central", "elsewhere", 0.0, 0.0, 3);
        let mut repo = MockStationRepository::new();
        repo.expect_find_by_name()
            .withf(|name| name == "Central")
            .returning(move |_| Ok(Some(existing.clone())));
        repo.expect_create().never();

        let err = CreateStationHandler::new(Arc::new(repo))
            .handle(create(1.0, 1.0, 5))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
    }

    #[tokio::test]
    async fn test_create_persists_station() {
        let mut repo = MockStationRepository::new();
        repo.expect_find_by_name().returning(|_| Ok(None));
        repo.expect_create().times(1).returning(|s| Ok(s.clone()));

        let dto = CreateStationHandler::new(Arc::new(repo))
            .handle(create(52.37, 4.89, 12))
            .await
            .unwrap();
        assert_eq!(dto.name, "Central");
        assert_eq!(dto.capacity, 12);
        assert!(dto.is_active);
    }

    #[tokio::test]
    async fn test_update_applies_present_fields_only() {
        let station = Station::new("Central", "1 Main St", 1.0, 2.0, 5);
        let id = station.id;

        let mut repo = MockStationRepository::new();
        repo.expect_find_by_id()
            .with(eq(id))
            .returning(move |_| Ok(Some(station.clone())));
        repo.expect_update().returning(|s| Ok(s.clone()));

        let dto = UpdateStationHandler::new(Arc::new(repo))
            .handle(UpdateStationCommand {
                id,
                name: None,
                address: None,
                capacity: Some(20),
                is_active: Some(false),
            })
            .await
            .unwrap();

        assert_eq!(dto.name, "Central");
        assert_eq!(dto.capacity, 20);
        assert!(!dto.is_active);
    }

    #[tokio::test]
    async fn test_update_missing_station() {
        let mut repo = MockStationRepository::new();
        repo.expect_find_by_id().returning(|_| Ok(None));

        let err = UpdateStationHandler::new(Arc::new(repo))
            .handle(UpdateStationCommand {
                id: Uuid::new_v4(),
                name: Some("Renamed".into()),
                address: None,
                capacity: None,
                is_active: None,
            })
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_delete_missing_station() {
        let mut repo = MockStationRepository::new();
        repo.expect_delete().returning(|_| Ok(false));

        let err = DeleteStationHandler::new(Arc::new(repo))
            .handle(DeleteStationCommand { id: Uuid::new_v4() })
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }
}
