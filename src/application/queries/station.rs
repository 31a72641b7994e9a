//! Station lookups.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use crate::application::cqrs::{Request, RequestHandler, RequestKind};
use crate::application::dto::StationDto;
use crate::domain::{StationFilter, StationRepository};
use crate::shared::error::AppError;
use crate::shared::pagination::{Page, DEFAULT_PAGE_SIZE};

fn default_page() -> u32 {
    1
}

fn default_page_size() -> u32 {
    DEFAULT_PAGE_SIZE
}

/// `GET /stations?name&address&page&pageSize`
///
/// Name and address match case-insensitively anywhere in the field. Results
/// are ordered by name, then id, so paging is stable.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct GetStationsQuery {
    #[validate(length(max = 100))]
    pub name: Option<String>,

    #[validate(length(max = 255))]
    pub address: Option<String>,

    #[serde(default = "default_page")]
    #[validate(range(min = 1, message = "Page must be at least 1"))]
    pub page: u32,

    #[serde(default = "default_page_size")]
    #[validate(range(min = 1, max = 100, message = "Page size must be 1-100"))]
    pub page_size: u32,
}

impl Request for GetStationsQuery {
    type Output = Page<StationDto>;
    const NAME: &'static str = "GetStationsQuery";
    const KIND: RequestKind = RequestKind::Query;
}

pub struct GetStationsHandler {
    stations: Arc<dyn StationRepository>,
}

impl GetStationsHandler {
    pub fn new(stations: Arc<dyn StationRepository>) -> Self {
        Self { stations }
    }
}

#[async_trait]
impl RequestHandler<GetStationsQuery> for GetStationsHandler {
    async fn handle(&self, query: GetStationsQuery) -> Result<Page<StationDto>, AppError> {
        let blank_to_none = |s: Option<String>| s.map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let filter = StationFilter {
            name: blank_to_none(query.name),
            address: blank_to_none(query.address),
            page: query.page,
            page_size: query.page_size,
        };

        let (stations, total) = self.stations.search(&filter).await?;

        Ok(Page::new(stations, filter.page, filter.page_size, total).map(StationDto::from))
    }
}

/// `GET /stations/{id}`
#[derive(Debug, Clone, Validate)]
pub struct GetStationByIdQuery {
    pub id: Uuid,
}

impl Request for GetStationByIdQuery {
    type Output = StationDto;
    const NAME: &'static str = "GetStationByIdQuery";
    const KIND: RequestKind = RequestKind::Query;
}

pub struct GetStationByIdHandler {
    stations: Arc<dyn StationRepository>,
}

impl GetStationByIdHandler {
    pub fn new(stations: Arc<dyn StationRepository>) -> Self {
        Self { stations }
    }
}

#[async_trait]
impl RequestHandler<GetStationByIdQuery> for GetStationByIdHandler {
    async fn handle(&self, query: GetStationByIdQuery) -> Result<StationDto, AppError> {
        self.stations
            .find_by_id(query.id)
            .await?
            .map(StationDto::from)
            .ok_or_else(|| AppError::NotFound("Station not found".into()))
    }
}
