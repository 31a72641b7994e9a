//! Station entity and repository trait.
//!
//! Maps to the `stations` table in the database schema.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::error::AppError;

/// A rental station where vehicles are picked up and returned.
///
/// Maps to the `stations` table:
/// - id: UUID PRIMARY KEY
/// - name: VARCHAR(100) NOT NULL UNIQUE
/// - address: VARCHAR(255) NOT NULL
/// - latitude: DOUBLE PRECISION NOT NULL
/// - longitude: DOUBLE PRECISION NOT NULL
/// - capacity: INTEGER NOT NULL
/// - is_active: BOOLEAN NOT NULL DEFAULT TRUE
/// - created_at: TIMESTAMPTZ NOT NULL DEFAULT NOW()
/// - updated_at: TIMESTAMPTZ NOT NULL DEFAULT NOW()
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Station {
    pub id: Uuid,

    /// Display name (unique)
    pub name: String,

    /// Street address
    pub address: String,

    pub latitude: f64,
    pub longitude: f64,

    /// Number of vehicle bays
    pub capacity: i32,

    /// Inactive stations stay listed but accept no rentals
    pub is_active: bool,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Station {
    /// Create a new active station with a fresh id.
    pub fn new(
        name: impl Into<String>,
        address: impl Into<String>,
        latitude: f64,
        longitude: f64,
        capacity: i32,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::now_v7(),
            name: name.into(),
            address: address.into(),
            latitude,
            longitude,
            capacity,
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }

    /// Whether this station passes the name/address filter.
    ///
    /// Both criteria are case-insensitive substring matches; absent criteria match.
    pub fn matches(&self, filter: &StationFilter) -> bool {
        let contains = |haystack: &str, needle: &Option<String>| {
            needle
                .as_ref()
                .map(|n| haystack.to_lowercase().contains(&n.to_lowercase()))
                .unwrap_or(true)
        };

        contains(&self.name, &filter.name) && contains(&self.address, &filter.address)
    }
}

/// Paged station search criteria.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationFilter {
    pub name: Option<String>,
    pub address: Option<String>,
    /// 1-based page number
    pub page: u32,
    pub page_size: u32,
}

/// Repository trait for Station data access operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StationRepository: Send + Sync {
    /// Find a station by id.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Station>, AppError>;

    /// Find a station by exact name.
    async fn find_by_name(&self, name: &str) -> Result<Option<Station>, AppError>;

    /// Return one page of matching stations ordered by `(name, id)` and the total match count.
    async fn search(&self, filter: &StationFilter) -> Result<(Vec<Station>, u64), AppError>;

    /// Create a new station.
    async fn create(&self, station: &Station) -> Result<Station, AppError>;

    /// Persist changes to an existing station.
    async fn update(&self, station: &Station) -> Result<Station, AppError>;

    /// Delete a station. Returns false when nothing was deleted.
    async fn delete(&self, id: Uuid) -> Result<bool, AppError>;
}
