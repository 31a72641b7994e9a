//! Station Repository Implementation
//!
//! PostgreSQL implementation of [`StationRepository`].

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::{Station, StationFilter, StationRepository};
use crate::shared::error::AppError;
use crate::shared::pagination;

const STATION_COLUMNS: &str =
    "id, name, address, latitude, longitude, capacity, is_active, created_at, updated_at";

/// `%needle%` with LIKE metacharacters escaped.
pub(crate) fn contains_pattern(needle: &str) -> String {
    let mut pattern = String::with_capacity(needle.len() + 2);
    pattern.push('%');
    for c in needle.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

fn map_unique_violation(e: sqlx::Error) -> AppError {
    match &e {
        sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
            AppError::Conflict("Station with this name already exists".to_string())
        }
        _ => AppError::Database(e),
    }
}

/// PostgreSQL implementation of StationRepository
pub struct PgStationRepository {
    pool: PgPool,
}

impl PgStationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StationRepository for PgStationRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Station>, AppError> {
        let station = sqlx::query_as::<_, Station>(&format!(
            "SELECT {STATION_COLUMNS} FROM stations WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(station)
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Station>, AppError> {
        let station = sqlx::query_as::<_, Station>(&format!(
            "SELECT {STATION_COLUMNS} FROM stations WHERE name = $1"
        ))
        .bind(name)
        .fetch_optional(&self.pool)
        .await?;

        Ok(station)
    }

    /// Case-insensitive substring search, ordered by (name, id).
    async fn search(&self, filter: &StationFilter) -> Result<(Vec<Station>, u64), AppError> {
        let name = filter.name.as_deref().map(contains_pattern);
        let address = filter.address.as_deref().map(contains_pattern);

        let stations = sqlx::query_as::<_, Station>(&format!(
            r#"
            SELECT {STATION_COLUMNS}
            FROM stations
            WHERE ($1::text IS NULL OR name ILIKE $1)
              AND ($2::text IS NULL OR address ILIKE $2)
            ORDER BY name ASC, id ASC
            LIMIT $3 OFFSET $4
            "#
        ))
        .bind(&name)
        .bind(&address)
        .bind(i64::from(filter.page_size))
        .bind(pagination::offset(filter.page, filter.page_size) as i64)
        .fetch_all(&self.pool)
        .await?;

        let total: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*)
            FROM stations
            WHERE ($1::text IS NULL OR name ILIKE $1)
              AND ($2::text IS NULL OR address ILIKE $2)
            "#,
        )
        .bind(&name)
        .bind(&address)
        .fetch_one(&self.pool)
        .await?;

        Ok((stations, total.max(0) as u64))
    }

    async fn create(&self, station: &Station) -> Result<Station, AppError> {
        sqlx::query_as::<_, Station>(&format!(
            r#"
            INSERT INTO stations (id, name, address, latitude, longitude, capacity, is_active, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING {STATION_COLUMNS}
            "#
        ))
        .bind(station.id)
        .bind(&station.name)
        .bind(&station.address)
        .bind(station.latitude)
        .bind(station.longitude)
        .bind(station.capacity)
        .bind(station.is_active)
        .bind(station.created_at)
        .bind(station.updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_unique_violation)
    }

    async fn update(&self, station: &Station) -> Result<Station, AppError> {
        sqlx::query_as::<_, Station>(&format!(
            r#"
            UPDATE stations
            SET name = $2, address = $3, latitude = $4, longitude = $5,
                capacity = $6, is_active = $7, updated_at = $8
            WHERE id = $1
            RETURNING {STATION_COLUMNS}
            "#
        ))
        .bind(station.id)
        .bind(&station.name)
        .bind(&station.address)
        .bind(station.latitude)
        .bind(station.longitude)
        .bind(station.capacity)
        .bind(station.is_active)
        .bind(station.updated_at)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_unique_violation)?
        .ok_or_else(|| AppError::NotFound("Station not found".into()))
    }

    async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM stations WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
