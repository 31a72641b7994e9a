//! Renter Repository Implementation
//!
//! PostgreSQL implementation of [`RenterRepository`]. KYC status is stored as
//! its lowercase name.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::{KycStatus, RenterProfile, RenterRepository};
use crate::shared::error::AppError;

/// Database row representation of a renter
#[derive(Debug, sqlx::FromRow)]
struct RenterRow {
    id: Uuid,
    email: String,
    password_hash: String,
    full_name: String,
    phone_number: Option<String>,
    driver_license_number: Option<String>,
    kyc_status: String,
    kyc_document_blob_id: Option<Uuid>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl RenterRow {
    fn into_renter(self) -> RenterProfile {
        RenterProfile {
            id: self.id,
            email: self.email,
            password_hash: self.password_hash,
            full_name: self.full_name,
            phone_number: self.phone_number,
            driver_license_number: self.driver_license_number,
            kyc_status: KycStatus::from_str(&self.kyc_status),
            kyc_document_blob_id: self.kyc_document_blob_id,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

const RENTER_COLUMNS: &str = "id, email, password_hash, full_name, phone_number, \
     driver_license_number, kyc_status, kyc_document_blob_id, created_at, updated_at";

/// PostgreSQL implementation of RenterRepository
pub struct PgRenterRepository {
    pool: PgPool,
}

impl PgRenterRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RenterRepository for PgRenterRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<RenterProfile>, AppError> {
        let row = sqlx::query_as::<_, RenterRow>(&format!(
            "SELECT {RENTER_COLUMNS} FROM renters WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(RenterRow::into_renter))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<RenterProfile>, AppError> {
        let row = sqlx::query_as::<_, RenterRow>(&format!(
            "SELECT {RENTER_COLUMNS} FROM renters WHERE email = $1"
        ))
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(RenterRow::into_renter))
    }

    async fn email_exists(&self, email: &str) -> Result<bool, AppError> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM renters WHERE email = $1)")
                .bind(email)
                .fetch_one(&self.pool)
                .await?;

        Ok(exists)
    }

    async fn create(&self, renter: &RenterProfile) -> Result<RenterProfile, AppError> {
        let row = sqlx::query_as::<_, RenterRow>(&format!(
            r#"
            INSERT INTO renters (id, email, password_hash, full_name, phone_number,
                                 driver_license_number, kyc_status, kyc_document_blob_id,
                                 created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING {RENTER_COLUMNS}
            "#
        ))
        .bind(renter.id)
        .bind(&renter.email)
        .bind(&renter.password_hash)
        .bind(&renter.full_name)
        .bind(&renter.phone_number)
        .bind(&renter.driver_license_number)
        .bind(renter.kyc_status.as_str())
        .bind(renter.kyc_document_blob_id)
        .bind(renter.created_at)
        .bind(renter.updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                AppError::Conflict("Email already registered".to_string())
            }
            _ => AppError::Database(e),
        })?;

        Ok(row.into_renter())
    }

    async fn update(&self, renter: &RenterProfile) -> Result<RenterProfile, AppError> {
        let row = sqlx::query_as::<_, RenterRow>(&format!(
            r#"
            UPDATE renters
            SET full_name = $2, phone_number = $3, driver_license_number = $4,
                kyc_status = $5, kyc_document_blob_id = $6, updated_at = $7
            WHERE id = $1
            RETURNING {RENTER_COLUMNS}
            "#
        ))
        .bind(renter.id)
        .bind(&renter.full_name)
        .bind(&renter.phone_number)
        .bind(&renter.driver_license_number)
        .bind(renter.kyc_status.as_str())
        .bind(renter.kyc_document_blob_id)
        .bind(renter.updated_at)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Renter not found".into()))?;

        Ok(row.into_renter())
    }
}
