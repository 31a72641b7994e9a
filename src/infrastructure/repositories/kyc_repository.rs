//! KYC Verification Repository Implementation
//!
//! Append-only audit table; records are never updated or deleted. A decision
//! and the renter's status change commit in the same transaction.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::{KycStatus, KycVerification, KycVerificationRepository, VerificationMethod};
use crate::shared::error::AppError;

#[derive(Debug, sqlx::FromRow)]
struct KycVerificationRow {
    id: Uuid,
    renter_id: Uuid,
    is_verified: bool,
    verified_by: Uuid,
    notes: Option<String>,
    method: String,
    created_at: DateTime<Utc>,
}

impl KycVerificationRow {
    fn into_record(self) -> KycVerification {
        if self.method != VerificationMethod::InPerson.as_str() {
            tracing::warn!(id = %self.id, method = %self.method, "Unknown verification method");
        }

        KycVerification {
            id: self.id,
            renter_id: self.renter_id,
            is_verified: self.is_verified,
            verified_by: self.verified_by,
            notes: self.notes,
            method: VerificationMethod::InPerson,
            created_at: self.created_at,
        }
    }
}

/// PostgreSQL implementation of KycVerificationRepository
pub struct PgKycVerificationRepository {
    pool: PgPool,
}

impl PgKycVerificationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl KycVerificationRepository for PgKycVerificationRepository {
    async fn record_decision(
        &self,
        record: &KycVerification,
        status: KycStatus,
    ) -> Result<KycVerification, AppError> {
        let mut tx = self.pool.begin().await?;

        let updated = sqlx::query(
            r#"
            UPDATE renters
            SET kyc_status = $2, updated_at = $3
            WHERE id = $1
            "#,
        )
        .bind(record.renter_id)
        .bind(status.as_str())
        .bind(record.created_at)
        .execute(&mut *tx)
        .await?;

        if updated.rows_affected() == 0 {
            return Err(AppError::NotFound("Renter not found".into()));
        }

        let row = sqlx::query_as::<_, KycVerificationRow>(
            r#"
            INSERT INTO kyc_verifications (id, renter_id, is_verified, verified_by, notes, method, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, renter_id, is_verified, verified_by, notes, method, created_at
            "#,
        )
        .bind(record.id)
        .bind(record.renter_id)
        .bind(record.is_verified)
        .bind(record.verified_by)
        .bind(&record.notes)
        .bind(record.method.as_str())
        .bind(record.created_at)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(row.into_record())
    }

    /// Oldest first.
    async fn find_by_renter(&self, renter_id: Uuid) -> Result<Vec<KycVerification>, AppError> {
        let rows = sqlx::query_as::<_, KycVerificationRow>(
            r#"
            SELECT id, renter_id, is_verified, verified_by, notes, method, created_at
            FROM kyc_verifications
            WHERE renter_id = $1
            ORDER BY created_at ASC, id ASC
            "#,
        )
        .bind(renter_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(KycVerificationRow::into_record).collect())
    }
}
