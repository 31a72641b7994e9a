//! Blob Repository Implementation
//!
//! PostgreSQL storage for blob metadata.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::{BlobRepository, DomainBlob};
use crate::shared::error::AppError;

/// PostgreSQL implementation of BlobRepository
pub struct PgBlobRepository {
    pool: PgPool,
}

impl PgBlobRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BlobRepository for PgBlobRepository {
    async fn create(&self, blob: &DomainBlob) -> Result<DomainBlob, AppError> {
        sqlx::query_as::<_, DomainBlob>(
            r#"
            INSERT INTO blobs (id, container_name, blob_name, file_name, created_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, container_name, blob_name, file_name, created_at
            "#,
        )
        .bind(blob.id)
        .bind(&blob.container_name)
        .bind(&blob.blob_name)
        .bind(&blob.file_name)
        .bind(blob.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                AppError::Conflict("Blob name already in use".to_string())
            }
            _ => AppError::Database(e),
        })
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<DomainBlob>, AppError> {
        let blob = sqlx::query_as::<_, DomainBlob>(
            r#"
            SELECT id, container_name, blob_name, file_name, created_at
            FROM blobs
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(blob)
    }
}
