//! Blob storage contract.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::DomainBlob;
use crate::shared::error::AppError;

/// Allocates and resolves stored files.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Allocate a blob for `file_name` in `container_name` and return its id.
    async fn create(&self, file_name: &str, container_name: &str) -> Result<Uuid, AppError>;

    /// Look up a blob by id.
    async fn get(&self, blob_id: Uuid) -> Result<Option<DomainBlob>, AppError>;
}
