//! Blob store backed by the blob metadata repository.
//!
//! Allocates blob names and records them; moving bytes to object storage is
//! the uploader's job once it knows the blob name.

use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{BlobRepository, BlobStore, DomainBlob};
use crate::shared::error::AppError;

pub struct RepositoryBlobStore {
    blobs: Arc<dyn BlobRepository>,
}

impl RepositoryBlobStore {
    pub fn new(blobs: Arc<dyn BlobRepository>) -> Self {
        Self { blobs }
    }
}

#[async_trait]
impl BlobStore for RepositoryBlobStore {
    async fn create(&self, file_name: &str, container_name: &str) -> Result<Uuid, AppError> {
        let blob = DomainBlob::new(file_name, container_name);
        let created = self.blobs.create(&blob).await?;

        tracing::debug!(
            blob_id = %created.id,
            container = %created.container_name,
            blob_name = %created.blob_name,
            "Blob allocated"
        );

        Ok(created.id)
    }

    async fn get(&self, blob_id: Uuid) -> Result<Option<DomainBlob>, AppError> {
        self.blobs.find_by_id(blob_id).await
    }
}
