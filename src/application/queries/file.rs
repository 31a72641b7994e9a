//! File metadata lookup.

use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;
use validator::Validate;

use crate::application::cqrs::{Request, RequestHandler, RequestKind};
use crate::application::dto::DomainBlobDto;
use crate::domain::BlobStore;
use crate::shared::error::AppError;

/// `GET /files/{id}`
#[derive(Debug, Clone, Validate)]
pub struct GetFileQuery {
    pub blob_id: Uuid,
}

impl Request for GetFileQuery {
    type Output = DomainBlobDto;
    const NAME: &'static str = "GetFileQuery";
    const KIND: RequestKind = RequestKind::Query;
}

pub struct GetFileHandler {
    blobs: Arc<dyn BlobStore>,
}

impl GetFileHandler {
    pub fn new(blobs: Arc<dyn BlobStore>) -> Self {
        Self { blobs }
    }
}

#[async_trait]
impl RequestHandler<GetFileQuery> for GetFileHandler {
    async fn handle(&self, query: GetFileQuery) -> Result<DomainBlobDto, AppError> {
        self.blobs
            .get(query.blob_id)
            .await?
            .map(DomainBlobDto::from)
            .ok_or_else(|| AppError::NotFound("File not found".into()))
    }
}
