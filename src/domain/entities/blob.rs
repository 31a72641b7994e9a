//! Blob metadata entity and repository trait.
//!
//! Maps to the `blobs` table. File bytes live in external storage; only the
//! location is recorded here.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::error::AppError;

/// Location of a stored file.
///
/// Maps to the `blobs` table:
/// - id: UUID PRIMARY KEY
/// - container_name: VARCHAR(63) NOT NULL
/// - blob_name: VARCHAR(1024) NOT NULL
/// - file_name: VARCHAR(255) NOT NULL (original upload name)
/// - created_at: TIMESTAMPTZ NOT NULL DEFAULT NOW()
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct DomainBlob {
    pub id: Uuid,
    pub container_name: String,
    pub blob_name: String,
    pub file_name: String,
    pub created_at: DateTime<Utc>,
}

impl DomainBlob {
    /// Allocate a blob inside `container_name` for an upload called `file_name`.
    ///
    /// The blob name is prefixed with the id so equal file names never collide.
    pub fn new(file_name: impl Into<String>, container_name: impl Into<String>) -> Self {
        let id = Uuid::now_v7();
        let file_name = file_name.into();
        let blob_name = format!("{}/{}", id, sanitize_file_name(&file_name));

        Self {
            id,
            container_name: container_name.into(),
            blob_name,
            file_name,
            created_at: Utc::now(),
        }
    }
}

/// Replace path separators and other unsafe characters with `_`.
fn sanitize_file_name(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                c
            } else {
                '_'
            }
        })
        .collect()
}

/// Repository trait for blob metadata.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BlobRepository: Send + Sync {
    /// Record a new blob.
    async fn create(&self, blob: &DomainBlob) -> Result<DomainBlob, AppError>;

    /// Find a blob by id.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<DomainBlob>, AppError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blob_name_is_sanitized_and_unique() {
        let a = DomainBlob::new("../etc/passwd", "kyc-documents");
        let b = DomainBlob::new("../etc/passwd", "kyc-documents");

        assert_eq!(a.blob_name, format!("{}/.._etc_passwd", a.id));
        assert_eq!(a.blob_name.matches('/').count(), 1);
        assert_ne!(a.blob_name, b.blob_name);
        assert_eq!(a.file_name, "../etc/passwd");
    }
}
