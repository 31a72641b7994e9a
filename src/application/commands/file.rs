//! File upload command.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::application::cqrs::{Request, RequestHandler, RequestKind};
use crate::domain::BlobStore;
use crate::shared::error::AppError;
use crate::shared::validation::not_blank;

/// Container names follow object-store bucket rules: lowercase letters,
/// digits and hyphens, starting and ending with an alphanumeric.
fn container_name_rules(name: &str) -> Result<(), ValidationError> {
    let allowed = name
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-');
    let edges_ok = name
        .chars()
        .next()
        .zip(name.chars().last())
        .map(|(first, last)| first != '-' && last != '-')
        .unwrap_or(false);

    if allowed && edges_ok && !name.contains("--") {
        Ok(())
    } else {
        let mut err = ValidationError::new("container_name");
        err.message = Some(
            "Container name may only contain lowercase letters, digits and single hyphens".into(),
        );
        Err(err)
    }
}

/// `POST /files`: reserve a blob for an upload.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UploadFileCommand {
    #[validate(
        length(min = 1, max = 255, message = "File name must be 1-255 characters"),
        custom(function = "not_blank")
    )]
    pub file_name: String,

    #[validate(
        length(min = 3, max = 63, message = "Container name must be 3-63 characters"),
        custom(function = "container_name_rules")
    )]
    pub container_name: String,
}

impl Request for UploadFileCommand {
    type Output = Uuid;
    const NAME: &'static str = "UploadFileCommand";
    const KIND: RequestKind = RequestKind::Command;
}

pub struct UploadFileHandler {
    blobs: Arc<dyn BlobStore>,
}

impl UploadFileHandler {
    pub fn new(blobs: Arc<dyn BlobStore>) -> Self {
        Self { blobs }
    }
}

#[async_trait]
impl RequestHandler<UploadFileCommand> for UploadFileHandler {
    async fn handle(&self, command: UploadFileCommand) -> Result<Uuid, AppError> {
        self.blobs
            .create(&command.file_name, &command.container_name)
            .await
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;
    use crate::domain::MockBlobStore;
    use crate::shared::validation;

    #[test_case("kyc-documents", true)]
    #[test_case("a1b", true)]
    #[test_case("ab", false ; "too short")]
    #[test_case("KYC", false ; "uppercase")]
    #[test_case("-kyc", false ; "leading hyphen")]
    #[test_case("kyc--docs", false ; "double hyphen")]
    #[test_case("kyc_docs", false ; "underscore")]
    fn test_container_names(container: &str, ok: bool) {
        let command = UploadFileCommand {
            file_name: "passport.jpg".into(),
            container_name: container.into(),
        };
        assert_eq!(validation::validate(&command).is_ok(), ok);
    }

    #[tokio::test]
    async fn test_upload_returns_blob_id() {
        let id = Uuid::new_v4();
        let mut blobs = MockBlobStore::new();
        blobs
            .expect_create()
            .withf(|file, container| file == "passport.jpg" && container == "kyc-documents")
            .times(1)
            .returning(move |_, _| Ok(id));

        let blob_id = UploadFileHandler::new(Arc::new(blobs))
            .handle(UploadFileCommand {
                file_name: "passport.jpg".into(),
                container_name: "kyc-documents".into(),
            })
            .await
            .unwrap();
        assert_eq!(blob_id, id);
    }
}
