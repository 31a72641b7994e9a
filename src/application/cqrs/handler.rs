//! Handler contract.

use async_trait::async_trait;

use super::request::Request;
use crate::shared::error::AppError;

/// Executes a single request type.
///
/// Implementations keep no per-invocation state; collaborators are injected
/// at construction and shared behind `Arc`.
#[async_trait]
pub trait RequestHandler<R: Request>: Send + Sync {
    async fn handle(&self, request: R) -> Result<R::Output, AppError>;
}
