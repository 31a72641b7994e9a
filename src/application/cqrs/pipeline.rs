//! Pipeline decorators wrapped around every registered handler.

use std::time::Instant;

use async_trait::async_trait;
use tracing::Instrument;

use super::handler::RequestHandler;
use super::request::Request;
use crate::infrastructure::metrics;
use crate::shared::error::AppError;
use crate::shared::validation;

/// Rejects requests that break their declarative rules before the handler runs.
pub struct ValidatingHandler<H> {
    inner: H,
}

impl<H> ValidatingHandler<H> {
    pub fn new(inner: H) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl<R, H> RequestHandler<R> for ValidatingHandler<H>
where
    R: Request,
    H: RequestHandler<R>,
{
    async fn handle(&self, request: R) -> Result<R::Output, AppError> {
        validation::validate(&request)?;
        self.inner.handle(request).await
    }
}

/// Runs the inner handler inside a tracing span and records its outcome.
pub struct LoggingHandler<H> {
    inner: H,
}

impl<H> LoggingHandler<H> {
    pub fn new(inner: H) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl<R, H> RequestHandler<R> for LoggingHandler<H>
where
    R: Request,
    H: RequestHandler<R>,
{
    async fn handle(&self, request: R) -> Result<R::Output, AppError> {
        let span = tracing::info_span!("dispatch", request = R::NAME, kind = R::KIND.as_str());
        let started = Instant::now();

        let result = self.inner.handle(request).instrument(span.clone()).await;

        let elapsed = started.elapsed();
        let outcome = match &result {
            Ok(_) => "ok",
            Err(e) => e.kind(),
        };

        span.in_scope(|| match &result {
            Ok(_) => tracing::debug!(elapsed_ms = elapsed.as_millis() as u64, "Request handled"),
            Err(e) if e.status_code().is_server_error() => {
                tracing::error!(elapsed_ms = elapsed.as_millis() as u64, error = %e, "Request failed")
            }
            Err(e) => {
                tracing::info!(elapsed_ms = elapsed.as_millis() as u64, error = %e, "Request rejected")
            }
        });

        metrics::record_dispatch(R::NAME, outcome, elapsed.as_secs_f64());

        result
    }
}
