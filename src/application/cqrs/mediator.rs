//! Mediator
//!
//! Single entry point the transport layer uses to run a use case.

use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use std::time::{Duration, Instant};

use futures::FutureExt;

use super::registry::HandlerRegistry;
use super::request::Request;
use crate::infrastructure::metrics;
use crate::shared::error::AppError;

/// Routes requests to their registered handler.
///
/// Cheap to clone; the registry is shared and never mutated after startup,
/// so lookups take no lock.
#[derive(Clone)]
pub struct Mediator {
    registry: Arc<HandlerRegistry>,
    timeout: Duration,
}

impl Mediator {
    pub fn new(registry: HandlerRegistry, timeout: Duration) -> Self {
        Self {
            registry: Arc::new(registry),
            timeout,
        }
    }

    /// Dispatch `request` to its handler.
    ///
    /// The handler future is dropped when the timeout elapses, which cancels
    /// any collaborator call still in flight. A panicking handler is reported
    /// as `AppError::Internal` instead of tearing down the connection task.
    /// Timeouts and panics are recorded in the dispatch metrics here.
    pub async fn send<R: Request>(&self, request: R) -> Result<R::Output, AppError> {
        let handler = self.registry.resolve::<R>()?;
        let started = Instant::now();

        let guarded = AssertUnwindSafe(handler.handle(request)).catch_unwind();

        let error = match tokio::time::timeout(self.timeout, guarded).await {
            Ok(Ok(result)) => return result,
            Ok(Err(panic)) => {
                tracing::error!(
                    request = R::NAME,
                    panic = %panic_message(&*panic),
                    "Handler panicked"
                );
                AppError::Internal(format!("handler for {} panicked", R::NAME))
            }
            Err(_) => {
                tracing::warn!(
                    request = R::NAME,
                    timeout_ms = self.timeout.as_millis() as u64,
                    "Handler timed out"
                );
                AppError::Timeout(R::NAME.to_string())
            }
        };

        metrics::record_dispatch(R::NAME, error.kind(), started.elapsed().as_secs_f64());
        Err(error)
    }

    pub fn is_registered<R: Request>(&self) -> bool {
        self.registry.contains::<R>()
    }

    pub fn registered_count(&self) -> usize {
        self.registry.len()
    }

    pub fn registry(&self) -> &HandlerRegistry {
        &self.registry
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(s) = payload.downcast_ref::<&'static str>() {
        s
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.as_str()
    } else {
        "unknown panic payload"
    }
}
