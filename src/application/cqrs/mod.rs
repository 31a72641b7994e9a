//! # Request Dispatch
//!
//! Commands and queries are plain values implementing [`Request`]. Each request
//! type has exactly one [`RequestHandler`], registered once at startup in a
//! [`HandlerRegistry`]. The [`Mediator`] resolves the handler for a request and
//! runs it under a timeout and panic guard.
//!
//! ```text
//! Mediator::send(request)
//!   -> HandlerRegistry::resolve::<R>()
//!   -> LoggingHandler      (span, duration, metrics)
//!   -> ValidatingHandler   (validator rules on the request)
//!   -> concrete handler
//! ```
//!
//! Cross-cutting behaviour lives in the decorators so handlers stay limited to
//! their single use case.

mod handler;
mod mediator;
mod pipeline;
mod registry;
mod request;

pub use handler::RequestHandler;
pub use mediator::Mediator;
pub use pipeline::{LoggingHandler, ValidatingHandler};
pub use registry::{HandlerRegistry, HandlerRegistryBuilder};
pub use request::{Request, RequestKind};
