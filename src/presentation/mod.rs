//! Presentation Layer
//!
//! HTTP routes, handlers and middleware. Handlers only translate between
//! HTTP and commands/queries; all use-case logic runs behind the mediator.

pub mod http;
pub mod middleware;
