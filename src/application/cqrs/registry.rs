//! Handler Registry
//!
//! Explicit request-type to handler table, built once at startup and
//! read-only afterwards.

use std::any::{Any, TypeId};
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::Arc;

use super::handler::RequestHandler;
use super::pipeline::{LoggingHandler, ValidatingHandler};
use super::request::Request;
use crate::shared::error::AppError;

/// A registered handler with its request type erased.
///
/// `handler` always holds an `Arc<dyn RequestHandler<R>>` for the request
/// type whose `TypeId` keys the entry.
struct Registration {
    name: &'static str,
    handler: Box<dyn Any + Send + Sync>,
}

/// Immutable lookup table from request type to its decorated handler.
pub struct HandlerRegistry {
    handlers: HashMap<TypeId, Registration>,
}

impl HandlerRegistry {
    pub fn builder() -> HandlerRegistryBuilder {
        HandlerRegistryBuilder::default()
    }

    /// Find the handler for `R`.
    pub fn resolve<R: Request>(&self) -> Result<Arc<dyn RequestHandler<R>>, AppError> {
        let registration = self
            .handlers
            .get(&TypeId::of::<R>())
            .ok_or(AppError::NoHandlerRegistered { request: R::NAME })?;

        registration
            .handler
            .downcast_ref::<Arc<dyn RequestHandler<R>>>()
            .cloned()
            .ok_or_else(|| {
                AppError::Configuration(format!(
                    "handler registered for {} does not produce its output type",
                    registration.name
                ))
            })
    }

    pub fn contains<R: Request>(&self) -> bool {
        self.handlers.contains_key(&TypeId::of::<R>())
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Names of all registered request types, sorted.
    pub fn request_names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.handlers.values().map(|r| r.name).collect();
        names.sort_unstable();
        names
    }
}

/// Collects handler registrations and rejects duplicates on [`build`](Self::build).
#[derive(Default)]
pub struct HandlerRegistryBuilder {
    handlers: HashMap<TypeId, Registration>,
    duplicates: Vec<&'static str>,
}

impl HandlerRegistryBuilder {
    /// Register `handler` as the single handler for `R`.
    ///
    /// The handler is wrapped in the logging and validation decorators.
    pub fn register<R, H>(mut self, handler: H) -> Self
    where
        R: Request,
        H: RequestHandler<R> + 'static,
    {
        let decorated: Arc<dyn RequestHandler<R>> =
            Arc::new(LoggingHandler::new(ValidatingHandler::new(handler)));

        match self.handlers.entry(TypeId::of::<R>()) {
            Entry::Occupied(_) => self.duplicates.push(R::NAME),
            Entry::Vacant(slot) => {
                slot.insert(Registration {
                    name: R::NAME,
                    handler: Box::new(decorated),
                });
            }
        }

        self
    }

    /// Finish registration.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Configuration` naming every request type that was
    /// registered more than once.
    pub fn build(self) -> Result<HandlerRegistry, AppError> {
        if !self.duplicates.is_empty() {
            return Err(AppError::Configuration(format!(
                "more than one handler registered for: {}",
                self.duplicates.join(", ")
            )));
        }

        Ok(HandlerRegistry {
            handlers: self.handlers,
        })
    }
}
