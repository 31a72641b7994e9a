//! Application Layer
//!
//! Use cases expressed as commands and queries, dispatched through the
//! [`cqrs::Mediator`]. Handlers talk to the domain through repository and
//! collaborator traits only.

pub mod commands;
pub mod cqrs;
pub mod dto;
pub mod registration;
pub mod queries;
pub mod services;
