//! Shared Utilities
//!
//! Common utilities used across all layers.

pub mod error;
pub mod pagination;
pub mod response;
pub mod validation;

pub use error::{AppError, FieldError};
pub use pagination::Page;
pub use response::ApiResponse;
