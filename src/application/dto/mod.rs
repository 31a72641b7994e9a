//! Data Transfer Objects
//!
//! DTOs for API request/response serialization. Response DTOs are what
//! handlers return inside the envelope; request DTOs carry the body of
//! endpoints whose command also needs path or token data.

pub mod request;
pub mod response;

pub use request::*;
pub use response::*;
