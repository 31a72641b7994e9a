//! Token issuance contract.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::error::AppError;

/// The authenticated principal a token is issued for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub subject: Uuid,
    pub email: String,
}

/// Token pair handed to a client after login or registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthTokens {
    pub access_token: String,
    pub access_token_expiry: DateTime<Utc>,
    pub refresh_token: String,
    pub refresh_token_expiry: DateTime<Utc>,
}

/// Issues and checks access tokens.
#[cfg_attr(test, mockall::automock)]
pub trait TokenService: Send + Sync {
    /// Issue a fresh token pair for `identity`.
    fn issue(&self, identity: &Identity) -> Result<AuthTokens, AppError>;

    /// Validate an access token and return the identity it was issued for.
    fn verify(&self, access_token: &str) -> Result<Identity, AppError>;
}
