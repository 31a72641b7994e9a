//! JWT Token Service
//!
//! Signs short-lived HS256 access tokens and hands out opaque refresh tokens.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::JwtSettings;
use crate::domain::{AuthTokens, Identity, TokenService};
use crate::shared::error::AppError;

/// JWT claims structure
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (renter ID)
    pub sub: String,
    pub email: String,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
    /// Issued at time (Unix timestamp)
    pub iat: i64,
    /// JWT ID for token revocation tracking
    pub jti: String,
}

/// [`TokenService`] backed by `jsonwebtoken`.
pub struct JwtTokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    settings: JwtSettings,
}

impl JwtTokenService {
    pub fn new(settings: JwtSettings) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(settings.secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(settings.secret.as_bytes()),
            settings,
        }
    }
}

impl TokenService for JwtTokenService {
    fn issue(&self, identity: &Identity) -> Result<AuthTokens, AppError> {
        let now = Utc::now();
        let access_token_expiry = now + Duration::minutes(self.settings.access_token_expiry_minutes);
        let refresh_token_expiry = now + Duration::days(self.settings.refresh_token_expiry_days);

        let claims = Claims {
            sub: identity.subject.to_string(),
            email: identity.email.clone(),
            exp: access_token_expiry.timestamp(),
            iat: now.timestamp(),
            jti: Uuid::new_v4().to_string(),
        };

        let access_token = encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::Internal(format!("Token generation failed: {}", e)))?;

        // Opaque: carries no user information
        let refresh_token = format!("{}.{}", Uuid::new_v4(), Uuid::new_v4());

        Ok(AuthTokens {
            access_token,
            access_token_expiry,
            refresh_token,
            refresh_token_expiry,
        })
    }

    fn verify(&self, access_token: &str) -> Result<Identity, AppError> {
        let token_data = decode::<Claims>(access_token, &self.decoding_key, &Validation::default())
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                    AppError::Unauthorized("Token expired".into())
                }
                _ => AppError::Unauthorized("Invalid token".into()),
            })?;

        let subject = token_data
            .claims
            .sub
            .parse::<Uuid>()
            .map_err(|_| AppError::Unauthorized("Invalid token claims".into()))?;

        Ok(Identity {
            subject,
            email: token_data.claims.email,
        })
    }
}
