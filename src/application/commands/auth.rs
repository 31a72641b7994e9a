//! Registration and login.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use validator::Validate;

use crate::application::cqrs::{Request, RequestHandler, RequestKind};
use crate::application::dto::AuthTokensDto;
use crate::application::services::password;
use crate::domain::{Identity, RenterProfile, RenterRepository, TokenService};
use crate::shared::error::AppError;
use crate::shared::validation::not_blank;

/// `POST /auth/register`
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRenterCommand {
    #[serde(deserialize_with = "crate::shared::validation::trimmed")]
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 8, max = 128, message = "Password must be 8-128 characters"))]
    pub password: String,

    #[validate(
        length(min = 1, max = 100, message = "Full name must be 1-100 characters"),
        custom(function = "not_blank")
    )]
    pub full_name: String,

    #[validate(length(max = 32))]
    pub phone_number: Option<String>,
}

impl Request for RegisterRenterCommand {
    type Output = AuthTokensDto;
    const NAME: &'static str = "RegisterRenterCommand";
    const KIND: RequestKind = RequestKind::Command;
}

pub struct RegisterRenterHandler {
    renters: Arc<dyn RenterRepository>,
    tokens: Arc<dyn TokenService>,
}

impl RegisterRenterHandler {
    pub fn new(renters: Arc<dyn RenterRepository>, tokens: Arc<dyn TokenService>) -> Self {
        Self { renters, tokens }
    }
}

#[async_trait]
impl RequestHandler<RegisterRenterCommand> for RegisterRenterHandler {
    async fn handle(&self, command: RegisterRenterCommand) -> Result<AuthTokensDto, AppError> {
        let email = command.email.trim().to_lowercase();

        if self.renters.email_exists(&email).await? {
            return Err(AppError::Conflict("Email already registered".into()));
        }

        let password_hash = password::hash_password(command.password).await?;
        let renter = RenterProfile::new(
            email,
            password_hash,
            command.full_name.trim(),
            command.phone_number,
        );
        let renter = self.renters.create(&renter).await?;

        tracing::info!(renter_id = %renter.id, "Renter registered");

        let tokens = self.tokens.issue(&Identity {
            subject: renter.id,
            email: renter.email,
        })?;

        Ok(tokens.into())
    }
}

/// `POST /auth/login`
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct LoginCommand {
    #[serde(deserialize_with = "crate::shared::validation::trimmed")]
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

impl Request for LoginCommand {
    type Output = AuthTokensDto;
    const NAME: &'static str = "LoginCommand";
    const KIND: RequestKind = RequestKind::Command;
}

pub struct LoginHandler {
    renters: Arc<dyn RenterRepository>,
    tokens: Arc<dyn TokenService>,
}

impl LoginHandler {
    pub fn new(renters: Arc<dyn RenterRepository>, tokens: Arc<dyn TokenService>) -> Self {
        Self { renters, tokens }
    }
}

#[async_trait]
impl RequestHandler<LoginCommand> for LoginHandler {
    async fn handle(&self, command: LoginCommand) -> Result<AuthTokensDto, AppError> {
        let invalid = || AppError::Unauthorized("Invalid credentials".into());

        let email = command.email.trim().to_lowercase();
        let renter = self
            .renters
            .find_by_email(&email)
            .await?
            .ok_or_else(invalid)?;

        if !password::verify_password(command.password, renter.password_hash.clone()).await? {
            tracing::debug!(renter_id = %renter.id, "Password mismatch");
            return Err(invalid());
        }

        let tokens = self.tokens.issue(&Identity {
            subject: renter.id,
            email: renter.email,
        })?;

        Ok(tokens.into())
    }
}
