//! Authentication Middleware
//!
//! Bearer token validation for protected routes.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    typed_header::TypedHeaderRejection,
    TypedHeader,
};

use crate::presentation::http::extractors::AuthUser;
use crate::shared::error::AppError;
use crate::startup::AppState;

/// Authentication middleware that validates access tokens
pub async fn auth_middleware(
    State(state): State<AppState>,
    bearer: Result<TypedHeader<Authorization<Bearer>>, TypedHeaderRejection>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let TypedHeader(Authorization(bearer)) = bearer.map_err(|rejection| {
        if rejection.is_missing() {
            AppError::Unauthorized("Missing authorization header".into())
        } else {
            AppError::Unauthorized("Invalid authorization header format".into())
        }
    })?;

    let identity = state.tokens.verify(bearer.token())?;

    request.extensions_mut().insert(AuthUser {
        renter_id: identity.subject,
        email: identity.email,
    });

    Ok(next.run(request).await)
}
