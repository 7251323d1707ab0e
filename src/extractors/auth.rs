//! Bearer-token authorization for API routes.

use crate::error::AppError;
use crate::state::AppState;
use async_trait::async_trait;
use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};

/// Passes when no token is configured, or when `Authorization: Bearer <token>` matches it.
#[derive(Clone, Debug)]
pub struct Authorized;

#[async_trait]
impl FromRequestParts<AppState> for Authorized {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let Some(expected) = state.api_token.as_deref() else {
            return Ok(Authorized);
        };
        let provided = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.strip_prefix("Bearer "))
            .map(str::trim);
        if provided == Some(expected) {
            Ok(Authorized)
        } else {
            tracing::debug!(path = %parts.uri.path(), "rejected request without valid bearer token");
            Err(AppError::Unauthorized)
        }
    }
}
