//! Authentication middleware
//!
//! Provides the Axum extractor that guards protected routes.
//!
//! # Performance
//!
//! Uses the pre-computed token keys from AppState to avoid expensive
//! key derivation on every request.

use crate::auth::jwt::TokenError;
use crate::error::ApiError;
use crate::state::AppState;
use axum::{
    extract::FromRef,
    http::{header::AUTHORIZATION, request::Parts},
};

/// Authenticated user extracted from a bearer token
///
/// This extractor validates the token, resolves the account it names and
/// rejects the request with 401 if any step fails. Handlers that take an
/// `AuthUser` argument only ever run for live, authenticated accounts.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user_id: i64,
}

#[axum::async_trait]
impl<S> axum::extract::FromRequestParts<S> for AuthUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = AppState::from_ref(state);

        // Extract Authorization header
        let auth_header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or(ApiError::MissingToken)?;

        // Anything other than `Bearer <token>` counts as no token at all
        let token = auth_header
            .strip_prefix("Bearer ")
            .filter(|t| !t.is_empty())
            .ok_or(ApiError::MissingToken)?;

        // Use pre-computed keys from state (no allocation!)
        let claims = app_state.jwt().validate(token).map_err(|e| match e {
            TokenError::Expired => ApiError::ExpiredToken,
            TokenError::Invalid => ApiError::InvalidToken,
        })?;

        // Parse the account id from claims
        let user_id: i64 = claims.sub.parse().map_err(|_| ApiError::InvalidToken)?;

        // The token may outlive the account it names
        app_state
            .store()
            .find_by_id(user_id)
            .await?
            .ok_or(ApiError::UnknownAccount)?;

        Ok(AuthUser { user_id })
    }
}
