//! Application error handling
//!
//! This module provides unified error handling for the API, converting
//! internal errors to the `{success, message}` response envelope with an
//! appropriate HTTP status.

use crate::repositories::StoreError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use proforma_shared::types::ApiResponse;
use thiserror::Error;
use tracing::error;

/// API error type that can be converted to HTTP responses
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),

    #[error("This email address is already registered")]
    DuplicateEmail,

    /// Covers both "no such account" and "wrong password"; the two cases
    /// must stay indistinguishable to the caller.
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Access token required")]
    MissingToken,

    #[error("Invalid token")]
    InvalidToken,

    #[error("Token has expired")]
    ExpiredToken,

    /// A verified token whose subject no longer resolves to an account.
    /// Reported with the same wording as `InvalidToken`.
    #[error("Invalid token")]
    UnknownAccount,

    #[error("Server error")]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::DuplicateEmail => StatusCode::CONFLICT,
            ApiError::InvalidCredentials
            | ApiError::MissingToken
            | ApiError::InvalidToken
            | ApiError::ExpiredToken
            | ApiError::UnknownAccount => StatusCode::UNAUTHORIZED,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Unexpected failures are logged with their source chain; the
        // client only ever sees the generic message.
        if let ApiError::Internal(err) = &self {
            error!("Internal error: {:?}", err);
        }

        let body = Json(ApiResponse::<()>::error(self.to_string()));
        (self.status(), body).into_response()
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::DuplicateEmail => ApiError::DuplicateEmail,
            StoreError::Backend(err) => ApiError::Internal(err),
        }
    }
}

/// Result type alias for API handlers
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_status() {
        let error = ApiError::Validation("Name, email and password are required".to_string());
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_duplicate_email_error_status() {
        let error = ApiError::DuplicateEmail;
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[test]
    fn test_token_errors_are_unauthorized() {
        for error in [
            ApiError::InvalidCredentials,
            ApiError::MissingToken,
            ApiError::InvalidToken,
            ApiError::ExpiredToken,
            ApiError::UnknownAccount,
        ] {
            let response = error.into_response();
            assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        }
    }

    #[test]
    fn test_unknown_account_reads_like_invalid_token() {
        assert_eq!(
            ApiError::UnknownAccount.to_string(),
            ApiError::InvalidToken.to_string()
        );
    }

    #[test]
    fn test_expired_and_invalid_have_distinct_messages() {
        assert_ne!(
            ApiError::ExpiredToken.to_string(),
            ApiError::InvalidToken.to_string()
        );
    }

    #[tokio::test]
    async fn test_error_body_uses_envelope() {
        let response = ApiError::InvalidCredentials.into_response();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

        assert_eq!(json["success"], false);
        assert_eq!(json["message"], "Invalid email or password");
        assert!(json.get("data").is_none());
    }

    #[test]
    fn test_internal_error_hides_details() {
        let error = ApiError::Internal(anyhow::anyhow!("bcrypt blew up: cost out of range"));
        assert_eq!(error.to_string(), "Server error");
    }
}
