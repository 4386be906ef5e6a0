//! Token issuance and verification
//!
//! Signed, time-bound bearer tokens with pre-computed keys. Verification
//! reports expiry separately from every other failure so callers can tell
//! the two apart.

use anyhow::Result;
use chrono::{Duration, Utc};
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, DecodingKey, EncodingKey, Header, Validation,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;

/// Token claims
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (account id, stringified)
    pub sub: String,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
    /// Issued at (Unix timestamp)
    pub iat: i64,
}

/// Why a token failed verification
///
/// `Expired` is permanent: there is no revocation, so a token stays valid
/// until its expiry passes and is expired forever after.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TokenError {
    #[error("Token has expired")]
    Expired,
    /// Unparseable, bad signature, or otherwise not one of ours.
    #[error("Invalid token")]
    Invalid,
}

/// Pre-computed signing keys for efficient token operations
/// These are expensive to create, so we cache them in AppState
#[derive(Clone)]
pub struct TokenKeys {
    encoding: Arc<EncodingKey>,
    decoding: Arc<DecodingKey>,
}

impl TokenKeys {
    /// Create new keys from the signing secret
    /// This should be called once at startup
    pub fn new(secret: &str) -> Self {
        Self {
            encoding: Arc::new(EncodingKey::from_secret(secret.as_bytes())),
            decoding: Arc::new(DecodingKey::from_secret(secret.as_bytes())),
        }
    }

    pub fn encoding(&self) -> &EncodingKey {
        &self.encoding
    }

    pub fn decoding(&self) -> &DecodingKey {
        &self.decoding
    }
}

/// Token service bound to a process-wide secret and a fixed lifetime
///
/// Design: uses pre-computed keys to avoid expensive key derivation on
/// every request. Keys are wrapped in Arc for cheap cloning.
#[derive(Clone)]
pub struct TokenService {
    keys: TokenKeys,
    lifetime_secs: i64,
}

impl TokenService {
    /// Create a new token service with pre-computed keys
    ///
    /// The secret comes from configuration, loaded once at startup. Do NOT
    /// create per-request; store in AppState instead.
    pub fn new(secret: &str, lifetime_secs: i64) -> Self {
        Self {
            keys: TokenKeys::new(secret),
            lifetime_secs,
        }
    }

    /// Issue a token bound to an account id
    ///
    /// The expiry is issuance time plus the configured lifetime.
    pub fn generate(&self, user_id: i64) -> Result<String> {
        let now = Utc::now();
        let exp = now + Duration::seconds(self.lifetime_secs);

        let claims = Claims {
            sub: user_id.to_string(),
            exp: exp.timestamp(),
            iat: now.timestamp(),
        };

        encode(&Header::default(), &claims, self.keys.encoding())
            .map_err(|e| anyhow::anyhow!("Failed to generate token: {}", e))
    }

    /// Verify a token and return its claims
    ///
    /// An expired token is [`TokenError::Expired`]; anything else that
    /// fails to parse or validate is [`TokenError::Invalid`]. Expiry is
    /// checked with zero leeway, so a token is rejected as soon as its
    /// `exp` passes.
    pub fn validate(&self, token: &str) -> Result<Claims, TokenError> {
        let mut validation = Validation::default();
        validation.leeway = 0;

        decode::<Claims>(token, self.keys.decoding(), &validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => TokenError::Expired,
                _ => TokenError::Invalid,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_service() -> TokenService {
        TokenService::new("test-secret", 3600)
    }

    #[test]
    fn test_generate_and_validate_round_trip() {
        let service = create_test_service();

        let token = service.generate(42).unwrap();
        let claims = service.validate(&token).unwrap();

        assert_eq!(claims.sub, "42");
        assert_eq!(claims.exp - claims.iat, 3600);
    }

    #[test]
    fn test_garbage_token_is_invalid() {
        let service = create_test_service();
        let result = service.validate("invalid.token.here");

        assert_eq!(result.unwrap_err(), TokenError::Invalid);
    }

    #[test]
    fn test_wrong_secret_is_invalid() {
        let service = create_test_service();
        let other = TokenService::new("another-secret", 3600);

        let token = other.generate(42).unwrap();
        assert_eq!(service.validate(&token).unwrap_err(), TokenError::Invalid);
    }

    #[test]
    fn test_expired_token_is_expired_not_invalid() {
        // Negative lifetime puts the expiry in the past.
        let expired = TokenService::new("test-secret", -120);
        let verifier = create_test_service();

        let token = expired.generate(42).unwrap();
        assert_eq!(verifier.validate(&token).unwrap_err(), TokenError::Expired);
    }

    #[test]
    fn test_expiry_has_no_leeway() {
        // Five seconds past expiry, inside the 60s clock-skew window
        // jsonwebtoken's default validation would still accept.
        let barely_expired = TokenService::new("test-secret", -5);
        let verifier = create_test_service();

        let token = barely_expired.generate(42).unwrap();
        assert_eq!(verifier.validate(&token).unwrap_err(), TokenError::Expired);
    }

    #[test]
    fn test_tampered_token_is_invalid() {
        let service = create_test_service();
        let token = service.generate(42).unwrap();

        let mut tampered = token.clone();
        tampered.pop();
        assert_eq!(service.validate(&tampered).unwrap_err(), TokenError::Invalid);
    }

    #[test]
    fn test_service_is_clone_cheap() {
        let service = create_test_service();
        let cloned = service.clone(); // Should be cheap due to Arc

        let token = service.generate(7).unwrap();
        assert_eq!(cloned.validate(&token).unwrap().sub, "7");
    }
}
