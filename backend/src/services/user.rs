//! User service for registration and login
//!
//! # Performance
//!
//! - Password hashing/verification runs on the blocking thread pool
//! - Token signing uses pre-computed keys passed by reference

use crate::auth::{PasswordService, TokenService};
use crate::error::ApiError;
use crate::repositories::{NewUser, UserStore};
use proforma_shared::types::{AuthData, LoginRequest, RegisterRequest, UserProfile};

/// User service for authentication operations
pub struct UserService;

impl UserService {
    /// Register a new user
    ///
    /// Emails are trimmed and lowercased before storage so lookups can
    /// stay byte-exact. Passwords are hashed exactly as supplied, but a
    /// password that is all whitespace counts as missing.
    pub async fn register(
        store: &dyn UserStore,
        tokens: &TokenService,
        req: RegisterRequest,
    ) -> Result<AuthData, ApiError> {
        let name = req.name.trim().to_string();
        let email = req.email.trim().to_lowercase();

        if name.is_empty() || email.is_empty() || req.password.trim().is_empty() {
            return Err(ApiError::Validation(
                "Name, email and password are required".to_string(),
            ));
        }

        // Fast pre-check for the common case; the store re-checks under
        // its write lock, so a lost race still surfaces as a duplicate
        if store.find_by_email(&email).await?.is_some() {
            return Err(ApiError::DuplicateEmail);
        }

        // Hash on the blocking thread pool (CPU-intensive)
        let password_hash = PasswordService::hash_async(req.password)
            .await
            .map_err(ApiError::Internal)?;

        // Blank company means no company
        let company = req.company.and_then(|c| {
            let c = c.trim().to_string();
            (!c.is_empty()).then_some(c)
        });

        let user = store
            .create(NewUser {
                name,
                email,
                password_hash,
                company,
            })
            .await?;

        let token = tokens.generate(user.id).map_err(ApiError::Internal)?;

        Ok(AuthData {
            user: UserProfile::from(user),
            token,
        })
    }

    /// Login with email and password
    ///
    /// Unknown email and wrong password return the same error so the
    /// response never reveals which accounts exist.
    pub async fn login(
        store: &dyn UserStore,
        tokens: &TokenService,
        req: LoginRequest,
    ) -> Result<AuthData, ApiError> {
        let email = req.email.trim().to_lowercase();

        if email.is_empty() || req.password.trim().is_empty() {
            return Err(ApiError::Validation(
                "Email and password are required".to_string(),
            ));
        }

        let user = store
            .find_by_email(&email)
            .await?
            .ok_or(ApiError::InvalidCredentials)?;

        // Verify on the blocking thread pool (CPU-intensive)
        let valid = PasswordService::verify_async(req.password, user.password_hash.clone())
            .await
            .map_err(ApiError::Internal)?;

        if !valid {
            return Err(ApiError::InvalidCredentials);
        }

        let token = tokens.generate(user.id).map_err(ApiError::Internal)?;

        Ok(AuthData {
            user: UserProfile::from(user),
            token,
        })
    }
}
