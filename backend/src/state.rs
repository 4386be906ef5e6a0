//! Application state management
//!
//! This module provides the shared application state that is passed
//! to all request handlers via Axum's state extraction.
//!
//! # Design Principles
//!
//! 1. **Pre-compute expensive resources**: token keys are created once
//! 2. **Cheap cloning**: all fields use Arc or are already Clone-cheap
//! 3. **Immutable after creation**: state is read-only during request handling

use crate::auth::TokenService;
use crate::config::AppConfig;
use crate::repositories::UserStore;
use std::sync::Arc;

/// Shared application state
///
/// This struct holds all shared resources that handlers need access to.
/// All fields are designed for cheap cloning across async tasks.
///
/// The store is held behind the [`UserStore`] trait, so swapping the
/// in-memory backend for a persistent one only touches startup code.
#[derive(Clone)]
pub struct AppState {
    /// Account storage backend
    pub store: Arc<dyn UserStore>,
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Pre-initialized token service with cached keys
    pub jwt: TokenService,
}

impl AppState {
    /// Create a new application state
    ///
    /// # Note
    /// This pre-computes the token keys from the config secret.
    /// The keys are expensive to derive, so this should only
    /// be called once at application startup.
    pub fn new(store: Arc<dyn UserStore>, config: AppConfig) -> Self {
        // Pre-compute token service with cached keys
        let jwt = TokenService::new(&config.jwt.secret, config.jwt.token_expiry_secs);

        Self {
            store,
            config: Arc::new(config),
            jwt,
        }
    }

    /// Get a reference to the account store
    #[inline]
    pub fn store(&self) -> &dyn UserStore {
        self.store.as_ref()
    }

    /// Get a reference to the configuration
    #[inline]
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Get a reference to the token service
    #[inline]
    pub fn jwt(&self) -> &TokenService {
        &self.jwt
    }
}
