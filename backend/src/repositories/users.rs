//! User storage
//!
//! The store is behind the [`UserStore`] trait so handlers and services
//! never see a concrete backend. The default backend keeps accounts in
//! process memory; everything is lost on restart.

use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;
use proforma_shared::User;
use thiserror::Error;
use tokio::sync::RwLock;

/// Input for creating a user
///
/// The email must already be normalised (trimmed, lowercased) and the
/// password already hashed by the caller.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub company: Option<String>,
}

/// Storage-level failures
#[derive(Debug, Error)]
pub enum StoreError {
    /// Another account already holds this email.
    #[error("email already registered")]
    DuplicateEmail,
    #[error(transparent)]
    Backend(#[from] anyhow::Error),
}

/// Account storage operations
///
/// `create` must be atomic with respect to the uniqueness check: two
/// concurrent calls with the same email must yield exactly one success.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Find a user by exact email match
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError>;

    /// Find a user by id
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, StoreError>;

    /// Insert a new user, assigning its id and timestamps
    async fn create(&self, new_user: NewUser) -> Result<User, StoreError>;
}

#[derive(Debug, Default)]
struct StoreInner {
    users: Vec<User>,
    next_id: i64,
}

/// In-memory account store
///
/// Ids come from a dedicated counter, so they stay unique even if
/// deletion is added later. A single write lock covers both the
/// uniqueness check and the insert, which closes the window where two
/// registrations with the same email could both pass the check.
#[derive(Debug, Default)]
pub struct InMemoryUserStore {
    inner: RwLock<StoreInner>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner.users.iter().find(|u| u.email == email).cloned())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner.users.iter().find(|u| u.id == id).cloned())
    }

    async fn create(&self, new_user: NewUser) -> Result<User, StoreError> {
        let mut inner = self.inner.write().await;

        // Check and insert under the same write lock
        if inner.users.iter().any(|u| u.email == new_user.email) {
            return Err(StoreError::DuplicateEmail);
        }

        inner.next_id += 1;
        let now = Utc::now();
        let user = User {
            id: inner.next_id,
            name: new_user.name,
            email: new_user.email,
            password_hash: new_user.password_hash,
            company: new_user.company,
            created_at: now,
            updated_at: now,
        };

        inner.users.push(user.clone());
        Ok(user)
    }
}
