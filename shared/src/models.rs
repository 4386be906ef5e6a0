//! Data models for the Proforma application

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// User account
///
/// The stored record behind registration and login. `email` is normalized
/// to lowercase before it reaches the store, so lookups are exact matches.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Store-assigned surrogate key; never reused or mutated.
    pub id: i64,
    pub name: String,
    /// Lowercased; unique across all accounts.
    pub email: String,
    /// bcrypt hash of the password; never serialized.
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub company: Option<String>,
    pub created_at: DateTime<Utc>,
    /// Refreshed on mutation; equal to `created_at` until a mutation path exists.
    pub updated_at: DateTime<Utc>,
}
