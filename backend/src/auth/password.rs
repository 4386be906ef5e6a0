//! Password hashing using bcrypt
//!
//! Provides secure password hashing and verification.
//!
//! # Performance Considerations
//!
//! bcrypt is intentionally CPU-intensive. The `*_async` variants run the
//! work on the blocking thread pool so request handling is not stalled.

use anyhow::Result;

/// Cost factor sized for interactive login latency.
const BCRYPT_COST: u32 = 10;

/// Password hashing service
///
/// Every hash carries its own random salt, so equal passwords never share
/// a hash.
pub struct PasswordService;

impl PasswordService {
    /// Hash a password using bcrypt (blocking operation)
    pub fn hash(password: &str) -> Result<String> {
        let hash = bcrypt::hash(password, BCRYPT_COST)?;
        Ok(hash)
    }

    /// Hash a password asynchronously (non-blocking)
    ///
    /// Spawns the CPU-intensive work on the blocking thread pool.
    pub async fn hash_async(password: String) -> Result<String> {
        tokio::task::spawn_blocking(move || Self::hash(&password))
            .await
            .map_err(|e| anyhow::anyhow!("Task join error: {}", e))?
    }

    /// Verify a password against a stored hash (blocking operation)
    ///
    /// Delegates the comparison to bcrypt itself rather than comparing
    /// strings, which keeps verification constant-time-safe.
    pub fn verify(password: &str, hash: &str) -> Result<bool> {
        let valid = bcrypt::verify(password, hash)?;
        Ok(valid)
    }

    /// Verify a password asynchronously (non-blocking)
    pub async fn verify_async(password: String, hash: String) -> Result<bool> {
        tokio::task::spawn_blocking(move || Self::verify(&password, &hash))
            .await
            .map_err(|e| anyhow::anyhow!("Task join error: {}", e))?
    }
}
