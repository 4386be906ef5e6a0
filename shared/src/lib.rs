//! Proforma Shared Library
//!
//! This crate contains the account model and the HTTP API contract types
//! shared between the backend and future API clients.

pub mod models;
pub mod types;

// Re-export commonly used items
pub use models::User;
pub use types::*;
