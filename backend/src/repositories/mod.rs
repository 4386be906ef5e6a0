//! Data access layer

pub mod users;

pub use users::{InMemoryUserStore, NewUser, StoreError, UserStore};
