//! Authentication module
//!
//! Provides JWT-based authentication with bcrypt password hashing.

mod jwt;
mod middleware;
mod password;

pub use jwt::{Claims, TokenError, TokenService};
pub use middleware::AuthUser;
pub use password::PasswordService;
