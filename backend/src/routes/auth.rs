//! Authentication routes
//!
//! Provides endpoints for user registration, login, and a pair of probe
//! routes (one open, one behind the access gate).
//!
//! # Performance
//!
//! - Uses pre-computed token keys from AppState (no per-request allocation)
//! - Password hashing runs on blocking thread pool (doesn't block async runtime)

use crate::auth::AuthUser;
use crate::error::ApiResult;
use crate::routes::stubs::MessageResponse;
use crate::services::UserService;
use crate::state::AppState;
use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use proforma_shared::types::{ApiResponse, AuthData, AuthIdentity, LoginRequest, RegisterRequest};

/// Create auth routes
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/test", get(test))
        .route("/protected", get(protected))
}

/// Register a new user
///
/// POST /api/auth/register
async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> ApiResult<(StatusCode, Json<ApiResponse<AuthData>>)> {
    let data = UserService::register(state.store(), state.jwt(), req).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok("User registered successfully", data)),
    ))
}

/// Login with email and password
///
/// POST /api/auth/login
async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> ApiResult<Json<ApiResponse<AuthData>>> {
    let data = UserService::login(state.store(), state.jwt(), req).await?;
    Ok(Json(ApiResponse::ok("Login successful", data)))
}

/// Unauthenticated probe confirming the auth router is mounted
///
/// GET /api/auth/test
async fn test() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "Auth routes are up".to_string(),
    })
}

/// Probe behind the access gate
///
/// GET /api/auth/protected
///
/// # Authentication
/// Requires a valid Bearer token in the Authorization header.
async fn protected(auth_user: AuthUser) -> Json<ApiResponse<AuthIdentity>> {
    Json(ApiResponse::ok(
        "This is a protected route!",
        AuthIdentity {
            user_id: auth_user.user_id,
        },
    ))
}
