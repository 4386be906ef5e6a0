//! Root endpoint and placeholder routes
//!
//! The invoice domain (customers, products, invoices) is not built yet;
//! its routes answer with a fixed message so clients can already probe
//! the URL space.

use axum::Json;
use chrono::Utc;
use proforma_shared::types::ApiInfo;
use serde::Serialize;

/// Payload for placeholder routes
#[derive(Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// API info served at the root
pub async fn api_info() -> Json<ApiInfo> {
    Json(ApiInfo {
        message: "Proforma Invoice API is running".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: Utc::now(),
    })
}

fn coming_soon(area: &str) -> Json<MessageResponse> {
    Json(MessageResponse {
        message: format!("{} route - coming soon!", area),
    })
}

pub async fn customers() -> Json<MessageResponse> {
    coming_soon("Customers")
}

pub async fn products() -> Json<MessageResponse> {
    coming_soon("Products")
}

pub async fn invoices() -> Json<MessageResponse> {
    coming_soon("Invoices")
}
