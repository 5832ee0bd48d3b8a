//! Fallback for unknown routes

use axum::{Json, http::StatusCode, http::Uri};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Routes served by this application
pub const AVAILABLE_ENDPOINTS: [&str; 3] = ["/", "/weather", "/health"];

/// Body returned for unknown routes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotFoundResponse {
    pub status: String,
    pub message: String,
    pub available_endpoints: Vec<String>,
}

/// Answer 404 with the list of known endpoints
pub async fn not_found(uri: Uri) -> (StatusCode, Json<NotFoundResponse>) {
    warn!(path = %uri.path(), "Unknown endpoint");
    (
        StatusCode::NOT_FOUND,
        Json(NotFoundResponse {
            status: "error".to_string(),
            message: "Endpoint not found".to_string(),
            available_endpoints: AVAILABLE_ENDPOINTS.iter().map(ToString::to_string).collect(),
        }),
    )
}
