//! Health check handler

use axum::{Json, extract::State};
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::state::AppState;

/// Service name reported by the health probe
pub const SERVICE_NAME: &str = "weather-webhook";

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub environment: String,
    pub timestamp: String,
}

/// Liveness check - always succeeds while the server runs
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        service: SERVICE_NAME.to_string(),
        environment: state.config.environment.to_string(),
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_response_serialization() {
        let resp = HealthResponse {
            status: "ok".to_string(),
            service: SERVICE_NAME.to_string(),
            environment: "development".to_string(),
            timestamp: "2025-06-01T12:00:00Z".to_string(),
        };
        let json = serde_json::to_value(&resp).expect("serialize");
        assert_eq!(json["service"], "weather-webhook");
        assert_eq!(json["environment"], "development");
    }
}
