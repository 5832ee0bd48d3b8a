//! API error handling
//!
//! Every failure leaves the server in the same shape:
//! `{"status": "error", "message": ..., "city": ...}`. Internal distinctions
//! between upstream failures stay in the logs. Only internal errors may
//! carry a `details` string, and only while detail exposure is enabled.

use std::sync::atomic::{AtomicBool, Ordering};

use application::ApplicationError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{error, warn};

/// Global flag to control error detail exposure
/// Set to false in production to prevent information leakage
static EXPOSE_INTERNAL_ERRORS: AtomicBool = AtomicBool::new(true);

/// Configure whether internal error details should be exposed in responses.
///
/// Enabled in development, disabled in production.
pub fn set_expose_internal_errors(expose: bool) {
    EXPOSE_INTERNAL_ERRORS.store(expose, Ordering::SeqCst);
}

/// Check if internal error details should be exposed
fn should_expose_details() -> bool {
    EXPOSE_INTERNAL_ERRORS.load(Ordering::SeqCst)
}

/// API error type
#[derive(Debug, Error)]
pub enum ApiError {
    /// The `city` parameter is empty, too long or malformed
    #[error("Invalid city parameter")]
    InvalidCity {
        /// The offending value
        city: String,
    },

    /// Geocoding or forecast retrieval failed
    #[error("Failed to fetch weather data for {city}")]
    Upstream {
        /// Requested city
        city: String,
        /// Underlying failure, logged only
        reason: String,
    },

    /// Anything unexpected, including panics
    #[error("Internal server error")]
    Internal {
        /// Requested city, when known
        city: Option<String>,
        /// Underlying failure, exposed only in development
        reason: String,
    },
}

impl ApiError {
    /// Classify an application error for the given city
    #[must_use]
    pub fn from_application(err: ApplicationError, city: &str) -> Self {
        let city = city.to_string();
        if err.is_invalid_input() {
            Self::InvalidCity { city }
        } else if err.is_upstream() {
            Self::Upstream {
                city,
                reason: err.to_string(),
            }
        } else {
            Self::Internal {
                city: Some(city),
                reason: err.to_string(),
            }
        }
    }

    /// HTTP status for this error
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::InvalidCity { .. } => StatusCode::BAD_REQUEST,
            Self::Upstream { .. } => StatusCode::SERVICE_UNAVAILABLE,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Response body, with internal details only when `expose` is set
    #[must_use]
    pub fn body(&self, expose: bool) -> ErrorResponse {
        let (city, details) = match self {
            Self::InvalidCity { city } | Self::Upstream { city, .. } => (Some(city.clone()), None),
            Self::Internal { city, reason } => (city.clone(), expose.then(|| reason.clone())),
        };

        ErrorResponse {
            status: "error".to_string(),
            message: self.to_string(),
            city,
            details,
        }
    }
}

/// Error response body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Always `"error"`
    pub status: String,
    /// Human-readable message
    pub message: String,
    /// Requested city, `null` when the failure happened before routing
    pub city: Option<String>,
    /// Internal error details (development only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            Self::InvalidCity { city } => warn!(city = ?city, "Invalid city parameter"),
            Self::Upstream { city, reason } => warn!(%city, %reason, "Weather fetch failed"),
            Self::Internal { city, reason } => error!(city = ?city, %reason, "Internal error"),
        }

        let body = self.body(should_expose_details());
        (self.status(), Json(body)).into_response()
    }
}
