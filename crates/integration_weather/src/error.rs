//! Error types for the Open-Meteo integration

use thiserror::Error;

use crate::retry::Retryable;

/// Failure of a single HTTP attempt
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// The request exceeded its per-attempt timeout
    #[error("Request timed out")]
    Timeout,

    /// No connection could be established
    #[error("Connection error: {0}")]
    Connection(String),

    /// The server answered with a non-success status
    #[error("HTTP {status}")]
    Status {
        /// Numeric HTTP status code
        status: u16,
    },

    /// The body could not be decoded as JSON
    #[error("Invalid JSON response: {0}")]
    MalformedBody(String),

    /// Any other request failure
    #[error("Request failed: {0}")]
    Request(String),
}

impl Retryable for TransportError {
    /// Client errors (4xx) are fatal, everything else may be transient
    fn is_retryable(&self) -> bool {
        !matches!(self, Self::Status { status } if (400..500).contains(status))
    }
}

/// Errors surfaced by the geocoder and the forecast fetcher
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WeatherError {
    /// The place name failed local validation; no request was made
    #[error("Invalid location: {0}")]
    InvalidLocation(String),

    /// The geocoder returned no match, including after the city-only fallback
    #[error("Location not found: {0}")]
    LocationNotFound(String),

    /// The upstream call failed: retries exhausted or a client error
    #[error("Upstream request failed after {attempts} attempt(s): {reason}")]
    Upstream {
        /// Number of attempts made
        attempts: u32,
        /// Last failure observed
        reason: String,
    },

    /// The response arrived but its structure is wrong
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// The HTTP client could not be built
    #[error("Client initialization failed: {0}")]
    ClientInit(String),
}
