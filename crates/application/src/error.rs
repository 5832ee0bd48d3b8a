//! Application-level errors

use domain::DomainError;
use thiserror::Error;

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain-level error
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// The requested location failed validation
    #[error("Invalid location: {0}")]
    InvalidLocation(String),

    /// Geocoding found no match for the location
    #[error("Location not found: {0}")]
    LocationNotFound(String),

    /// An upstream API call failed after retries or with a client error
    #[error("Upstream service error: {0}")]
    Upstream(String),

    /// An upstream API answered with structurally invalid data
    #[error("Invalid upstream response: {0}")]
    InvalidResponse(String),

    /// Reading or writing a persisted forecast failed
    #[error("Storage error: {0}")]
    Storage(String),

    /// Rendering a report failed
    #[error("Rendering error: {0}")]
    Rendering(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApplicationError {
    /// Whether the caller supplied bad input
    #[must_use]
    pub const fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            Self::InvalidLocation(_) | Self::Domain(DomainError::InvalidLocation(_))
        )
    }

    /// Whether the failure happened while talking to an upstream API
    #[must_use]
    pub const fn is_upstream(&self) -> bool {
        matches!(
            self,
            Self::LocationNotFound(_)
                | Self::Upstream(_)
                | Self::InvalidResponse(_)
                | Self::Domain(DomainError::EmptyForecast)
        )
    }
}
