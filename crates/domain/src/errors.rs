//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Location name is empty or too long
    #[error("Invalid location: {0}")]
    InvalidLocation(String),

    /// Latitude or longitude outside the valid range
    #[error("Invalid coordinates: latitude must be -90 to 90, longitude must be -180 to 180")]
    InvalidCoordinates,

    /// A forecast series must contain at least one day
    #[error("Forecast series contains no days")]
    EmptyForecast,
}
