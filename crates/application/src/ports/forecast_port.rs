//! Forecast port
//!
//! Retrieves a validated multi-day forecast for known coordinates.

use async_trait::async_trait;
use domain::{Coordinates, ForecastReport};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for daily forecast retrieval
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ForecastPort: Send + Sync {
    /// Fetch the daily forecast for `coordinates`
    ///
    /// Implementations must only return series that passed shape
    /// validation.
    async fn fetch(&self, coordinates: &Coordinates) -> Result<ForecastReport, ApplicationError>;
}
