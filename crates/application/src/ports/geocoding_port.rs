//! Geocoding port
//!
//! Resolves a free-text place name to coordinates.

use async_trait::async_trait;
use domain::Coordinates;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for place-name resolution
#[cfg_attr(test, automock)]
#[async_trait]
pub trait GeocodingPort: Send + Sync {
    /// Resolve `location` to the single best-matching coordinates
    async fn resolve(&self, location: &str) -> Result<Coordinates, ApplicationError>;
}
