//! Weather adapter - Implements `GeocodingPort` and `ForecastPort` using
//! `integration_weather`

use application::error::ApplicationError;
use application::ports::{ForecastPort, GeocodingPort};
use async_trait::async_trait;
use domain::{Coordinates, ForecastReport};
use integration_weather::{OpenMeteoClient, OpenMeteoConfig, RetryConfig, WeatherError};
use tracing::{debug, instrument};

/// Adapter for the Open-Meteo geocoding and forecast APIs
#[derive(Debug, Clone)]
pub struct WeatherAdapter {
    client: OpenMeteoClient,
}

impl WeatherAdapter {
    /// Create an adapter with the given endpoints and retry policy
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn new(config: &OpenMeteoConfig, retry: RetryConfig) -> Result<Self, ApplicationError> {
        let client = OpenMeteoClient::new(config, retry).map_err(Self::map_error)?;
        Ok(Self { client })
    }

    /// Wrap an existing client
    #[must_use]
    pub const fn from_client(client: OpenMeteoClient) -> Self {
        Self { client }
    }

    /// Map integration weather error to application error
    fn map_error(err: WeatherError) -> ApplicationError {
        match err {
            WeatherError::InvalidLocation(e) => ApplicationError::InvalidLocation(e),
            WeatherError::LocationNotFound(location) => {
                ApplicationError::LocationNotFound(location)
            },
            e @ WeatherError::Upstream { .. } => ApplicationError::Upstream(e.to_string()),
            WeatherError::InvalidResponse(e) => ApplicationError::InvalidResponse(e),
            WeatherError::ClientInit(e) => ApplicationError::Configuration(e),
        }
    }
}

#[async_trait]
impl GeocodingPort for WeatherAdapter {
    #[instrument(skip(self))]
    async fn resolve(&self, location: &str) -> Result<Coordinates, ApplicationError> {
        let coordinates = self
            .client
            .resolve(location)
            .await
            .map_err(Self::map_error)?;
        debug!(%coordinates, "Resolved location");
        Ok(coordinates)
    }
}

#[async_trait]
impl ForecastPort for WeatherAdapter {
    #[instrument(skip(self), fields(city = %coordinates.city()))]
    async fn fetch(&self, coordinates: &Coordinates) -> Result<ForecastReport, ApplicationError> {
        self.client
            .fetch(coordinates)
            .await
            .map_err(Self::map_error)
    }
}
