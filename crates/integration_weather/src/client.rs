//! Open-Meteo client
//!
//! Bundles the geocoder and the forecast fetcher over one shared
//! retrying executor.

use std::sync::Arc;
use std::time::Duration;

use domain::{Coordinates, ForecastReport};

use crate::config::OpenMeteoConfig;
use crate::error::WeatherError;
use crate::executor::RetryingExecutor;
use crate::forecast::OpenMeteoForecast;
use crate::geocoding::OpenMeteoGeocoder;
use crate::retry::RetryConfig;
use crate::transport::{HttpTransport, ReqwestTransport};

/// Open-Meteo geocoding + forecast client
#[derive(Debug, Clone)]
pub struct OpenMeteoClient {
    geocoder: OpenMeteoGeocoder,
    forecast: OpenMeteoForecast,
}

impl OpenMeteoClient {
    /// Create a client using `reqwest` with the configured timeout
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: &OpenMeteoConfig, retry: RetryConfig) -> Result<Self, WeatherError> {
        let transport = ReqwestTransport::new(Duration::from_secs(config.timeout_secs))?;
        Ok(Self::with_transport(config, retry, Arc::new(transport)))
    }

    /// Create a client over an arbitrary transport
    pub fn with_transport(
        config: &OpenMeteoConfig,
        retry: RetryConfig,
        transport: Arc<dyn HttpTransport>,
    ) -> Self {
        let executor = Arc::new(RetryingExecutor::new(transport, retry));
        Self {
            geocoder: OpenMeteoGeocoder::new(Arc::clone(&executor), &config.geocoding_base_url),
            forecast: OpenMeteoForecast::new(
                executor,
                &config.forecast_base_url,
                config.forecast_days,
            ),
        }
    }

    /// Resolve a place name to coordinates
    ///
    /// # Errors
    ///
    /// See [`OpenMeteoGeocoder::resolve`].
    pub async fn resolve(&self, place_name: &str) -> Result<Coordinates, WeatherError> {
        self.geocoder.resolve(place_name).await
    }

    /// Fetch the validated daily forecast for `coordinates`
    ///
    /// # Errors
    ///
    /// See [`OpenMeteoForecast::fetch`].
    pub async fn fetch(&self, coordinates: &Coordinates) -> Result<ForecastReport, WeatherError> {
        self.forecast.fetch(coordinates).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = OpenMeteoClient::new(&OpenMeteoConfig::default(), RetryConfig::default());
        assert!(client.is_ok());
    }
}
