//! Open-Meteo geocoding
//!
//! Resolves a free-text place name to [`Coordinates`] using the
//! [Open-Meteo geocoding API](https://open-meteo.com/en/docs/geocoding-api).
//! `"City, Region"` input that finds nothing is retried once with only the
//! city part.

use std::sync::Arc;

use domain::{Coordinates, LocationName};
use tracing::{debug, info, instrument, warn};

use crate::error::WeatherError;
use crate::executor::RetryingExecutor;
use crate::models::{GeocodingResponse, GeocodingResult};

/// Geocoder backed by the Open-Meteo search endpoint
#[derive(Debug, Clone)]
pub struct OpenMeteoGeocoder {
    executor: Arc<RetryingExecutor>,
    search_url: String,
}

impl OpenMeteoGeocoder {
    /// Create a geocoder for the API rooted at `base_url`
    pub fn new(executor: Arc<RetryingExecutor>, base_url: &str) -> Self {
        Self {
            executor,
            search_url: format!("{}/search", base_url.trim_end_matches('/')),
        }
    }

    /// Resolve a place name to coordinates
    ///
    /// # Errors
    ///
    /// - `InvalidLocation` if the name is empty or too long (no request made)
    /// - `LocationNotFound` if neither the full name nor the city part matched
    /// - `Upstream` if the search request failed
    /// - `InvalidResponse` if the match lacks latitude or longitude
    #[instrument(skip(self))]
    pub async fn resolve(&self, place_name: &str) -> Result<Coordinates, WeatherError> {
        let name = LocationName::parse(place_name)
            .map_err(|e| WeatherError::InvalidLocation(e.to_string()))?;

        let mut best = self.search(name.as_str()).await?;

        if best.is_none() {
            if let Some(city) = name.city_only() {
                info!(query = %city, "No geocoding match, retrying with city only");
                best = self.search(city).await?;
            }
        }

        let Some(result) = best else {
            warn!(location = %name, "Geocoding found no match");
            return Err(WeatherError::LocationNotFound(name.to_string()));
        };

        let coordinates = Self::into_coordinates(result)?;
        debug!(%coordinates, "Geocoding resolved");
        Ok(coordinates)
    }

    /// Ask for the single best match for `name`
    async fn search(&self, name: &str) -> Result<Option<GeocodingResult>, WeatherError> {
        let query = [
            ("name", name.to_string()),
            ("count", "1".to_string()),
            ("language", "en".to_string()),
            ("format", "json".to_string()),
        ];

        let body = self.executor.execute(&self.search_url, &query).await?;
        let response: GeocodingResponse = serde_json::from_value(body)
            .map_err(|e| WeatherError::InvalidResponse(format!("geocoding payload: {e}")))?;

        Ok(response.results.unwrap_or_default().into_iter().next())
    }

    fn into_coordinates(result: GeocodingResult) -> Result<Coordinates, WeatherError> {
        let latitude = result.latitude.ok_or_else(|| {
            WeatherError::InvalidResponse("geocoding result missing latitude".to_string())
        })?;
        let longitude = result.longitude.ok_or_else(|| {
            WeatherError::InvalidResponse("geocoding result missing longitude".to_string())
        })?;

        Coordinates::new(
            latitude,
            longitude,
            result.name.unwrap_or_else(|| Coordinates::UNKNOWN.to_string()),
            result.admin1.unwrap_or_default(),
            result
                .country
                .unwrap_or_else(|| Coordinates::UNKNOWN.to_string()),
        )
        .map_err(|e| WeatherError::InvalidResponse(e.to_string()))
    }
}
