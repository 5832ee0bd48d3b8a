//! Weather handlers
//!
//! `GET /` and `GET /weather` return the summarized forecast for the
//! `city` query parameter, or the configured default city when absent.

use application::WeatherData;
use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};

use crate::{error::ApiError, state::AppState};

/// Query parameters for the weather endpoint
#[derive(Debug, Default, Deserialize)]
pub struct WeatherQuery {
    /// City to forecast, e.g. `Austin, Texas`
    pub city: Option<String>,
}

/// Successful weather response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherResponse {
    /// Always `"success"`
    pub status: String,
    /// Whether the data came from the response cache
    pub from_cache: bool,
    /// Summarized forecast
    pub data: WeatherData,
}

/// Return the summarized forecast for a city
#[instrument(skip(state, query))]
pub async fn get_weather(
    State(state): State<AppState>,
    query: Result<Query<WeatherQuery>, QueryRejection>,
) -> Result<Json<WeatherResponse>, ApiError> {
    let Query(query) = query.map_err(|e| {
        warn!(reason = %e.body_text(), "Malformed query string");
        ApiError::InvalidCity {
            city: String::new(),
        }
    })?;
    let city = query
        .city
        .unwrap_or_else(|| state.config.weather.default_city.clone());

    let outcome = state
        .weather_service
        .get_weather(&city)
        .await
        .map_err(|e| ApiError::from_application(e, &city))?;

    info!(%city, from_cache = outcome.from_cache, "Weather request served");

    Ok(Json(WeatherResponse {
        status: "success".to_string(),
        from_cache: outcome.from_cache,
        data: outcome.data,
    }))
}
