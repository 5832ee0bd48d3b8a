//! Open-Meteo daily forecast
//!
//! Fetches a multi-day forecast in °F / mph / inches for given
//! coordinates, validates the shape of the `daily` block, and converts it
//! into a [`ForecastReport`].

use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use domain::{Coordinates, DailyForecast, DailyForecastSeries, ForecastReport};
use serde_json::Value;
use tracing::{debug, error, info, instrument};

use crate::error::WeatherError;
use crate::executor::RetryingExecutor;
use crate::models::{DailyData, ForecastResponse};

/// Daily fields requested from, and required in, every forecast response
pub const DAILY_FIELDS: [&str; 6] = [
    "time",
    "weather_code",
    "temperature_2m_max",
    "temperature_2m_min",
    "precipitation_sum",
    "wind_speed_10m_max",
];

/// Forecast fetcher backed by the Open-Meteo forecast endpoint
#[derive(Debug, Clone)]
pub struct OpenMeteoForecast {
    executor: Arc<RetryingExecutor>,
    forecast_url: String,
    forecast_days: u8,
}

impl OpenMeteoForecast {
    /// Create a fetcher for the API rooted at `base_url`
    pub fn new(executor: Arc<RetryingExecutor>, base_url: &str, forecast_days: u8) -> Self {
        Self {
            executor,
            forecast_url: format!("{}/forecast", base_url.trim_end_matches('/')),
            forecast_days: forecast_days.clamp(1, 16),
        }
    }

    /// Fetch and validate the daily forecast for `coordinates`
    ///
    /// # Errors
    ///
    /// - `Upstream` if the request failed after retries or with a 4xx
    /// - `InvalidResponse` if the payload fails shape validation; this is
    ///   never retried
    #[instrument(skip(self), fields(lat = %coordinates.latitude(), lon = %coordinates.longitude()))]
    pub async fn fetch(&self, coordinates: &Coordinates) -> Result<ForecastReport, WeatherError> {
        let query = self.build_query(coordinates);
        let body = self.executor.execute(&self.forecast_url, &query).await?;

        let days = validate_forecast(&body).inspect_err(|e| {
            error!(error = %e, "Forecast data validation failed");
        })?;
        debug!(days, "Forecast validation passed");

        let response: ForecastResponse = serde_json::from_value(body)
            .map_err(|e| WeatherError::InvalidResponse(format!("forecast payload: {e}")))?;

        let daily = DailyForecastSeries::new(parse_days(&response.daily)?)
            .map_err(|e| WeatherError::InvalidResponse(e.to_string()))?;

        info!(
            city = %coordinates.city(),
            state = %coordinates.state(),
            days = daily.len(),
            "Fetched forecast"
        );

        Ok(ForecastReport {
            location: coordinates.clone(),
            timezone: response.timezone.unwrap_or_else(|| "auto".to_string()),
            daily,
            fetched_at: Utc::now(),
        })
    }

    fn build_query(&self, coordinates: &Coordinates) -> Vec<(&'static str, String)> {
        vec![
            ("latitude", coordinates.latitude().to_string()),
            ("longitude", coordinates.longitude().to_string()),
            ("daily", DAILY_FIELDS[1..].join(",")),
            ("temperature_unit", "fahrenheit".to_string()),
            ("wind_speed_unit", "mph".to_string()),
            ("precipitation_unit", "inch".to_string()),
            ("timezone", "auto".to_string()),
            ("forecast_days", self.forecast_days.to_string()),
        ]
    }
}

/// Check that `body.daily` holds every required field as an array and that
/// all arrays share one non-zero length; returns that length
///
/// # Errors
///
/// Returns `InvalidResponse` describing the first violation found.
pub fn validate_forecast(body: &Value) -> Result<usize, WeatherError> {
    let daily = body
        .get("daily")
        .and_then(Value::as_object)
        .ok_or_else(|| WeatherError::InvalidResponse("missing 'daily' block".to_string()))?;

    let mut expected: Option<usize> = None;
    for field in DAILY_FIELDS {
        let len = daily
            .get(field)
            .and_then(Value::as_array)
            .map(Vec::len)
            .ok_or_else(|| WeatherError::InvalidResponse(format!("missing daily field '{field}'")))?;

        match expected {
            None => expected = Some(len),
            Some(first) if first != len => {
                return Err(WeatherError::InvalidResponse(format!(
                    "daily field '{field}' has {len} entries, expected {first}"
                )));
            },
            Some(_) => {},
        }
    }

    match expected {
        Some(len) if len > 0 => Ok(len),
        _ => Err(WeatherError::InvalidResponse(
            "forecast contains no days".to_string(),
        )),
    }
}

fn parse_days(daily: &DailyData) -> Result<Vec<DailyForecast>, WeatherError> {
    daily
        .time
        .iter()
        .enumerate()
        .map(|(i, date)| {
            let date = NaiveDate::parse_from_str(date, "%Y-%m-%d")
                .map_err(|e| WeatherError::InvalidResponse(format!("invalid date '{date}': {e}")))?;
            Ok(DailyForecast {
                date,
                weather_code: daily.weather_code[i],
                temperature_max_f: daily.temperature_2m_max[i],
                temperature_min_f: daily.temperature_2m_min[i],
                precipitation_in: daily.precipitation_sum[i],
                wind_speed_max_mph: daily.wind_speed_10m_max[i],
            })
        })
        .collect()
}
