//! Raw Open-Meteo API payloads
//!
//! Deserialization targets only; validated data leaves this crate as
//! `domain` types.

use serde::Deserialize;

/// Geocoding search response; `results` is absent when nothing matched
#[derive(Debug, Deserialize)]
pub(crate) struct GeocodingResponse {
    #[serde(default)]
    pub results: Option<Vec<GeocodingResult>>,
}

/// One geocoding match
#[derive(Debug, Deserialize)]
pub(crate) struct GeocodingResult {
    pub name: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub admin1: Option<String>,
    pub country: Option<String>,
}

/// Forecast response, after the `daily` block passed shape validation
#[derive(Debug, Deserialize)]
pub(crate) struct ForecastResponse {
    pub timezone: Option<String>,
    pub daily: DailyData,
}

/// Column-oriented daily data
#[derive(Debug, Deserialize)]
pub(crate) struct DailyData {
    pub time: Vec<String>,
    pub weather_code: Vec<u8>,
    pub temperature_2m_max: Vec<f64>,
    pub temperature_2m_min: Vec<f64>,
    pub precipitation_sum: Vec<f64>,
    pub wind_speed_10m_max: Vec<f64>,
}
