//! Aggregate statistics over a daily forecast series

use serde::{Deserialize, Serialize};

use super::forecast::DailyForecastSeries;

/// Aggregates derived from a [`DailyForecastSeries`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ForecastSummary {
    /// Highest daily maximum temperature (°F)
    pub high_temp_f: f64,
    /// Lowest daily minimum temperature (°F)
    pub low_temp_f: f64,
    /// Mean of the daily maximum temperatures (°F)
    pub avg_high_temp_f: f64,
    /// Sum of daily precipitation (inches)
    pub total_precipitation_inches: f64,
    /// Mean of the daily maximum wind speeds (mph)
    pub avg_wind_mph: f64,
    /// Number of days in the series
    pub days: usize,
}

/// Reduce a series to its summary statistics
///
/// Total over any series: [`DailyForecastSeries`] cannot be empty.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn summarize(series: &DailyForecastSeries) -> ForecastSummary {
    let days = series.days();
    let count = days.len() as f64;

    let high_temp_f = days
        .iter()
        .map(|d| d.temperature_max_f)
        .fold(f64::NEG_INFINITY, f64::max);
    let low_temp_f = days
        .iter()
        .map(|d| d.temperature_min_f)
        .fold(f64::INFINITY, f64::min);
    let sum_high: f64 = days.iter().map(|d| d.temperature_max_f).sum();
    let total_precipitation_inches: f64 = days.iter().map(|d| d.precipitation_in).sum();
    let sum_wind: f64 = days.iter().map(|d| d.wind_speed_max_mph).sum();

    ForecastSummary {
        high_temp_f,
        low_temp_f,
        avg_high_temp_f: sum_high / count,
        total_precipitation_inches,
        avg_wind_mph: sum_wind / count,
        days: days.len(),
    }
}
