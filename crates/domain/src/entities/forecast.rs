//! Daily forecast series and the fetched report that carries it

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::DomainError;
use crate::value_objects::{Coordinates, WeatherCondition};

use super::forecast_summary::{ForecastSummary, summarize};

/// One day of forecast data, in imperial units
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyForecast {
    /// Calendar date (local to the forecast's timezone)
    pub date: NaiveDate,
    /// WMO weather interpretation code
    pub weather_code: u8,
    /// Maximum temperature in °F
    pub temperature_max_f: f64,
    /// Minimum temperature in °F
    pub temperature_min_f: f64,
    /// Precipitation total in inches
    pub precipitation_in: f64,
    /// Maximum wind speed in mph
    pub wind_speed_max_mph: f64,
}

impl DailyForecast {
    /// Weather condition for this day
    #[must_use]
    pub const fn condition(&self) -> WeatherCondition {
        WeatherCondition::from_wmo_code(self.weather_code)
    }
}

/// An ordered, non-empty sequence of daily forecasts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<DailyForecast>", into = "Vec<DailyForecast>")]
pub struct DailyForecastSeries {
    days: Vec<DailyForecast>,
}

impl DailyForecastSeries {
    /// Build a series from per-day records
    ///
    /// # Errors
    ///
    /// Returns `EmptyForecast` if `days` is empty.
    pub fn new(days: Vec<DailyForecast>) -> Result<Self, DomainError> {
        if days.is_empty() {
            return Err(DomainError::EmptyForecast);
        }
        Ok(Self { days })
    }

    /// Per-day records in date order
    #[must_use]
    pub fn days(&self) -> &[DailyForecast] {
        &self.days
    }

    /// Number of days (always at least one)
    #[must_use]
    pub fn len(&self) -> usize {
        self.days.len()
    }

    /// Always `false`; present for API symmetry with `len`
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Aggregate statistics over the series
    #[must_use]
    pub fn summarize(&self) -> ForecastSummary {
        summarize(self)
    }
}

impl TryFrom<Vec<DailyForecast>> for DailyForecastSeries {
    type Error = DomainError;

    fn try_from(days: Vec<DailyForecast>) -> Result<Self, Self::Error> {
        Self::new(days)
    }
}

impl From<DailyForecastSeries> for Vec<DailyForecast> {
    fn from(series: DailyForecastSeries) -> Self {
        series.days
    }
}

/// Outcome of a successful fetch: where, what, and when
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastReport {
    /// Geocoded location the forecast was requested for
    pub location: Coordinates,
    /// IANA timezone reported by the forecast service
    pub timezone: String,
    /// Validated daily series
    pub daily: DailyForecastSeries,
    /// When the forecast was fetched
    pub fetched_at: DateTime<Utc>,
}

impl ForecastReport {
    /// Aggregate statistics over the daily series
    #[must_use]
    pub fn summary(&self) -> ForecastSummary {
        self.daily.summarize()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn day(date: &str, max: f64, min: f64, rain: f64, wind: f64) -> DailyForecast {
        DailyForecast {
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").expect("valid date"),
            weather_code: 2,
            temperature_max_f: max,
            temperature_min_f: min,
            precipitation_in: rain,
            wind_speed_max_mph: wind,
        }
    }

    #[test]
    fn empty_series_is_rejected() {
        assert_eq!(
            DailyForecastSeries::new(Vec::new()),
            Err(DomainError::EmptyForecast)
        );
    }

    #[test]
    fn series_keeps_order() {
        let series = DailyForecastSeries::new(vec![
            day("2025-01-01", 70.0, 50.0, 0.0, 10.0),
            day("2025-01-02", 72.0, 52.0, 0.1, 12.0),
        ])
        .expect("non-empty");
        assert_eq!(series.len(), 2);
        assert!(!series.is_empty());
        assert_eq!(series.days()[1].date.to_string(), "2025-01-02");
    }

    #[test]
    fn series_deserialization_rejects_empty() {
        let result: Result<DailyForecastSeries, _> = serde_json::from_str("[]");
        assert!(result.is_err());
    }

    #[test]
    fn report_round_trips_through_json() {
        let report = ForecastReport {
            location: Coordinates::new(29.76, -95.36, "Houston", "Texas", "United States")
                .expect("valid"),
            timezone: "America/Chicago".to_string(),
            daily: DailyForecastSeries::new(vec![day("2025-01-01", 70.0, 50.0, 0.0, 10.0)])
                .expect("non-empty"),
            fetched_at: Utc::now(),
        };
        let json = serde_json::to_string(&report).expect("serialize");
        let back: ForecastReport = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, report);
    }

    #[test]
    fn day_condition_uses_wmo_table() {
        let mut d = day("2025-01-01", 70.0, 50.0, 0.0, 10.0);
        d.weather_code = 95;
        assert_eq!(d.condition(), WeatherCondition::Thunderstorm);
    }
}
