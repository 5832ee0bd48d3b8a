//! Response payloads produced by the forecast pipeline

use chrono::{DateTime, Utc};
use domain::{ForecastReport, ForecastSummary};
use serde::{Deserialize, Serialize};

/// The `data` object of a successful weather response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherData {
    /// Resolved city name
    pub city: String,
    /// Resolved region or state, possibly empty
    pub state: String,
    /// Latitude in degrees
    pub latitude: f64,
    /// Longitude in degrees
    pub longitude: f64,
    /// IANA timezone reported by the forecast API
    pub timezone: String,
    /// Aggregates over the daily forecast
    pub forecast_summary: ForecastSummary,
    /// When the forecast was fetched
    pub fetched_at: DateTime<Utc>,
}

impl From<&ForecastReport> for WeatherData {
    fn from(report: &ForecastReport) -> Self {
        Self {
            city: report.location.city().to_string(),
            state: report.location.state().to_string(),
            latitude: report.location.latitude(),
            longitude: report.location.longitude(),
            timezone: report.timezone.clone(),
            forecast_summary: report.summary(),
            fetched_at: report.fetched_at,
        }
    }
}

/// Weather data plus whether it was served from the response cache
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherOutcome {
    /// The forecast payload
    pub data: WeatherData,
    /// `true` when no upstream call was made
    pub from_cache: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use domain::{Coordinates, DailyForecast, DailyForecastSeries};

    fn report() -> ForecastReport {
        let day = |d: u32, max: f64, min: f64| DailyForecast {
            date: NaiveDate::from_ymd_opt(2025, 6, d).expect("date"),
            weather_code: 2,
            temperature_max_f: max,
            temperature_min_f: min,
            precipitation_in: 0.5,
            wind_speed_max_mph: 10.0,
        };
        ForecastReport {
            location: Coordinates::new(29.76, -95.36, "Houston", "Texas", "United States")
                .expect("valid"),
            timezone: "America/Chicago".into(),
            daily: DailyForecastSeries::new(vec![day(1, 90.0, 70.0), day(2, 94.0, 72.0)])
                .expect("non-empty"),
            fetched_at: Utc::now(),
        }
    }

    #[test]
    fn built_from_report() {
        let report = report();
        let data = WeatherData::from(&report);

        assert_eq!(data.city, "Houston");
        assert_eq!(data.state, "Texas");
        assert_eq!(data.timezone, "America/Chicago");
        assert_eq!(data.forecast_summary.days, 2);
        assert!((data.forecast_summary.high_temp_f - 94.0).abs() < f64::EPSILON);
        assert_eq!(data.fetched_at, report.fetched_at);
    }

    #[test]
    fn serializes_with_expected_keys() {
        let json = serde_json::to_value(WeatherData::from(&report())).expect("serialize");

        for key in [
            "city",
            "state",
            "latitude",
            "longitude",
            "timezone",
            "forecast_summary",
            "fetched_at",
        ] {
            assert!(json.get(key).is_some(), "missing {key}");
        }
        for key in [
            "high_temp_f",
            "low_temp_f",
            "avg_high_temp_f",
            "total_precipitation_inches",
            "avg_wind_mph",
            "days",
        ] {
            assert!(json["forecast_summary"].get(key).is_some(), "missing {key}");
        }
    }
}
