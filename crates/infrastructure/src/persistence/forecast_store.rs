//! JSON forecast store
//!
//! Implements `ForecastStorePort` by writing one pretty-printed JSON file
//! per location into a data directory.

use std::path::{Path, PathBuf};

use application::{error::ApplicationError, ports::ForecastStorePort};
use async_trait::async_trait;
use domain::ForecastReport;
use tokio::fs;
use tracing::{debug, instrument};

use super::error::map_io_error;

/// File name for a location's saved forecast
///
/// Lowercased, spaces become `_`, commas are dropped and path separators
/// become `_`: `"Houston, Texas"` is stored as `houston_texas_forecast.json`.
#[must_use]
pub fn forecast_file_name(location: &str) -> String {
    let stem: String = location
        .to_lowercase()
        .chars()
        .filter(|c| *c != ',')
        .map(|c| match c {
            ' ' | '/' | '\\' => '_',
            other => other,
        })
        .collect();
    format!("{stem}_forecast.json")
}

/// Directory-backed forecast store
#[derive(Debug, Clone)]
pub struct JsonForecastStore {
    data_dir: PathBuf,
}

impl JsonForecastStore {
    /// Create a store rooted at `data_dir`; the directory is created on
    /// first save
    #[must_use]
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Root directory
    #[must_use]
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Path a location's forecast is saved to
    #[must_use]
    pub fn path_for(&self, location: &str) -> PathBuf {
        self.data_dir.join(forecast_file_name(location))
    }
}

#[async_trait]
impl ForecastStorePort for JsonForecastStore {
    #[instrument(skip(self, report), fields(city = %report.location.city()))]
    async fn save(
        &self,
        report: &ForecastReport,
        location: &str,
    ) -> Result<PathBuf, ApplicationError> {
        fs::create_dir_all(&self.data_dir)
            .await
            .map_err(|e| map_io_error("create", &self.data_dir, &e))?;

        let path = self.path_for(location);
        let json = serde_json::to_string_pretty(report)
            .map_err(|e| ApplicationError::Internal(format!("Forecast serialization error: {e}")))?;

        fs::write(&path, json)
            .await
            .map_err(|e| map_io_error("write", &path, &e))?;

        debug!(path = %path.display(), "Forecast written");
        Ok(path)
    }

    #[instrument(skip(self))]
    async fn load(&self, path: &Path) -> Result<ForecastReport, ApplicationError> {
        let json = fs::read_to_string(path)
            .await
            .map_err(|e| map_io_error("read", path, &e))?;

        serde_json::from_str(&json).map_err(|e| {
            ApplicationError::Storage(format!("Invalid forecast file {}: {e}", path.display()))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone, Utc};
    use domain::{Coordinates, DailyForecast, DailyForecastSeries};

    fn report() -> ForecastReport {
        let days = (1..=3)
            .map(|d| DailyForecast {
                date: NaiveDate::from_ymd_opt(2025, 6, d).expect("date"),
                weather_code: 61,
                temperature_max_f: 88.5,
                temperature_min_f: 71.0,
                precipitation_in: 0.25,
                wind_speed_max_mph: 14.0,
            })
            .collect();
        ForecastReport {
            location: Coordinates::new(29.76, -95.36, "Houston", "Texas", "United States")
                .expect("valid"),
            timezone: "America/Chicago".into(),
            daily: DailyForecastSeries::new(days).expect("non-empty"),
            fetched_at: Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).single().expect("time"),
        }
    }

    #[test]
    fn file_name_normalization() {
        assert_eq!(forecast_file_name("Houston, Texas"), "houston_texas_forecast.json");
        assert_eq!(forecast_file_name("New York"), "new_york_forecast.json");
        assert_eq!(forecast_file_name("Paris"), "paris_forecast.json");
        assert_eq!(forecast_file_name("../etc"), ".._etc_forecast.json");
    }

    #[tokio::test]
    async fn save_then_load() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = JsonForecastStore::new(dir.path().join("data"));
        let original = report();

        let path = store.save(&original, "Houston, Texas").await.expect("save");
        assert_eq!(path, dir.path().join("data").join("houston_texas_forecast.json"));
        assert!(path.exists());

        let loaded = store.load(&path).await.expect("load");
        assert_eq!(loaded, original);
    }

    #[tokio::test]
    async fn save_overwrites_previous_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = JsonForecastStore::new(dir.path());

        let mut first = report();
        first.timezone = "UTC".into();
        store.save(&first, "Houston").await.expect("save");
        let path = store.save(&report(), "Houston").await.expect("save");

        let loaded = store.load(&path).await.expect("load");
        assert_eq!(loaded.timezone, "America/Chicago");
    }

    #[tokio::test]
    async fn saved_file_is_pretty_json() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = JsonForecastStore::new(dir.path());

        let path = store.save(&report(), "Houston").await.expect("save");
        let text = std::fs::read_to_string(path).expect("read");

        assert!(text.contains('\n'));
        let value: serde_json::Value = serde_json::from_str(&text).expect("json");
        assert_eq!(value["location"]["city"], "Houston");
    }

    #[tokio::test]
    async fn load_missing_file_is_storage_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = JsonForecastStore::new(dir.path());

        let err = store
            .load(&dir.path().join("missing.json"))
            .await
            .expect_err("missing");
        assert!(matches!(err, ApplicationError::Storage(_)));
    }

    #[tokio::test]
    async fn load_invalid_file_is_storage_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{not json").expect("write");

        let err = JsonForecastStore::new(dir.path())
            .load(&path)
            .await
            .expect_err("invalid");
        assert!(matches!(err, ApplicationError::Storage(ref m) if m.contains("broken.json")));
    }
}
