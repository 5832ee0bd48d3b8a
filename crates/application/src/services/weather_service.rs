//! Weather service - the forecast pipeline
//!
//! Every entry point (HTTP, fetch-and-save, report) goes through
//! [`WeatherService::fetch_report`]: validate the location, geocode it,
//! fetch the forecast. The HTTP path adds the response cache in front and
//! summarizes the series into a [`WeatherData`] payload.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use domain::{ForecastReport, LocationName};
use tracing::{debug, error, info, instrument};

use crate::dto::{WeatherData, WeatherOutcome};
use crate::error::ApplicationError;
use crate::ports::{
    ForecastPort, ForecastStorePort, GeocodingPort, ReportRendererPort, ResponseCachePort,
};

/// A rendered document together with its file extension
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedReport {
    /// Document body
    pub content: String,
    /// Extension without the dot, e.g. `html`
    pub extension: &'static str,
}

/// Orchestrates geocoding, forecast retrieval, caching and persistence
pub struct WeatherService {
    geocoder: Arc<dyn GeocodingPort>,
    forecast: Arc<dyn ForecastPort>,
    cache: Arc<dyn ResponseCachePort>,
    store: Option<Arc<dyn ForecastStorePort>>,
    renderer: Option<Arc<dyn ReportRendererPort>>,
}

impl std::fmt::Debug for WeatherService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeatherService")
            .field("geocoder", &"<GeocodingPort>")
            .field("forecast", &"<ForecastPort>")
            .field("cache", &self.cache)
            .field("store", &self.store.is_some())
            .field("renderer", &self.renderer.is_some())
            .finish()
    }
}

impl WeatherService {
    /// Create a service over the required ports
    #[must_use]
    pub fn new(
        geocoder: Arc<dyn GeocodingPort>,
        forecast: Arc<dyn ForecastPort>,
        cache: Arc<dyn ResponseCachePort>,
    ) -> Self {
        Self {
            geocoder,
            forecast,
            cache,
            store: None,
            renderer: None,
        }
    }

    /// Attach a forecast store
    #[must_use]
    pub fn with_store(mut self, store: Arc<dyn ForecastStorePort>) -> Self {
        self.store = Some(store);
        self
    }

    /// Attach a report renderer
    #[must_use]
    pub fn with_renderer(mut self, renderer: Arc<dyn ReportRendererPort>) -> Self {
        self.renderer = Some(renderer);
        self
    }

    /// Cache key for a location string, as given by the caller
    #[must_use]
    pub fn cache_key(location: &str) -> String {
        format!("forecast_{location}")
    }

    /// Get the summarized forecast for `location`, from cache when fresh
    ///
    /// # Errors
    ///
    /// Returns an invalid-input error before touching the cache or the
    /// network when the location is empty or too long, otherwise the first
    /// pipeline failure.
    #[instrument(skip(self))]
    pub async fn get_weather(&self, location: &str) -> Result<WeatherOutcome, ApplicationError> {
        LocationName::parse(location)?;

        let key = Self::cache_key(location);
        if let Some(data) = self.cache.get(&key) {
            info!(location, "Returning cached forecast");
            return Ok(WeatherOutcome {
                data,
                from_cache: true,
            });
        }

        info!(location, "Fetching fresh forecast");
        let report = self.fetch_report(location).await?;
        let data = WeatherData::from(&report);

        self.cache.set(&key, data.clone());
        debug!(location, "Forecast cached");

        Ok(WeatherOutcome {
            data,
            from_cache: false,
        })
    }

    /// Run the uncached pipeline: validate, geocode, fetch
    ///
    /// # Errors
    ///
    /// Returns the first failing stage's error; no forecast call is made
    /// without coordinates.
    pub async fn fetch_report(&self, location: &str) -> Result<ForecastReport, ApplicationError> {
        let name = LocationName::parse(location)?;

        let coordinates = self
            .geocoder
            .resolve(name.as_str())
            .await
            .inspect_err(|e| error!(location = %name, error = %e, "Geocoding failed"))?;

        self.forecast
            .fetch(&coordinates)
            .await
            .inspect_err(|e| error!(location = %name, error = %e, "Forecast fetch failed"))
    }

    /// Fetch the forecast for `location` and persist it
    ///
    /// # Errors
    ///
    /// Returns `Configuration` if no store is attached, otherwise the
    /// pipeline or storage error.
    #[instrument(skip(self))]
    pub async fn fetch_and_save(
        &self,
        location: &str,
    ) -> Result<(ForecastReport, PathBuf), ApplicationError> {
        let store = self.store()?;
        let report = self.fetch_report(location).await?;
        let path = store.save(&report, location).await?;
        info!(location, path = %path.display(), "Forecast saved");
        Ok((report, path))
    }

    /// Load a previously saved forecast
    ///
    /// # Errors
    ///
    /// Returns `Configuration` if no store is attached, otherwise the
    /// storage error.
    pub async fn load_report(&self, path: &Path) -> Result<ForecastReport, ApplicationError> {
        self.store()?.load(path).await
    }

    /// Render `report` into a document
    ///
    /// # Errors
    ///
    /// Returns `Configuration` if no renderer is attached, otherwise the
    /// rendering error.
    pub fn render_report(&self, report: &ForecastReport) -> Result<RenderedReport, ApplicationError> {
        let renderer = self.renderer.as_ref().ok_or_else(|| {
            ApplicationError::Configuration("no report renderer configured".to_string())
        })?;
        let content = renderer.render(report, &report.summary())?;
        Ok(RenderedReport {
            content,
            extension: renderer.extension(),
        })
    }

    /// Drop every cached response
    pub fn clear_cache(&self) {
        self.cache.clear();
    }

    fn store(&self) -> Result<&Arc<dyn ForecastStorePort>, ApplicationError> {
        self.store.as_ref().ok_or_else(|| {
            ApplicationError::Configuration("no forecast store configured".to_string())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::{
        MockForecastPort, MockForecastStorePort, MockGeocodingPort, MockReportRendererPort,
        MockResponseCachePort,
    };
    use chrono::{NaiveDate, Utc};
    use domain::{Coordinates, DailyForecast, DailyForecastSeries, DomainError};
    use mockall::predicate::eq;

    fn houston() -> Coordinates {
        Coordinates::new(29.76, -95.36, "Houston", "Texas", "United States").expect("valid")
    }

    fn report() -> ForecastReport {
        let days = (1..=7)
            .map(|d| DailyForecast {
                date: NaiveDate::from_ymd_opt(2025, 6, d).expect("date"),
                weather_code: 1,
                temperature_max_f: 90.0 + f64::from(d),
                temperature_min_f: 70.0,
                precipitation_in: 0.1,
                wind_speed_max_mph: 12.0,
            })
            .collect();
        ForecastReport {
            location: houston(),
            timezone: "America/Chicago".into(),
            daily: DailyForecastSeries::new(days).expect("non-empty"),
            fetched_at: Utc::now(),
        }
    }

    fn geocoder_ok(times: usize) -> MockGeocodingPort {
        let mut geo = MockGeocodingPort::new();
        geo.expect_resolve()
            .times(times)
            .returning(|_| Ok(houston()));
        geo
    }

    fn forecast_ok(times: usize) -> MockForecastPort {
        let mut fc = MockForecastPort::new();
        fc.expect_fetch().times(times).returning(|_| Ok(report()));
        fc
    }

    fn empty_cache() -> MockResponseCachePort {
        let mut cache = MockResponseCachePort::new();
        cache.expect_get().returning(|_| None);
        cache.expect_set().returning(|_, _| ());
        cache
    }

    fn service(
        geo: MockGeocodingPort,
        fc: MockForecastPort,
        cache: MockResponseCachePort,
    ) -> WeatherService {
        WeatherService::new(Arc::new(geo), Arc::new(fc), Arc::new(cache))
    }

    #[test]
    fn cache_key_keeps_location_verbatim() {
        assert_eq!(
            WeatherService::cache_key("Houston, Texas"),
            "forecast_Houston, Texas"
        );
        assert_ne!(
            WeatherService::cache_key("houston"),
            WeatherService::cache_key("Houston")
        );
    }

    #[tokio::test]
    async fn miss_runs_pipeline_and_stores() {
        let mut cache = MockResponseCachePort::new();
        cache
            .expect_get()
            .with(eq("forecast_Houston, Texas"))
            .times(1)
            .returning(|_| None);
        cache
            .expect_set()
            .withf(|key, data| key == "forecast_Houston, Texas" && data.city == "Houston")
            .times(1)
            .returning(|_, _| ());

        let svc = service(geocoder_ok(1), forecast_ok(1), cache);
        let outcome = svc.get_weather("Houston, Texas").await.expect("success");

        assert!(!outcome.from_cache);
        assert_eq!(outcome.data.state, "Texas");
        assert_eq!(outcome.data.forecast_summary.days, 7);
        assert!((outcome.data.forecast_summary.high_temp_f - 97.0).abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn hit_skips_upstream() {
        let cached = WeatherData::from(&report());
        let expected = cached.clone();

        let mut cache = MockResponseCachePort::new();
        cache
            .expect_get()
            .times(1)
            .returning(move |_| Some(cached.clone()));
        cache.expect_set().times(0);

        let svc = service(geocoder_ok(0), forecast_ok(0), cache);
        let outcome = svc.get_weather("Houston").await.expect("cached");

        assert!(outcome.from_cache);
        assert_eq!(outcome.data, expected);
    }

    #[tokio::test]
    async fn invalid_location_checked_before_cache() {
        let mut cache = MockResponseCachePort::new();
        cache.expect_get().times(0);
        cache.expect_set().times(0);

        let svc = service(geocoder_ok(0), forecast_ok(0), cache);

        let too_long = "a".repeat(101);
        for bad in ["", "   ", too_long.as_str()] {
            let err = svc.get_weather(bad).await.expect_err("invalid");
            assert!(err.is_invalid_input(), "{err:?}");
        }
    }

    #[tokio::test]
    async fn geocode_failure_skips_forecast_and_cache_store() {
        let mut geo = MockGeocodingPort::new();
        geo.expect_resolve()
            .times(1)
            .returning(|loc| Err(ApplicationError::LocationNotFound(loc.to_string())));

        let mut cache = MockResponseCachePort::new();
        cache.expect_get().returning(|_| None);
        cache.expect_set().times(0);

        let svc = service(geo, forecast_ok(0), cache);
        let err = svc.get_weather("Atlantis").await.expect_err("not found");

        assert!(matches!(err, ApplicationError::LocationNotFound(ref l) if l == "Atlantis"));
        assert!(err.is_upstream());
    }

    #[tokio::test]
    async fn forecast_failure_is_not_cached() {
        let mut fc = MockForecastPort::new();
        fc.expect_fetch()
            .times(1)
            .returning(|_| Err(ApplicationError::InvalidResponse("length mismatch".into())));

        let mut cache = MockResponseCachePort::new();
        cache.expect_get().returning(|_| None);
        cache.expect_set().times(0);

        let svc = service(geocoder_ok(1), fc, cache);
        let err = svc.get_weather("Houston").await.expect_err("invalid");

        assert!(matches!(err, ApplicationError::InvalidResponse(_)));
    }

    #[tokio::test]
    async fn geocoder_receives_trimmed_name() {
        let mut geo = MockGeocodingPort::new();
        geo.expect_resolve()
            .with(eq("Houston"))
            .times(1)
            .returning(|_| Ok(houston()));

        let svc = service(geo, forecast_ok(1), empty_cache());
        assert!(svc.fetch_report("  Houston ").await.is_ok());
    }

    #[tokio::test]
    async fn fetch_and_save_persists_report() {
        let mut store = MockForecastStorePort::new();
        store
            .expect_save()
            .withf(|_, location| location == "Houston, Texas")
            .times(1)
            .returning(|_, _| Ok(PathBuf::from("data/houston_texas_forecast.json")));

        let svc = service(geocoder_ok(1), forecast_ok(1), empty_cache()).with_store(Arc::new(store));
        let (report, path) = svc.fetch_and_save("Houston, Texas").await.expect("saved");

        assert_eq!(report.daily.len(), 7);
        assert_eq!(path, PathBuf::from("data/houston_texas_forecast.json"));
    }

    #[tokio::test]
    async fn fetch_and_save_requires_store() {
        let svc = service(geocoder_ok(0), forecast_ok(0), empty_cache());
        let err = svc.fetch_and_save("Houston").await.expect_err("no store");
        assert!(matches!(err, ApplicationError::Configuration(_)));
    }

    #[tokio::test]
    async fn storage_failure_propagates() {
        let mut store = MockForecastStorePort::new();
        store
            .expect_save()
            .returning(|_, _| Err(ApplicationError::Storage("read-only".into())));

        let svc = service(geocoder_ok(1), forecast_ok(1), empty_cache()).with_store(Arc::new(store));
        let err = svc.fetch_and_save("Houston").await.expect_err("storage");
        assert!(matches!(err, ApplicationError::Storage(_)));
    }

    #[test]
    fn render_report_passes_summary() {
        let mut renderer = MockReportRendererPort::new();
        renderer
            .expect_render()
            .withf(|_, summary| summary.days == 7)
            .times(1)
            .returning(|r, _| Ok(format!("<h1>{}</h1>", r.location.city())));
        renderer.expect_extension().return_const("html");

        let svc = service(geocoder_ok(0), forecast_ok(0), empty_cache())
            .with_renderer(Arc::new(renderer));
        let rendered = svc.render_report(&report()).expect("rendered");

        assert_eq!(rendered.content, "<h1>Houston</h1>");
        assert_eq!(rendered.extension, "html");
    }

    #[test]
    fn render_report_requires_renderer() {
        let svc = service(geocoder_ok(0), forecast_ok(0), empty_cache());
        assert!(matches!(
            svc.render_report(&report()),
            Err(ApplicationError::Configuration(_))
        ));
    }

    #[test]
    fn clear_cache_delegates() {
        let mut cache = MockResponseCachePort::new();
        cache.expect_clear().times(1).return_const(());

        let svc = service(geocoder_ok(0), forecast_ok(0), cache);
        svc.clear_cache();
    }

    #[tokio::test]
    async fn domain_error_converts() {
        let svc = service(geocoder_ok(0), forecast_ok(0), empty_cache());
        let err = svc.fetch_report("").await.expect_err("empty");
        assert!(matches!(err, ApplicationError::Domain(DomainError::InvalidLocation(_))));
    }
}
