//! Construction of the weather service from configuration
//!
//! Both binaries build the same object graph: one Open-Meteo adapter
//! serving as geocoder and forecast fetcher, one response cache, the JSON
//! store under the data directory and the HTML renderer.

use std::sync::Arc;

use application::{ApplicationError, WeatherData, WeatherService};
use tracing::debug;

use crate::{
    AppConfig, HtmlReportRenderer, JsonForecastStore, ResponseCache, WeatherAdapter,
};

/// Process-wide services built once at startup
#[derive(Debug, Clone)]
pub struct Services {
    /// The forecast pipeline
    pub weather: Arc<WeatherService>,
    /// The cache in front of it, kept for inspection and clearing
    pub cache: Arc<ResponseCache<WeatherData>>,
}

/// Wire adapters, cache, store and renderer into a [`WeatherService`]
///
/// # Errors
///
/// Returns a configuration error if the HTTP client or the template
/// engine cannot be initialized.
pub fn build_services(config: &AppConfig) -> Result<Services, ApplicationError> {
    let adapter = Arc::new(WeatherAdapter::new(
        &config.weather.open_meteo(),
        config.retry.clone(),
    )?);
    let cache = Arc::new(ResponseCache::<WeatherData>::new(config.weather.cache_ttl()));
    let store = Arc::new(JsonForecastStore::new(&config.storage.data_dir));
    let renderer = Arc::new(HtmlReportRenderer::new()?);

    debug!(
        ttl_secs = config.weather.cache_ttl_secs,
        data_dir = %config.storage.data_dir.display(),
        "Weather service wired"
    );

    let weather = WeatherService::new(adapter.clone(), adapter, cache.clone())
        .with_store(store)
        .with_renderer(renderer);

    Ok(Services {
        weather: Arc::new(weather),
        cache,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_from_defaults() {
        let services = build_services(&AppConfig::default()).expect("services");
        assert!(services.cache.is_empty());
        assert_eq!(services.cache.ttl(), std::time::Duration::from_secs(1800));
    }

    #[test]
    fn cache_is_shared_with_service() {
        let services = build_services(&AppConfig::default()).expect("services");
        services.weather.clear_cache();
        assert!(services.cache.is_empty());
    }
}
