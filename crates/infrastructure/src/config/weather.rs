//! Forecast pipeline configuration.

use std::time::Duration;

use integration_weather::OpenMeteoConfig;
use serde::{Deserialize, Serialize};

/// Weather lookup, caching and upstream API settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeatherAppConfig {
    /// Location used when a request names none
    #[serde(default = "default_city")]
    pub default_city: String,

    /// Response cache TTL in seconds
    #[serde(default = "default_cache_ttl")]
    pub cache_ttl_secs: u64,

    /// Geocoding API base URL
    #[serde(default = "default_geocoding_base_url")]
    pub geocoding_base_url: String,

    /// Forecast API base URL
    #[serde(default = "default_forecast_base_url")]
    pub forecast_base_url: String,

    /// Per-attempt request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Number of forecast days (1-16)
    #[serde(default = "default_forecast_days")]
    pub forecast_days: u8,
}

fn default_city() -> String {
    "Houston, Texas".to_string()
}

const fn default_cache_ttl() -> u64 {
    1800
}

fn default_geocoding_base_url() -> String {
    OpenMeteoConfig::default().geocoding_base_url
}

fn default_forecast_base_url() -> String {
    OpenMeteoConfig::default().forecast_base_url
}

const fn default_timeout() -> u64 {
    10
}

const fn default_forecast_days() -> u8 {
    7
}

impl Default for WeatherAppConfig {
    fn default() -> Self {
        Self {
            default_city: default_city(),
            cache_ttl_secs: default_cache_ttl(),
            geocoding_base_url: default_geocoding_base_url(),
            forecast_base_url: default_forecast_base_url(),
            timeout_secs: default_timeout(),
            forecast_days: default_forecast_days(),
        }
    }
}

impl WeatherAppConfig {
    /// Response cache TTL
    #[must_use]
    pub const fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }

    /// Client settings for the Open-Meteo integration
    #[must_use]
    pub fn open_meteo(&self) -> OpenMeteoConfig {
        OpenMeteoConfig {
            geocoding_base_url: self.geocoding_base_url.clone(),
            forecast_base_url: self.forecast_base_url.clone(),
            timeout_secs: self.timeout_secs,
            forecast_days: self.forecast_days,
        }
    }
}
