//! Open-Meteo endpoint configuration

use serde::{Deserialize, Serialize};

/// Endpoints and request parameters for the Open-Meteo APIs
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenMeteoConfig {
    /// Geocoding API base URL (default: <https://geocoding-api.open-meteo.com/v1>)
    #[serde(default = "default_geocoding_base_url")]
    pub geocoding_base_url: String,

    /// Forecast API base URL (default: <https://api.open-meteo.com/v1>)
    #[serde(default = "default_forecast_base_url")]
    pub forecast_base_url: String,

    /// Per-attempt request timeout in seconds (default: 10)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Number of forecast days (1-16, default: 7)
    #[serde(default = "default_forecast_days")]
    pub forecast_days: u8,
}

fn default_geocoding_base_url() -> String {
    "https://geocoding-api.open-meteo.com/v1".to_string()
}

fn default_forecast_base_url() -> String {
    "https://api.open-meteo.com/v1".to_string()
}

const fn default_timeout() -> u64 {
    10
}

const fn default_forecast_days() -> u8 {
    7
}

impl Default for OpenMeteoConfig {
    fn default() -> Self {
        Self {
            geocoding_base_url: default_geocoding_base_url(),
            forecast_base_url: default_forecast_base_url(),
            timeout_secs: default_timeout(),
            forecast_days: default_forecast_days(),
        }
    }
}

impl OpenMeteoConfig {
    /// Point both APIs at the same base URL (mock servers)
    #[must_use]
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            geocoding_base_url: base_url.to_string(),
            forecast_base_url: base_url.to_string(),
            ..Self::default()
        }
    }
}
