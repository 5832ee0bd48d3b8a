//! Application state shared across handlers

use std::sync::Arc;

use application::WeatherService;
use infrastructure::AppConfig;

/// Shared application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// The forecast pipeline, including its response cache
    pub weather_service: Arc<WeatherService>,

    /// Application configuration
    pub config: Arc<AppConfig>,
}

impl AppState {
    /// Create state from a wired service and the loaded configuration
    #[must_use]
    pub fn new(weather_service: Arc<WeatherService>, config: AppConfig) -> Self {
        Self {
            weather_service,
            config: Arc::new(config),
        }
    }
}
