//! Infrastructure layer - Adapters for external systems
//!
//! Implements ports defined in the application layer: the Open-Meteo
//! adapter, the TTL response cache, the JSON forecast store and the HTML
//! report renderer. Also owns configuration loading and tracing setup.

pub mod adapters;
pub mod cache;
pub mod config;
pub mod persistence;
pub mod telemetry;
pub mod templates;
mod wiring;

pub use adapters::WeatherAdapter;
pub use cache::ResponseCache;
pub use config::{
    AppConfig, Environment, LogFormat, LoggingConfig, ServerConfig, StorageConfig,
    WeatherAppConfig,
};
pub use persistence::{JsonForecastStore, forecast_file_name};
pub use telemetry::{TelemetryError, init_tracing, init_tracing_with_writer};
pub use templates::{HtmlReportRenderer, TemplateEngine, TemplateError};
pub use wiring::{Services, build_services};
