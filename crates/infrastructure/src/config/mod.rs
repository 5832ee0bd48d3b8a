//! Application configuration
//!
//! Split into focused sub-modules:
//! - `server`: HTTP server settings
//! - `weather`: default location, cache TTL, Open-Meteo endpoints
//! - `logging`: log level and format, data directory
//!
//! Retry settings reuse [`RetryConfig`] from the integration crate.
//!
//! Sources, later ones overriding earlier ones: built-in defaults, an
//! optional `config.toml` (or an explicit file), then `WEATHER_*`
//! environment variables with `__` separating nested keys, e.g.
//! `WEATHER_SERVER__PORT=8080`.

mod logging;
mod server;
mod weather;

use std::fmt;
use std::path::Path;

use integration_weather::RetryConfig;
use serde::{Deserialize, Serialize};

pub use logging::{LogFormat, LoggingConfig, StorageConfig};
pub use server::ServerConfig;
pub use weather::WeatherAppConfig;

/// Prefix of recognized environment variables
pub const ENV_PREFIX: &str = "WEATHER";

/// Application environment (development or production)
///
/// Controls whether internal error details reach HTTP clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Development environment - error details exposed
    #[default]
    Development,
    /// Production environment - error details hidden
    Production,
}

impl Environment {
    /// Whether this is the production environment
    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
        }
    }
}

impl std::str::FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Ok(Self::Development),
            "production" | "prod" => Ok(Self::Production),
            _ => Err(format!(
                "Invalid environment: {s}. Use 'development' or 'production'"
            )),
        }
    }
}

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Application environment
    #[serde(default)]
    pub environment: Environment,

    /// HTTP server settings
    #[serde(default)]
    pub server: ServerConfig,

    /// Forecast pipeline settings
    #[serde(default)]
    pub weather: WeatherAppConfig,

    /// Upstream retry policy
    #[serde(default)]
    pub retry: RetryConfig,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Data directory settings
    #[serde(default)]
    pub storage: StorageConfig,
}

impl AppConfig {
    /// Load configuration from `config.toml` (if present) and environment
    ///
    /// # Errors
    ///
    /// Returns an error if a source cannot be parsed or a value has the
    /// wrong type.
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from(None)
    }

    /// Load configuration, reading `path` instead of the default file
    ///
    /// An explicit `path` must exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing or malformed, or a value has
    /// the wrong type.
    pub fn load_from(path: Option<&Path>) -> Result<Self, config::ConfigError> {
        Self::build(path, environment_source())
    }

    fn build(
        path: Option<&Path>,
        environment: config::Environment,
    ) -> Result<Self, config::ConfigError> {
        let file = match path {
            Some(path) => config::File::from(path).required(true),
            None => config::File::with_name("config").required(false),
        };

        config::Config::builder()
            .add_source(file)
            .add_source(environment)
            .build()?
            .try_deserialize()
    }
}

fn environment_source() -> config::Environment {
    config::Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
}
