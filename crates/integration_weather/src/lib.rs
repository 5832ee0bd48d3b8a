//! Open-Meteo weather integration
//!
//! Geocoding and daily forecasts from the Open-Meteo APIs
//! (<https://open-meteo.com>), which need no API key. Requests go through a
//! retrying executor: transient failures are retried with exponential
//! backoff, client errors and malformed payload shapes are not.

pub mod client;
pub mod config;
pub mod error;
pub mod executor;
pub mod forecast;
pub mod geocoding;
mod models;
pub mod retry;
pub mod transport;

pub use client::OpenMeteoClient;
pub use config::OpenMeteoConfig;
pub use error::{TransportError, WeatherError};
pub use executor::RetryingExecutor;
pub use forecast::{DAILY_FIELDS, OpenMeteoForecast, validate_forecast};
pub use geocoding::OpenMeteoGeocoder;
pub use retry::{RetryConfig, Retryable};
pub use transport::{HttpTransport, Query, ReqwestTransport};
