//! Application layer - Use cases and orchestration
//!
//! Ties the geocoder, the forecast fetcher, the response cache and the
//! forecast store together behind [`WeatherService`]. Adapters in the
//! infrastructure layer implement the ports defined here.

pub mod dto;
pub mod error;
pub mod ports;
pub mod services;

pub use dto::{WeatherData, WeatherOutcome};
pub use error::ApplicationError;
pub use ports::*;
pub use services::*;
