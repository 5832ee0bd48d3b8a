//! Persistence module
//!
//! File-based storage for fetched forecasts.

mod error;
mod forecast_store;

pub use error::map_io_error;
pub use forecast_store::{JsonForecastStore, forecast_file_name};
