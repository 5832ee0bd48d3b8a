//! Domain entities - forecast series and the values derived from them

mod forecast;
mod forecast_summary;

pub use forecast::{DailyForecast, DailyForecastSeries, ForecastReport};
pub use forecast_summary::{ForecastSummary, summarize};
