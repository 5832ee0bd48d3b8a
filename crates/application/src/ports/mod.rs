//! Port definitions for application layer
//!
//! Ports are interfaces that define how the application interacts with
//! external systems. Adapters in the infrastructure layer implement these ports.

mod forecast_port;
mod forecast_store_port;
mod geocoding_port;
mod report_renderer_port;
mod response_cache_port;

pub use forecast_port::ForecastPort;
#[cfg(test)]
pub use forecast_port::MockForecastPort;
pub use forecast_store_port::ForecastStorePort;
#[cfg(test)]
pub use forecast_store_port::MockForecastStorePort;
pub use geocoding_port::GeocodingPort;
#[cfg(test)]
pub use geocoding_port::MockGeocodingPort;
#[cfg(test)]
pub use report_renderer_port::MockReportRendererPort;
pub use report_renderer_port::ReportRendererPort;
#[cfg(test)]
pub use response_cache_port::MockResponseCachePort;
pub use response_cache_port::ResponseCachePort;
