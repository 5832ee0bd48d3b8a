//! Report renderer port

use domain::{ForecastReport, ForecastSummary};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for turning a forecast into a formatted document
#[cfg_attr(test, automock)]
pub trait ReportRendererPort: Send + Sync {
    /// Render `report` with its precomputed `summary`
    fn render(
        &self,
        report: &ForecastReport,
        summary: &ForecastSummary,
    ) -> Result<String, ApplicationError>;

    /// File extension of the rendered document, without the dot
    fn extension(&self) -> &'static str;
}
