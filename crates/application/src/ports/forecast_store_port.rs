//! Forecast store port
//!
//! Persists full forecast reports for the fetch-and-save and report paths.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use domain::ForecastReport;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for forecast persistence
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ForecastStorePort: Send + Sync {
    /// Save `report` for `location` and return the path written
    async fn save(
        &self,
        report: &ForecastReport,
        location: &str,
    ) -> Result<PathBuf, ApplicationError>;

    /// Load a previously saved report
    async fn load(&self, path: &Path) -> Result<ForecastReport, ApplicationError>;
}
