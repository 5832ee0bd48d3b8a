//! Retrying request executor
//!
//! Wraps an [`HttpTransport`] with [`with_retry`]. Every failure, whatever
//! its transport-level cause, comes back as [`WeatherError::Upstream`].

use std::sync::Arc;

use serde_json::Value;
use tracing::instrument;

use crate::error::WeatherError;
use crate::retry::{RetryConfig, RetryResult, with_retry};
use crate::transport::{HttpTransport, Query};

/// Executes GET requests with bounded retries and exponential backoff
#[derive(Debug, Clone)]
pub struct RetryingExecutor {
    transport: Arc<dyn HttpTransport>,
    retry: RetryConfig,
}

impl RetryingExecutor {
    /// Create an executor over the given transport
    pub fn new(transport: Arc<dyn HttpTransport>, retry: RetryConfig) -> Self {
        Self { transport, retry }
    }

    /// The retry policy in use
    #[must_use]
    pub const fn retry_config(&self) -> &RetryConfig {
        &self.retry
    }

    /// GET `url` with `query`, retrying transient failures
    #[instrument(skip(self, query), fields(url = %url))]
    pub async fn execute(&self, url: &str, query: &Query<'_>) -> Result<Value, WeatherError> {
        let RetryResult {
            result, attempts, ..
        } = with_retry(&self.retry, || self.transport.get_json(url, query)).await;

        result.map_err(|e| WeatherError::Upstream {
            attempts,
            reason: e.to_string(),
        })
    }
}
