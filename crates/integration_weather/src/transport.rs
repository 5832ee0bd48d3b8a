//! HTTP client adapter
//!
//! One outbound GET with a timeout, decoded as JSON. No retries here; see
//! [`crate::executor::RetryingExecutor`].

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::debug;

use crate::error::{TransportError, WeatherError};

/// Query parameters as ordered key/value pairs
pub type Query<'a> = [(&'a str, String)];

/// A single-shot JSON GET
#[async_trait]
pub trait HttpTransport: Send + Sync + std::fmt::Debug {
    /// Perform one GET request and decode the body as JSON
    async fn get_json(&self, url: &str, query: &Query<'_>) -> Result<Value, TransportError>;
}

/// `reqwest`-backed transport
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Create a transport with the given per-request timeout
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(timeout: Duration) -> Result<Self, WeatherError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("weathercast/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| WeatherError::ClientInit(e.to_string()))?;

        Ok(Self { client })
    }

    fn classify(err: &reqwest::Error) -> TransportError {
        if err.is_timeout() {
            TransportError::Timeout
        } else if err.is_connect() {
            TransportError::Connection(err.to_string())
        } else if err.is_decode() {
            TransportError::MalformedBody(err.to_string())
        } else {
            TransportError::Request(err.to_string())
        }
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn get_json(&self, url: &str, query: &Query<'_>) -> Result<Value, TransportError> {
        debug!(url = %url, "Sending request");

        let response = self
            .client
            .get(url)
            .query(query)
            .send()
            .await
            .map_err(|e| Self::classify(&e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(|e| Self::classify(&e))?;
        serde_json::from_str(&body).map_err(|e| TransportError::MalformedBody(e.to_string()))
    }
}
