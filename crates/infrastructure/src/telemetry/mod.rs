//! Tracing initialization
//!
//! Installs a `tracing-subscriber` registry with an [`EnvFilter`] and a
//! text or JSON formatting layer. `RUST_LOG` wins over the configured level.

use tracing::info;
use tracing_subscriber::{
    EnvFilter, fmt::MakeWriter, layer::SubscriberExt, util::SubscriberInitExt,
};

use crate::config::{LogFormat, LoggingConfig};

/// Error type for tracing initialization
#[derive(Debug, thiserror::Error)]
pub enum TelemetryError {
    /// The configured filter directive could not be parsed
    #[error("Invalid log filter '{filter}': {reason}")]
    Filter {
        /// Directive as configured
        filter: String,
        /// Parser message
        reason: String,
    },

    /// A global subscriber was already installed
    #[error("Failed to initialize tracing: {0}")]
    Init(String),
}

/// Build the filter: `RUST_LOG` if set, otherwise the configured level
///
/// # Errors
///
/// Returns `Filter` if the configured level is not a valid directive.
pub fn env_filter(config: &LoggingConfig) -> Result<EnvFilter, TelemetryError> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }
    EnvFilter::try_new(&config.level).map_err(|e| TelemetryError::Filter {
        filter: config.level.clone(),
        reason: e.to_string(),
    })
}

/// Install the global tracing subscriber, writing to stdout
///
/// # Errors
///
/// Returns an error if the filter is invalid or a subscriber is already
/// installed.
pub fn init_tracing(config: &LoggingConfig) -> Result<(), TelemetryError> {
    init_tracing_with_writer(config, std::io::stdout)
}

/// Install the global tracing subscriber with a custom writer
///
/// The CLI logs to stderr so that stdout carries only command output.
///
/// # Errors
///
/// Returns an error if the filter is invalid or a subscriber is already
/// installed.
pub fn init_tracing_with_writer<W>(config: &LoggingConfig, writer: W) -> Result<(), TelemetryError>
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let filter = env_filter(config)?;
    let registry = tracing_subscriber::registry().with(filter);

    let result = match config.format {
        LogFormat::Text => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(true)
                    .with_writer(writer),
            )
            .try_init(),
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_current_span(true)
                    .with_target(true)
                    .with_writer(writer),
            )
            .try_init(),
    };
    result.map_err(|e| TelemetryError::Init(e.to_string()))?;

    info!(level = %config.level, format = ?config.format, "Tracing initialized");
    Ok(())
}
