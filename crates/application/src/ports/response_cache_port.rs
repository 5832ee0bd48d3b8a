//! Response cache port
//!
//! A time-to-live store in front of the forecast pipeline, keyed by the
//! location string exactly as the caller gave it.

#[cfg(test)]
use mockall::automock;

use crate::dto::WeatherData;

/// Port for the TTL response cache
///
/// Implementations must be safe to share between concurrently running
/// requests.
#[cfg_attr(test, automock)]
pub trait ResponseCachePort: Send + Sync + std::fmt::Debug {
    /// Get the value for `key` if it has not expired
    ///
    /// An expired entry is removed and reported as absent.
    fn get(&self, key: &str) -> Option<WeatherData>;

    /// Store `value` under `key`, replacing any prior entry and restarting
    /// its TTL
    fn set(&self, key: &str, value: WeatherData);

    /// Remove all entries
    fn clear(&self);
}
