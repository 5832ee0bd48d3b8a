//! In-memory TTL response cache
//!
//! Each entry stores its absolute expiry. Reads return an entry only while
//! `now <= expiry`; a stale entry found by a read is removed on the spot.
//! There is no background sweep. One lock guards the whole map.

use std::collections::HashMap;
use std::time::Duration;

use application::{WeatherData, ports::ResponseCachePort};
use parking_lot::Mutex;
use tokio::time::Instant;
use tracing::debug;

/// Default time-to-live for cached responses
pub const DEFAULT_TTL: Duration = Duration::from_secs(1800);

struct CacheEntry<V> {
    value: V,
    expires_at: Instant,
}

/// TTL cache keyed by string
pub struct ResponseCache<V> {
    ttl: Duration,
    entries: Mutex<HashMap<String, CacheEntry<V>>>,
}

impl<V> std::fmt::Debug for ResponseCache<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResponseCache")
            .field("ttl", &self.ttl)
            .field("entries", &self.entries.lock().len())
            .finish()
    }
}

impl<V: Clone> ResponseCache<V> {
    /// Create an empty cache whose entries live for `ttl`
    #[must_use]
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Configured time-to-live
    #[must_use]
    pub const fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Get a fresh value, evicting it instead if it has expired
    pub fn get(&self, key: &str) -> Option<V> {
        let now = Instant::now();
        let mut entries = self.entries.lock();

        match entries.get(key) {
            Some(entry) if now <= entry.expires_at => Some(entry.value.clone()),
            Some(_) => {
                entries.remove(key);
                debug!(key, "Evicted expired cache entry");
                None
            },
            None => None,
        }
    }

    /// Store `value`, replacing any prior entry and restarting its TTL
    pub fn set(&self, key: &str, value: V) {
        let entry = CacheEntry {
            value,
            expires_at: Instant::now() + self.ttl,
        };
        self.entries.lock().insert(key.to_string(), entry);
    }

    /// Remove every entry
    pub fn clear(&self) {
        self.entries.lock().clear();
    }

    /// Number of stored entries, including expired ones not yet read
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    /// Whether nothing is stored
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }
}

impl<V: Clone> Default for ResponseCache<V> {
    fn default() -> Self {
        Self::new(DEFAULT_TTL)
    }
}

impl ResponseCachePort for ResponseCache<WeatherData> {
    fn get(&self, key: &str) -> Option<WeatherData> {
        Self::get(self, key)
    }

    fn set(&self, key: &str, value: WeatherData) {
        Self::set(self, key, value);
    }

    fn clear(&self) {
        Self::clear(self);
    }
}
