//! In-memory lookup cache.
//!
//! [`LookupCache`] holds resolved items keyed by the fingerprint of the
//! normalized search name (see [`crate::normalize`]). It is a pure
//! TTL-gated point cache: no maximum size and no LRU, acceptable because
//! item identity keys are bounded by distinct search terms over the
//! process lifetime. Expiry is logical — a stale entry reports absent and
//! is reclaimed lazily by moka; this crate never sweeps.
//!
//! The cache is an explicitly constructed object owned by the service,
//! not a module-level singleton, so tests get a fresh cache per instance.
//! Concurrent writers to the same key are last-write-wins with no
//! atomicity guarantee across the surrounding read-then-write sequences.

use std::time::Duration;

use moka::future::Cache;

use crate::telemetry;
use crate::types::StoredItem;

/// Configuration for the lookup cache.
///
/// ```rust
/// # use shennong::CacheConfig;
/// # use std::time::Duration;
/// let config = CacheConfig::new().ttl(Duration::from_secs(600));
/// ```
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// Time-to-live for cached entries. Default: 3 600 000 ms (1 hour).
    pub ttl: Duration,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_millis(3_600_000),
        }
    }
}

impl CacheConfig {
    /// Create a new config with the default TTL.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the time-to-live for cached entries.
    pub fn ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }
}

/// TTL-gated point cache for resolved items.
pub struct LookupCache {
    cache: Cache<u64, StoredItem>,
}

impl LookupCache {
    /// Create a cache with the given configuration.
    pub fn new(config: &CacheConfig) -> Self {
        let cache = Cache::builder().time_to_live(config.ttl).build();
        Self { cache }
    }

    /// Look up a cached item by fingerprint.
    ///
    /// Returns `None` when the entry is absent or older than the TTL.
    /// Emits cache hit/miss metrics.
    pub async fn get(&self, fingerprint: u64) -> Option<StoredItem> {
        match self.cache.get(&fingerprint).await {
            Some(item) => {
                metrics::counter!(telemetry::CACHE_HITS_TOTAL).increment(1);
                Some(item)
            }
            None => {
                metrics::counter!(telemetry::CACHE_MISSES_TOTAL).increment(1);
                None
            }
        }
    }

    /// Store or overwrite an entry, stamping it with the current time.
    pub async fn insert(&self, fingerprint: u64, item: StoredItem) {
        self.cache.insert(fingerprint, item).await;
    }
}

impl Default for LookupCache {
    fn default() -> Self {
        Self::new(&CacheConfig::default())
    }
}
