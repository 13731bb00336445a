use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use crate::models::OpportunityRecord;

/// Shared, immutable catalog snapshot
pub type Snapshot = Arc<Vec<OpportunityRecord>>;

/// In-memory snapshot cache
///
/// Holds fetched catalog snapshots for a fixed time-to-live. Concurrent
/// misses on one key share a single load.
#[derive(Clone)]
pub struct CatalogCache {
    snapshots: moka::future::Cache<String, Snapshot>,
}

impl CatalogCache {
    /// Create a cache holding at most `capacity` snapshots for `ttl_secs` each
    pub fn new(capacity: u64, ttl_secs: u64) -> Self {
        let snapshots = moka::future::CacheBuilder::new(capacity)
            .time_to_live(Duration::from_secs(ttl_secs))
            .build();

        Self { snapshots }
    }

    /// Cached snapshot for `key`, running `load` on a miss.
    ///
    /// Callers racing on the same missing key await one `load`; a failed
    /// load is not cached and every waiter receives the shared error.
    pub async fn get_or_load<F, E>(&self, key: &str, load: F) -> Result<Snapshot, Arc<E>>
    where
        F: Future<Output = Result<Snapshot, E>>,
        E: Send + Sync + 'static,
    {
        if self.snapshots.contains_key(key) {
            tracing::trace!("Cache hit: {}", key);
        } else {
            tracing::trace!("Cache miss: {}", key);
        }
        self.snapshots.try_get_with(key.to_string(), load).await
    }
}

/// Cache key builder
pub struct CacheKey;

impl CacheKey {
    /// Key for a snapshot fetched from an upstream URL
    pub fn remote(url: &str) -> String {
        format!("catalog:url:{}", url)
    }

    /// Key for a snapshot read from a local file
    pub fn file(path: &str) -> String {
        format!("catalog:file:{}", path)
    }
}
