//! Short-lived per-symbol cache for fetched market data
//!
//! Analyses stay fully independent; the cache only short-circuits duplicate
//! provider fetches for the same symbol inside one TTL window.

use crate::api::{AssetMetadata, PriceBar};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

use cached::{Cached, TimedCache};

/// One cached market fetch: the bar series plus whatever metadata came back
#[derive(Debug, Clone)]
pub struct CachedMarket {
    pub bars: Vec<PriceBar>,
    pub metadata: Option<AssetMetadata>,
}

/// Thread-safe timed cache keyed by normalized symbol
pub struct MarketCache {
    cache: Arc<RwLock<TimedCache<String, CachedMarket>>>,
}

impl MarketCache {
    /// Create a new cache with the specified TTL
    pub fn new(ttl: Duration) -> Self {
        Self {
            cache: Arc::new(RwLock::new(TimedCache::with_lifespan(ttl))),
        }
    }

    /// Get a cached market fetch for a symbol
    pub async fn get(&self, symbol: &str) -> Option<CachedMarket> {
        let mut cache = self.cache.write().await;
        let entry = cache.cache_get(symbol).cloned();
        if entry.is_some() {
            tracing::debug!("market cache hit for {symbol}");
        } else {
            tracing::debug!("market cache miss for {symbol}");
        }
        entry
    }

    /// Insert a market fetch for a symbol
    pub async fn insert(&self, symbol: String, value: CachedMarket) {
        let mut cache = self.cache.write().await;
        let _ = cache.cache_set(symbol, value);
    }

    /// Drop a single symbol's entry
    pub async fn invalidate(&self, symbol: &str) {
        let mut cache = self.cache.write().await;
        let _ = cache.cache_remove(symbol);
    }

    /// Clear all cached entries
    pub async fn clear(&self) {
        let mut cache = self.cache.write().await;
        cache.cache_clear();
    }

    /// Get the number of cached entries
    pub async fn len(&self) -> usize {
        let cache = self.cache.read().await;
        cache.cache_size()
    }

    /// Check if the cache is empty
    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

impl Clone for MarketCache {
    fn clone(&self) -> Self {
        Self {
            cache: Arc::clone(&self.cache),
        }
    }
}
