//! In-memory caching using moka
//!
//! Caches base prices and the holiday list so a quote does not hit the
//! store on every request. Writes through `PUT /prices` invalidate the
//! affected entry.

use moka::future::Cache;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tracing::info;

use crate::pricing::date::CivilDate;

const HOLIDAYS_KEY: &str = "holidays";

/// Application cache for pricing inputs
#[derive(Clone)]
pub struct AppCache {
    /// Base prices (ticket type -> cost)
    pub base_prices: Cache<String, u32>,
    /// Holiday snapshot (single entry)
    pub holiday_snapshot: Cache<&'static str, Arc<[CivilDate]>>,
    /// Held shared while a base price is read from the store and cached,
    /// exclusive while a price is written and its entry invalidated.
    pub base_price_fill: Arc<RwLock<()>>,
}

impl AppCache {
    /// Create a new cache instance with the given TTL
    pub fn new(ttl: Duration) -> Self {
        Self {
            base_prices: Cache::builder()
                .max_capacity(100)
                .time_to_live(ttl)
                .build(),

            holiday_snapshot: Cache::builder().max_capacity(1).time_to_live(ttl).build(),

            base_price_fill: Arc::new(RwLock::new(())),
        }
    }

    pub async fn holidays(&self) -> Option<Arc<[CivilDate]>> {
        self.holiday_snapshot.get(HOLIDAYS_KEY).await
    }

    pub async fn insert_holidays(&self, holidays: Arc<[CivilDate]>) {
        self.holiday_snapshot.insert(HOLIDAYS_KEY, holidays).await;
    }

    /// Get cache statistics for monitoring
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            base_prices_size: self.base_prices.entry_count(),
            holidays_cached: self.holiday_snapshot.entry_count() > 0,
        }
    }

    /// Invalidate the base price of one ticket type
    pub async fn invalidate_base_price(&self, ticket_type: &str) {
        self.base_prices.invalidate(ticket_type).await;
        info!("Cache invalidated for ticket type: {}", ticket_type);
    }
}

impl Default for AppCache {
    fn default() -> Self {
        Self::new(Duration::from_secs(5 * 60))
    }
}

/// Cache statistics for monitoring
#[derive(Debug, Clone, Serialize)]
pub struct CacheStats {
    pub base_prices_size: u64,
    pub holidays_cached: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_base_price_invalidation() {
        let cache = AppCache::default();
        cache.base_prices.insert("night".to_string(), 19).await;
        assert_eq!(cache.base_prices.get("night").await, Some(19));

        cache.invalidate_base_price("night").await;
        assert_eq!(cache.base_prices.get("night").await, None);
    }

    #[tokio::test]
    async fn test_holiday_snapshot() {
        let cache = AppCache::default();
        assert!(cache.holidays().await.is_none());

        let snapshot: Arc<[CivilDate]> = vec![CivilDate::from_ymd(2019, 2, 18).unwrap()].into();
        cache.insert_holidays(snapshot.clone()).await;
        assert_eq!(cache.holidays().await.as_deref(), Some(&*snapshot));
    }
}
