//! In-process LRU cache with a per-entry time to live.

use std::num::NonZeroUsize;
use std::time::{Duration, Instant};

use lru::LruCache;
use parking_lot::Mutex;
use tracing::{debug, info};

use super::service::CacheService;

struct Entry<V> {
    inserted_at: Instant,
    value: V,
}

/// Bounded cache: at most `capacity` entries, each valid for `ttl` after insert.
///
/// Expired entries are dropped lazily on the next read of their key.
pub struct MemoryCache<V> {
    name: String,
    ttl: Duration,
    entries: Mutex<LruCache<String, Entry<V>>>,
}

impl<V: Clone + Send> MemoryCache<V> {
    pub fn new(name: impl Into<String>, capacity: NonZeroUsize, ttl: Duration) -> Self {
        let name = name.into();
        info!(
            cache = %name,
            capacity = capacity.get(),
            ttl_seconds = ttl.as_secs(),
            "Cache initialized"
        );

        Self {
            name,
            ttl,
            entries: Mutex::new(LruCache::new(capacity)),
        }
    }

    pub fn capacity(&self) -> usize {
        self.entries.lock().cap().get()
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }
}

impl<V: Clone + Send> CacheService<V> for MemoryCache<V> {
    fn name(&self) -> &str {
        &self.name
    }

    fn get(&self, key: &str) -> Option<V> {
        let mut entries = self.entries.lock();

        let expired = match entries.get(key) {
            Some(entry) if entry.inserted_at.elapsed() < self.ttl => {
                debug!(cache = %self.name, key, "Cache HIT");
                return Some(entry.value.clone());
            }
            Some(_) => true,
            None => false,
        };

        if expired {
            entries.pop(key);
            debug!(cache = %self.name, key, "Cache entry expired");
        } else {
            debug!(cache = %self.name, key, "Cache MISS");
        }
        None
    }

    fn put(&self, key: &str, value: V) {
        let entry = Entry {
            inserted_at: Instant::now(),
            value,
        };
        if let Some((evicted, _)) = self.entries.lock().push(key.to_string(), entry)
            && evicted != key
        {
            debug!(cache = %self.name, key = %evicted, "Cache entry evicted");
        }
    }

    fn invalidate(&self, key: &str) {
        self.entries.lock().pop(key);
    }

    fn clear(&self) {
        self.entries.lock().clear();
        debug!(cache = %self.name, "Cache cleared");
    }

    fn len(&self) -> usize {
        self.entries.lock().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cache(capacity: usize, ttl: Duration) -> MemoryCache<String> {
        MemoryCache::new("test", NonZeroUsize::new(capacity).unwrap(), ttl)
    }

    #[test]
    fn test_hit_after_put() {
        let cache = cache(10, Duration::from_secs(60));
        cache.put("all", "vets".to_string());

        assert_eq!(cache.get("all"), Some("vets".to_string()));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_miss_for_unknown_key() {
        let cache = cache(10, Duration::from_secs(60));
        assert_eq!(cache.get("nope"), None);
    }

    #[test]
    fn test_entry_expires_after_ttl() {
        let cache = cache(10, Duration::from_millis(20));
        cache.put("all", "vets".to_string());

        std::thread::sleep(Duration::from_millis(40));

        assert_eq!(cache.get("all"), None);
        assert!(cache.is_empty());
    }

    #[test]
    fn test_capacity_evicts_least_recently_used() {
        let cache = cache(2, Duration::from_secs(60));
        cache.put("a", "1".to_string());
        cache.put("b", "2".to_string());

        // Touch "a" so "b" becomes the eviction candidate.
        assert!(cache.get("a").is_some());
        cache.put("c", "3".to_string());

        assert_eq!(cache.len(), 2);
        assert!(cache.get("a").is_some());
        assert!(cache.get("b").is_none());
        assert!(cache.get("c").is_some());
    }

    #[test]
    fn test_invalidate_and_clear() {
        let cache = cache(10, Duration::from_secs(60));
        cache.put("a", "1".to_string());
        cache.put("b", "2".to_string());

        cache.invalidate("a");
        assert_eq!(cache.get("a"), None);
        assert_eq!(cache.len(), 1);

        cache.clear();
        assert!(cache.is_empty());
    }

    #[test]
    fn test_reports_configuration() {
        let cache = cache(100, Duration::from_secs(60));
        assert_eq!(cache.capacity(), 100);
        assert_eq!(cache.ttl(), Duration::from_secs(60));
        assert_eq!(CacheService::<String>::name(&cache), "test");
    }
}
