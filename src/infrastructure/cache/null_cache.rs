//! No-op cache implementation for disabled caching.

use super::service::CacheService;
use tracing::debug;

/// A cache implementation that does nothing.
///
/// Used when `VETS_CACHE_ENABLED=false`. Every lookup is a miss, so reads
/// always go to the database.
pub struct NullCache {
    name: String,
}

impl NullCache {
    /// Creates a new NullCache instance.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        debug!(cache = %name, "Using NullCache (caching disabled)");
        Self { name }
    }
}

impl<V> CacheService<V> for NullCache {
    fn name(&self) -> &str {
        &self.name
    }

    fn get(&self, _key: &str) -> Option<V> {
        None
    }

    fn put(&self, _key: &str, _value: V) {}

    fn invalidate(&self, _key: &str) {}

    fn clear(&self) {}

    fn len(&self) -> usize {
        0
    }
}
