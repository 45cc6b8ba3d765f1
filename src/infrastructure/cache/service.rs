//! Cache service trait.

/// A named, process-wide result cache.
///
/// Implementations must be thread-safe. Reads may return a stale value until
/// the entry expires; there is no cross-instance consistency.
///
/// # Implementations
///
/// - [`crate::infrastructure::cache::MemoryCache`] - In-process LRU with per-entry TTL
/// - [`crate::infrastructure::cache::NullCache`] - No-op implementation for disabled caching
pub trait CacheService<V>: Send + Sync {
    /// Cache name, used in logs and health output.
    fn name(&self) -> &str;

    /// Returns the cached value, or `None` on a miss or an expired entry.
    fn get(&self, key: &str) -> Option<V>;

    /// Stores a value, evicting the least recently used entry when full.
    fn put(&self, key: &str, value: V);

    /// Removes one entry.
    fn invalidate(&self, key: &str);

    /// Drops every entry. Called on shutdown.
    fn clear(&self);

    /// Number of live (not yet evicted) entries, expired ones included.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
