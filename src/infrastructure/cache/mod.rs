//! Named result caches.
//!
//! Provides a [`CacheService`] trait with two implementations:
//! - [`MemoryCache`] - Bounded in-process LRU with per-entry TTL
//! - [`NullCache`] - No-op implementation for disabled caching
//!
//! The service uses a single cache, [`VETS_CACHE`], memoizing the vet list.

mod memory_cache;
mod null_cache;
mod service;

pub use memory_cache::MemoryCache;
pub use null_cache::NullCache;
pub use service::CacheService;

/// Name of the cache holding the vet list.
pub const VETS_CACHE: &str = "vets";
