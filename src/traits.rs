//! # Cache Trait Seams
//!
//! Small traits shared by the LRU primitive and the ARC controller, so
//! capacity-aware code can be written against either.
//!
//! ## Trait Summary
//!
//! | Trait           | Purpose                                          |
//! |-----------------|--------------------------------------------------|
//! | `ReadOnlyCache` | Membership and occupancy without recency motion  |
//! | `StatsProvider` | Read-only access to hit/miss counters            |
//!
//! `ReadOnlyCache` is deliberately side-effect free: `contains` must not
//! reorder entries or advance counters, so monitoring code can probe a cache
//! without perturbing its eviction behavior. The key parameter is `?Sized`
//! so `String`-keyed caches can expose a `&str` surface.

use crate::metrics::CacheStats;

/// Read-only occupancy and membership operations.
///
/// # Example
///
/// ```
/// use arckit::policy::lru::LruCache;
/// use arckit::traits::ReadOnlyCache;
///
/// fn report<K, C: ReadOnlyCache<K>>(cache: &C) -> (usize, usize) {
///     (cache.len(), cache.remaining())
/// }
///
/// let mut cache: LruCache<u64, &str> = LruCache::new(8);
/// cache.set(1, "one");
/// assert_eq!(report(&cache), (1, 7));
/// ```
pub trait ReadOnlyCache<K: ?Sized> {
    /// Returns `true` if `key` holds a live entry. Never reorders or counts.
    fn contains(&self, key: &K) -> bool;

    /// Current number of live entries.
    fn len(&self) -> usize;

    /// Returns `true` if there are no live entries.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Maximum number of entries.
    fn capacity(&self) -> usize;

    /// Unused entry slots (`capacity - len`).
    fn remaining(&self) -> usize {
        self.capacity() - self.len()
    }
}

/// Read-only access to hit/miss counters.
pub trait StatsProvider {
    /// Counters accumulated so far.
    fn stats(&self) -> &CacheStats;
}
