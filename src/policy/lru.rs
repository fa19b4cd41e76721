//! Bounded key→value map with least-recently-used eviction.
//!
//! This is the primitive the ARC controller stacks four of: a hash index
//! into a slab-backed recency list, giving O(1) membership probes,
//! touches, inserts, targeted removals, and LRU eviction.
//!
//! ## Architecture
//!
//! ```text
//!   ┌──────────────────────────────────────────────────────────────────┐
//!   │                        LruCache<K, V>                            │
//!   │                                                                  │
//!   │   ┌──────────────────────────────────────────────────────────┐   │
//!   │   │  index: FxHashMap<K, Entry<V>>                           │   │
//!   │   │                                                          │   │
//!   │   │  ┌─────────┬──────────────────────────────────────┐      │   │
//!   │   │  │   Key   │  Entry { value, node: NodeId }       │      │   │
//!   │   │  ├─────────┼──────────────────────────────────────┤      │   │
//!   │   │  │ "k_1"   │  { v_1, id_0 } ───────────────┐      │      │   │
//!   │   │  │ "k_2"   │  { v_2, id_1 } ─────────┐     │      │      │   │
//!   │   │  └─────────┴─────────────────────────┼─────┼──────┘      │   │
//!   │   └────────────────────────────────────── ┼─────┼────────────┘   │
//!   │                                           ▼     ▼                │
//!   │   ┌──────────────────────────────────────────────────────────┐   │
//!   │   │  order: RecencyList<K>                                   │   │
//!   │   │                                                          │   │
//!   │   │  head ──► [k_2] ◄──► [k_1] ◄── tail                      │   │
//!   │   │           MRU                   LRU  ──► evicted first   │   │
//!   │   └──────────────────────────────────────────────────────────┘   │
//!   └──────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Operations
//!
//! | Operation  | Recency motion | Stats    | Complexity |
//! |------------|----------------|----------|------------|
//! | `check`    | none           | none     | O(1) avg   |
//! | `get`      | hit → MRU      | hit/miss | O(1) avg   |
//! | `touch`    | hit → MRU      | none     | O(1) avg   |
//! | `set`      | entry → MRU    | none     | O(1) avg   |
//! | `remove`   | unlink         | none     | O(1) avg   |
//! | `evict`    | drop LRU       | none     | O(1) avg   |
//!
//! The map and the list always agree: every indexed key occupies exactly one
//! list node and vice versa, and `len() <= capacity()` after every call.
//!
//! Ghost lists reuse this type with `V = ()`, tracking recency for keys
//! whose values live elsewhere (or nowhere).
//!
//! ## Example Usage
//!
//! ```
//! use arckit::policy::lru::LruCache;
//!
//! let mut cache = LruCache::new(2);
//! cache.set("a", 1);
//! cache.set("b", 2);
//!
//! // "a" is the LRU entry; setting a third key evicts it.
//! cache.set("c", 3);
//! assert!(cache.check("a").is_none());
//! assert_eq!(cache.check("b"), Some(&2));
//!
//! // get() refreshes recency, check() does not.
//! assert_eq!(cache.get("b"), Some(&2));
//! assert_eq!(cache.evict(), Some("c"));
//! ```
//!
//! ## Thread Safety
//!
//! Not thread-safe; wrap in external synchronization for shared use.

use std::borrow::Borrow;
use std::hash::Hash;

use rustc_hash::FxHashMap;

use crate::ds::recency_list::{NodeId, RecencyList};
use crate::metrics::CacheStats;
use crate::traits::{ReadOnlyCache, StatsProvider};

#[derive(Debug)]
struct Entry<V> {
    value: V,
    node: NodeId,
}

/// Fixed-capacity map with MRU→LRU ordering and O(1) operations.
///
/// # Type Parameters
///
/// - `K`: Key type, `Eq + Hash + Clone` (the key is held by both the index
///   and the recency list)
/// - `V`: Value type
#[derive(Debug)]
pub struct LruCache<K, V> {
    index: FxHashMap<K, Entry<V>>,
    order: RecencyList<K>,
    capacity: usize,
    stats: CacheStats,
}

impl<K, V> LruCache<K, V>
where
    K: Eq + Hash + Clone,
{
    /// Creates a cache holding at most `capacity` entries.
    ///
    /// `capacity` must be positive; a zero-capacity cache cannot hold the
    /// entry its own `set` inserts.
    pub fn new(capacity: usize) -> Self {
        debug_assert!(capacity > 0, "LruCache capacity must be positive");
        Self {
            index: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
            order: RecencyList::with_capacity(capacity),
            capacity,
            stats: CacheStats::default(),
        }
    }

    /// Membership probe. Returns the value without touching recency order
    /// or stats.
    pub fn check<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.get(key).map(|entry| &entry.value)
    }

    /// Looks up `key`, counting the outcome and moving a hit to MRU.
    pub fn get<Q>(&mut self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let node = match self.index.get(key) {
            Some(entry) => entry.node,
            None => {
                self.stats.record_miss();
                return None;
            }
        };
        self.order.move_to_front(node);
        self.stats.record_hit();
        self.index.get(key).map(|entry| &entry.value)
    }

    /// Moves `key` to MRU without reading its value or counting a hit.
    ///
    /// Returns `true` if the key was present.
    pub fn touch<Q>(&mut self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        match self.index.get(key) {
            Some(entry) => self.order.move_to_front(entry.node),
            None => false,
        }
    }

    /// Inserts or refreshes `key`.
    ///
    /// A present key has its value overwritten and moves to MRU. An absent
    /// key evicts the LRU entry first when the cache is full, then enters at
    /// MRU. Returns `true` on every accepted path.
    pub fn set(&mut self, key: K, value: V) -> bool {
        if let Some(entry) = self.index.get_mut(&key) {
            entry.value = value;
            let node = entry.node;
            self.order.move_to_front(node);
            return true;
        }

        if self.remaining() == 0 {
            if let Some(lru_key) = self.order.pop_back() {
                self.index.remove(&lru_key);
            }
        }

        let node = self.order.push_front(key.clone());
        self.index.insert(key, Entry { value, node });
        true
    }

    /// Deletes `key` and its list node, returning the stored value.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let entry = self.index.remove(key)?;
        self.order.remove(entry.node);
        Some(entry.value)
    }

    /// Removes the least recently used entry and returns its key.
    ///
    /// Returns `None` on an empty cache without mutating anything.
    pub fn evict(&mut self) -> Option<K> {
        let key = self.order.pop_back()?;
        self.index.remove(&key);
        Some(key)
    }

    /// Key at the LRU end, if any. Does not touch recency order.
    pub fn peek_lru(&self) -> Option<&K> {
        self.order.back()
    }

    /// Iterates keys from MRU to LRU.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.order.iter()
    }

    /// Current number of entries.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Returns `true` if the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Maximum number of entries.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Unused entry slots.
    pub fn remaining(&self) -> usize {
        self.capacity - self.index.len()
    }

    #[cfg(any(test, debug_assertions))]
    pub fn debug_validate_invariants(&self) {
        assert!(self.index.len() <= self.capacity);
        assert_eq!(self.index.len(), self.order.len());

        let mut listed = 0usize;
        for key in self.order.iter() {
            assert!(self.index.contains_key(key), "list key missing from index");
            listed += 1;
        }
        assert_eq!(listed, self.index.len());

        for entry in self.index.values() {
            assert!(self.order.contains(entry.node), "index holds stale node id");
        }

        self.order.debug_validate_invariants();
    }
}

impl<K, V> ReadOnlyCache<K> for LruCache<K, V>
where
    K: Eq + Hash + Clone,
{
    fn contains(&self, key: &K) -> bool {
        self.index.contains_key(key)
    }

    fn len(&self) -> usize {
        LruCache::len(self)
    }

    fn capacity(&self) -> usize {
        LruCache::capacity(self)
    }
}

impl<K, V> StatsProvider for LruCache<K, V> {
    fn stats(&self) -> &CacheStats {
        &self.stats
    }
}
