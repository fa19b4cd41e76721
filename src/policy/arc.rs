//! Adaptive Replacement Cache (ARC) controller.
//!
//! Four LRU instances plus a moving target marker decide, on every access,
//! which keys stay live in memory, which are remembered only as recency
//! hints (ghosts), and which are forgotten. A flat-file blob store keeps the
//! bytes for every tracked key so a ghost hit can bring its value back.
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────────────────┐
//! │                            ArcCache Layout                             │
//! │                                                                        │
//! │        L1 — seen once                     L2 — seen repeatedly         │
//! │   ┌──────────────────────────┐      ┌──────────────────────────┐       │
//! │   │  T1: LruCache<_, Vec<u8>>│      │  T2: LruCache<_, Vec<u8>>│  live │
//! │   │  MRU ──────────► LRU     │      │  MRU ──────────► LRU     │ values│
//! │   └────────────┬─────────────┘      └────────────┬─────────────┘       │
//! │                │ evict                           │ evict               │
//! │                ▼                                 ▼                     │
//! │   ┌──────────────────────────┐      ┌──────────────────────────┐       │
//! │   │  B1: LruCache<_, ()>     │      │  B2: LruCache<_, ()>     │ ghost │
//! │   │  keys only               │      │  keys only               │  keys │
//! │   └──────────────────────────┘      └──────────────────────────┘       │
//! │                                                                        │
//! │   target (p): desired size of T1, 0 ..= capacity                       │
//! │     • hit in B1 → target += max(|B2|/|B1|, 1)  (favor recency)         │
//! │     • hit in B2 → target -= max(|B1|/|B2|, 1)  (favor frequency)       │
//! │                                                                        │
//! │   BlobStore: one file per tracked key; read on ghost hits so the       │
//! │   promoted entry regains the value that was dropped from memory        │
//! └────────────────────────────────────────────────────────────────────────┘
//!
//! Miss Flow (new key)
//! ───────────────────
//!   set("new", v):
//!     1. Not tracked anywhere → make room per the L1/L2 occupancy rules
//!     2. Write v to the blob store
//!     3. Insert at T1 MRU (one-time keys never pollute T2)
//!
//! Reclassification Flow (tracked key)
//! ───────────────────────────────────
//!   access(k):
//!     k ∈ T1 → move to T2 MRU (second touch proves reuse)
//!     k ∈ T2 → refresh to T2 MRU
//!     k ∈ B1 → raise target, read value from blob store, replace(), T2 MRU
//!     k ∈ B2 → lower target, read value from blob store, replace(), T2 MRU
//!
//! Replace Flow (make room in T1 ∪ T2)
//! ───────────────────────────────────
//!   replace(k):
//!     if |T1| > 0 and (|T1| > target, or k ∈ B2 and |T1| == target):
//!       demote T1 LRU → B1 ghost
//!     else:
//!       demote T2 LRU → B2 ghost
//!     (ghost budget full → drop the ghost target's LRU key and its file)
//! ```
//!
//! ## Key Components
//!
//! - [`ArcCache`]: the controller
//! - [`ListKind`]: which of the four lists a key occupies
//! - [`Removed`]: what [`ArcCache::remove`] took out (live value vs ghost)
//!
//! ## Operations
//!
//! | Operation  | Time     | Notes                                         |
//! |------------|----------|-----------------------------------------------|
//! | `get`      | O(1)*    | *plus one blob read on a ghost hit            |
//! | `set`      | O(1)*    | *plus blob write, and removes on evictions    |
//! | `remove`   | O(1)*    | *plus one blob remove                         |
//! | `peek`     | O(1)     | pure read, no reordering, no stats            |
//! | `location` | O(1)     | pure read                                     |
//!
//! ## Invariants
//!
//! With `c` the configured capacity, after every completed operation:
//!
//! - |T1| + |T2| ≤ c and |B1| + |B2| ≤ c
//! - |T1| + |B1| ≤ c and |T1| + |T2| + |B1| + |B2| ≤ 2c
//! - the four key sets are pairwise disjoint
//! - 0 ≤ target ≤ c
//! - every tracked key has a blob file
//!
//! ## Example Usage
//!
//! ```
//! use arckit::policy::arc::ArcCache;
//!
//! let dir = tempfile::tempdir().unwrap();
//! let mut cache = ArcCache::with_directory(64, dir.path().join("blobs")).unwrap();
//!
//! cache.set("page1", b"contents".to_vec()).unwrap();
//! assert_eq!(cache.get("page1").unwrap(), Some(b"contents".to_vec()));
//!
//! // The first get promoted "page1" from T1 (seen once) into T2.
//! assert_eq!(cache.t2_len(), 1);
//! ```
//!
//! ## Thread Safety
//!
//! Single-threaded by design; every operation completes before the next may
//! begin. Wrap in external synchronization for shared use. The blob
//! directory assumes exclusive access: two caches over one directory is
//! undefined.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::builder::DEFAULT_DIRECTORY;
use crate::error::{ArcError, ConfigError, StoreError};
use crate::metrics::{ArcStateSnapshot, CacheStats};
use crate::policy::lru::LruCache;
use crate::store::BlobStore;
use crate::traits::{ReadOnlyCache, StatsProvider};

/// Which of the four ARC lists a key currently occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    /// Live, seen once since entering.
    T1,
    /// Live, seen at least twice.
    T2,
    /// Ghost, recently evicted from T1.
    B1,
    /// Ghost, recently evicted from T2.
    B2,
}

/// Outcome of a successful [`ArcCache::remove`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Removed {
    /// The key held a live value in T1 or T2.
    Live(Vec<u8>),
    /// The key was tracked only as a ghost entry; no value was in memory.
    Ghost,
}

/// Fixed-capacity key/value cache with adaptive replacement.
///
/// Keys are strings (used verbatim as blob file names), values are byte
/// vectors. Capacity counts entries; live entries (T1 ∪ T2) never exceed
/// it, and ghost bookkeeping (B1 ∪ B2) is bounded by it separately.
///
/// # Example
///
/// ```
/// use arckit::policy::arc::{ArcCache, ListKind};
///
/// let dir = tempfile::tempdir().unwrap();
/// let mut cache = ArcCache::with_directory(2, dir.path().join("blobs")).unwrap();
///
/// cache.set("a", vec![1]).unwrap();
/// cache.set("b", vec![2]).unwrap();
/// cache.set("a", vec![3]).unwrap(); // second touch: "a" now frequent
///
/// assert_eq!(cache.location("a"), Some(ListKind::T2));
/// assert_eq!(cache.get("a").unwrap(), Some(vec![3]));
/// ```
pub struct ArcCache {
    /// Live entries seen once. MRU at the front.
    t1: LruCache<String, Vec<u8>>,
    /// Live entries seen at least twice.
    t2: LruCache<String, Vec<u8>>,
    /// Ghost keys recently evicted from T1.
    b1: LruCache<String, ()>,
    /// Ghost keys recently evicted from T2.
    b2: LruCache<String, ()>,
    /// On-disk value store for every tracked key.
    store: BlobStore,
    /// Target size for T1; adapts on ghost hits.
    target: usize,
    capacity: usize,
    stats: CacheStats,
}

impl ArcCache {
    /// Creates a cache of `capacity` entries backed by the default blob
    /// directory (`cache_directory`, relative to the working directory).
    ///
    /// Fails with [`ArcError::Config`] when `capacity` is zero, or
    /// [`ArcError::Store`] when the directory cannot be created.
    pub fn new(capacity: usize) -> Result<Self, ArcError> {
        Self::with_directory(capacity, DEFAULT_DIRECTORY)
    }

    /// Creates a cache of `capacity` entries with its blob store rooted at
    /// `directory`.
    pub fn with_directory(
        capacity: usize,
        directory: impl Into<PathBuf>,
    ) -> Result<Self, ArcError> {
        if capacity == 0 {
            return Err(ConfigError::new("capacity must be greater than zero").into());
        }
        let store = BlobStore::open(directory)?;
        Ok(Self {
            t1: LruCache::new(capacity),
            t2: LruCache::new(capacity),
            b1: LruCache::new(capacity),
            b2: LruCache::new(capacity),
            store,
            target: 0,
            capacity,
            stats: CacheStats::default(),
        })
    }

    /// Looks up `key`, counting the outcome and reclassifying the entry.
    ///
    /// A live hit returns the value, counts a hit, and promotes or
    /// refreshes the entry into T2. A ghost hit reads the value back from
    /// the blob store and promotes it into T2 but reports `None` and counts
    /// neither hit nor miss; the next `get` will see it live. A full miss
    /// counts a miss.
    pub fn get(&mut self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        match self.location(key) {
            Some(kind) => {
                let cached = self.peek(key).map(|value| value.to_vec());
                self.access(key)?;
                if matches!(kind, ListKind::T1 | ListKind::T2) {
                    self.stats.record_hit();
                    Ok(cached)
                } else {
                    Ok(None)
                }
            }
            None => {
                self.stats.record_miss();
                Ok(None)
            }
        }
    }

    /// Associates `value` with `key`, evicting as needed to make room.
    ///
    /// A key already tracked anywhere in the directory is reclassified into
    /// T2 and overwritten with `value`. A new key lands at T1 MRU after its
    /// value is written to the blob store. Returns `Ok(true)` on every
    /// accepted path.
    pub fn set(&mut self, key: &str, value: Vec<u8>) -> Result<bool, StoreError> {
        let t1_len = self.t1.len();
        let l1 = t1_len + self.b1.len();
        let l2 = self.t2.len() + self.b2.len();
        let total = l1 + l2;

        if self.location(key).is_some() {
            self.access(key)?;
            // access left the key at T2 MRU; replace the stored bytes.
            self.t2.set(key.to_owned(), value);
            return Ok(true);
        }

        if l1 == self.capacity {
            // L1 holds a full capacity's worth of pages.
            if t1_len < self.capacity {
                if let Some(ghost) = self.b1.evict() {
                    self.store.remove(&ghost)?;
                }
                self.replace(key)?;
            } else if let Some(victim) = self.t1.evict() {
                // B1 is empty and T1 is full: shrink T1 directly, no ghost.
                self.store.remove(&victim)?;
            }
        } else if total >= self.capacity {
            // L1 has slack but the directory as a whole is at least full.
            if total == 2 * self.capacity {
                if let Some(ghost) = self.b2.evict() {
                    self.store.remove(&ghost)?;
                }
            }
            self.replace(key)?;
        }

        self.store.write(key, &value)?;
        self.t1.set(key.to_owned(), value);
        Ok(true)
    }

    /// Removes `key` from whichever list tracks it and deletes its blob
    /// file.
    ///
    /// Returns [`Removed::Live`] with the in-memory value for cache-resident
    /// keys, [`Removed::Ghost`] for ghost-resident keys, and `None` for
    /// untracked keys.
    pub fn remove(&mut self, key: &str) -> Result<Option<Removed>, StoreError> {
        let removed = if let Some(value) = self.t1.remove(key) {
            Removed::Live(value)
        } else if let Some(value) = self.t2.remove(key) {
            Removed::Live(value)
        } else if self.b1.remove(key).is_some() || self.b2.remove(key).is_some() {
            Removed::Ghost
        } else {
            return Ok(None);
        };

        self.store.remove(key)?;
        Ok(Some(removed))
    }

    /// Returns the live value for `key` without touching recency order or
    /// stats. `None` for ghost-resident and untracked keys.
    pub fn peek(&self, key: &str) -> Option<&[u8]> {
        self.t1
            .check(key)
            .or_else(|| self.t2.check(key))
            .map(Vec::as_slice)
    }

    /// Which list tracks `key`, if any. Pure read.
    pub fn location(&self, key: &str) -> Option<ListKind> {
        if self.t1.check(key).is_some() {
            Some(ListKind::T1)
        } else if self.t2.check(key).is_some() {
            Some(ListKind::T2)
        } else if self.b1.check(key).is_some() {
            Some(ListKind::B1)
        } else if self.b2.check(key).is_some() {
            Some(ListKind::B2)
        } else {
            None
        }
    }

    /// Reclassifies a key already somewhere in the directory; untracked
    /// keys are left alone. Ghost hits adapt the target and recover the
    /// value from the blob store.
    fn access(&mut self, key: &str) -> Result<(), StoreError> {
        if let Some(value) = self.t1.remove(key) {
            // Second touch: recent → frequent.
            self.t2.set(key.to_owned(), value);
            return Ok(());
        }
        if self.t2.touch(key) {
            return Ok(());
        }

        let b1_len = self.b1.len();
        let b2_len = self.b2.len();

        if self.b1.check(key).is_some() {
            let shift = (b2_len / b1_len).max(1);
            self.target = (self.target + shift).min(self.capacity);
            let value = self.store.read(key)?;
            // Pin the key at B1 MRU so replace() cannot pick it as B1's LRU.
            self.b1.touch(key);
            self.replace(key)?;
            self.b1.remove(key);
            self.t2.set(key.to_owned(), value);
            return Ok(());
        }

        if self.b2.check(key).is_some() {
            let shift = (b1_len / b2_len).max(1);
            self.target = self.target.saturating_sub(shift);
            let value = self.store.read(key)?;
            self.b2.touch(key);
            self.replace(key)?;
            self.b2.remove(key);
            self.t2.set(key.to_owned(), value);
            return Ok(());
        }

        Ok(())
    }

    /// Frees one slot in T1 ∪ T2 by demoting a LRU entry to its ghost list.
    ///
    /// The victim list follows the target marker: T1 is shrunk while it
    /// exceeds the target (or ties it on a B2 hit), otherwise T2. When the
    /// ghost budget is already full, the ghost target's LRU key is dropped
    /// first, along with its blob file.
    fn replace(&mut self, key: &str) -> Result<(), StoreError> {
        let t1_len = self.t1.len();
        let ghost_total = self.b1.len() + self.b2.len();
        let b2_hit = self.b2.check(key).is_some();

        if t1_len > 0 && ((b2_hit && t1_len == self.target) || t1_len > self.target) {
            if let Some(victim) = self.t1.evict() {
                if ghost_total == self.capacity {
                    self.drop_ghost_slot(true, key)?;
                }
                self.b1.set(victim, ());
            }
        } else if let Some(victim) = self.t2.evict() {
            if ghost_total == self.capacity {
                self.drop_ghost_slot(false, key)?;
            }
            self.b2.set(victim, ());
        }

        Ok(())
    }

    /// Drops one ghost key (and its blob file) ahead of a demotion that
    /// would overflow the ghost budget. Prefers the list receiving the
    /// demotion, falling back to its sibling when empty.
    ///
    /// `key` is the key being reclassified: it is mid-promotion out of a
    /// ghost list, so its slot frees up on its own and its blob file must
    /// survive. It can only surface here as a list's LRU when it is the
    /// sole occupant, in which case nothing needs dropping.
    fn drop_ghost_slot(&mut self, b1_first: bool, key: &str) -> Result<(), StoreError> {
        let dropped = {
            let (primary, sibling) = if b1_first {
                (&mut self.b1, &mut self.b2)
            } else {
                (&mut self.b2, &mut self.b1)
            };
            let target = if primary.is_empty() { sibling } else { primary };
            if target.peek_lru().map(String::as_str) == Some(key) {
                None
            } else {
                target.evict()
            }
        };

        match dropped {
            Some(ghost) => self.store.remove(&ghost),
            None => Ok(()),
        }
    }

    /// Live entries (|T1| + |T2|).
    pub fn len(&self) -> usize {
        self.t1.len() + self.t2.len()
    }

    /// Returns `true` if no live entries are held.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Maximum number of live entries.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Unused live-entry slots.
    pub fn remaining(&self) -> usize {
        self.capacity - self.len()
    }

    /// Current target size for T1. Starts at zero; ghost hits move it.
    pub fn target(&self) -> usize {
        self.target
    }

    /// Entries in T1 (live, seen once).
    pub fn t1_len(&self) -> usize {
        self.t1.len()
    }

    /// Entries in T2 (live, seen repeatedly).
    pub fn t2_len(&self) -> usize {
        self.t2.len()
    }

    /// Ghost keys in B1.
    pub fn b1_len(&self) -> usize {
        self.b1.len()
    }

    /// Ghost keys in B2.
    pub fn b2_len(&self) -> usize {
        self.b2.len()
    }

    /// Point-in-time gauges for all four lists and the target marker.
    pub fn snapshot(&self) -> ArcStateSnapshot {
        ArcStateSnapshot {
            t1_len: self.t1.len(),
            t2_len: self.t2.len(),
            b1_len: self.b1.len(),
            b2_len: self.b2.len(),
            target: self.target,
            len: self.len(),
            capacity: self.capacity,
        }
    }

    /// The blob store directory.
    pub fn directory(&self) -> &Path {
        self.store.root()
    }

    #[cfg(any(test, debug_assertions))]
    pub fn debug_validate_invariants(&self) {
        use std::collections::HashSet;

        let t1 = self.t1.len();
        let t2 = self.t2.len();
        let b1 = self.b1.len();
        let b2 = self.b2.len();

        assert!(
            t1 + t2 <= self.capacity,
            "live entries {} exceed capacity {}",
            t1 + t2,
            self.capacity
        );
        assert!(
            b1 + b2 <= self.capacity,
            "ghost entries {} exceed capacity {}",
            b1 + b2,
            self.capacity
        );
        assert!(
            t1 + b1 <= self.capacity,
            "L1 size {} exceeds capacity {}",
            t1 + b1,
            self.capacity
        );
        assert!(
            t1 + t2 + b1 + b2 <= 2 * self.capacity,
            "directory size {} exceeds twice the capacity",
            t1 + t2 + b1 + b2
        );
        assert!(
            self.target <= self.capacity,
            "target {} exceeds capacity {}",
            self.target,
            self.capacity
        );
        assert_eq!(self.len(), t1 + t2);
        assert_eq!(self.remaining(), self.capacity - self.len());

        let mut seen: HashSet<&str> = HashSet::new();
        let tracked = self
            .t1
            .keys()
            .chain(self.t2.keys())
            .chain(self.b1.keys())
            .chain(self.b2.keys());
        for key in tracked {
            assert!(seen.insert(key.as_str()), "key {key:?} tracked twice");
            assert!(
                self.store.contains(key),
                "no blob file for tracked key {key:?}"
            );
        }

        self.t1.debug_validate_invariants();
        self.t2.debug_validate_invariants();
        self.b1.debug_validate_invariants();
        self.b2.debug_validate_invariants();
    }
}

impl ReadOnlyCache<str> for ArcCache {
    fn contains(&self, key: &str) -> bool {
        self.peek(key).is_some()
    }

    fn len(&self) -> usize {
        ArcCache::len(self)
    }

    fn capacity(&self) -> usize {
        ArcCache::capacity(self)
    }
}

impl StatsProvider for ArcCache {
    fn stats(&self) -> &CacheStats {
        &self.stats
    }
}

impl fmt::Debug for ArcCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArcCache")
            .field("capacity", &self.capacity)
            .field("t1_len", &self.t1.len())
            .field("t2_len", &self.t2.len())
            .field("b1_len", &self.b1.len())
            .field("b2_len", &self.b2.len())
            .field("target", &self.target)
            .field("directory", &self.store.root())
            .finish()
    }
}

impl Drop for ArcCache {
    fn drop(&mut self) {
        // The cache owns its directory; retiring the cache retires the files.
        let _ = self.store.destroy();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn cache(capacity: usize) -> (ArcCache, TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let cache = ArcCache::with_directory(capacity, dir.path().join("blobs")).unwrap();
        (cache, dir)
    }

    fn bytes(i: u64) -> Vec<u8> {
        i.to_le_bytes().to_vec()
    }

    #[test]
    fn zero_capacity_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let err = ArcCache::with_directory(0, dir.path().join("blobs")).unwrap_err();
        assert!(matches!(err, ArcError::Config(_)));
        // Rejected before the directory is created.
        assert!(!dir.path().join("blobs").exists());
    }

    #[test]
    fn new_cache_starts_empty() {
        let (cache, _dir) = cache(8);
        assert_eq!(cache.len(), 0);
        assert!(cache.is_empty());
        assert_eq!(cache.capacity(), 8);
        assert_eq!(cache.remaining(), 8);
        assert_eq!(cache.target(), 0);
        cache.debug_validate_invariants();
    }

    #[test]
    fn first_set_lands_in_t1() {
        let (mut cache, _dir) = cache(4);
        cache.set("k", bytes(1)).unwrap();

        assert_eq!(cache.location("k"), Some(ListKind::T1));
        assert_eq!(cache.peek("k"), Some(bytes(1).as_slice()));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn get_promotes_t1_to_t2() {
        let (mut cache, _dir) = cache(4);
        cache.set("k", bytes(1)).unwrap();

        assert_eq!(cache.get("k").unwrap(), Some(bytes(1)));
        assert_eq!(cache.location("k"), Some(ListKind::T2));

        // A second get refreshes within T2.
        assert_eq!(cache.get("k").unwrap(), Some(bytes(1)));
        assert_eq!(cache.location("k"), Some(ListKind::T2));
        assert_eq!(cache.stats().hits, 2);
    }

    #[test]
    fn set_existing_promotes_and_overwrites() {
        let (mut cache, _dir) = cache(4);
        cache.set("k", bytes(1)).unwrap();
        cache.set("k", bytes(2)).unwrap();

        assert_eq!(cache.location("k"), Some(ListKind::T2));
        assert_eq!(cache.get("k").unwrap(), Some(bytes(2)));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn overflow_demotes_t1_lru_to_b1() {
        let (mut cache, _dir) = cache(2);
        cache.set("a", bytes(1)).unwrap();
        cache.set("b", bytes(2)).unwrap();
        cache.get("a").unwrap(); // a → T2, so T1 has room bookkeeping-wise
        cache.set("c", bytes(3)).unwrap();
        cache.set("d", bytes(4)).unwrap();

        assert_eq!(cache.len(), 2);
        assert_eq!(cache.location("c"), Some(ListKind::B1));
        cache.debug_validate_invariants();
    }

    #[test]
    fn ghost_hit_recovers_value_from_disk() {
        let (mut cache, _dir) = cache(4);
        for i in 0..4 {
            cache.set(&i.to_string(), bytes(i)).unwrap();
        }
        cache.get("0").unwrap();
        cache.get("1").unwrap();
        cache.set("4", bytes(4)).unwrap(); // demotes "2" to B1

        assert_eq!(cache.location("2"), Some(ListKind::B1));

        // Ghost-hit get: not counted, not returned, but promoted with the
        // original bytes read back from the blob store.
        let misses_before = cache.stats().misses;
        let hits_before = cache.stats().hits;
        assert_eq!(cache.get("2").unwrap(), None);
        assert_eq!(cache.stats().misses, misses_before);
        assert_eq!(cache.stats().hits, hits_before);

        assert_eq!(cache.location("2"), Some(ListKind::T2));
        assert_eq!(cache.peek("2"), Some(bytes(2).as_slice()));
        cache.debug_validate_invariants();
    }

    #[test]
    fn b1_hit_raises_target() {
        let (mut cache, _dir) = cache(4);
        for i in 0..4 {
            cache.set(&i.to_string(), bytes(i)).unwrap();
        }
        cache.get("0").unwrap();
        cache.get("1").unwrap();
        cache.set("4", bytes(4)).unwrap(); // "2" → B1
        assert_eq!(cache.target(), 0);

        cache.set("2", bytes(2)).unwrap(); // B1 hit
        assert_eq!(cache.target(), 1);
        assert_eq!(cache.location("2"), Some(ListKind::T2));
    }

    #[test]
    fn miss_counts_and_returns_none() {
        let (mut cache, _dir) = cache(2);
        assert_eq!(cache.get("nope").unwrap(), None);
        assert_eq!(cache.stats().misses, 1);
        assert_eq!(cache.stats().hits, 0);
    }

    #[test]
    fn remove_live_returns_value() {
        let (mut cache, _dir) = cache(4);
        cache.set("k", bytes(9)).unwrap();

        assert_eq!(
            cache.remove("k").unwrap(),
            Some(Removed::Live(bytes(9)))
        );
        assert_eq!(cache.location("k"), None);
        assert_eq!(cache.remove("k").unwrap(), None);
        assert_eq!(cache.len(), 0);
    }

    #[test]
    fn remove_ghost_reports_ghost() {
        let (mut cache, _dir) = cache(4);
        for i in 0..4 {
            cache.set(&i.to_string(), bytes(i)).unwrap();
        }
        cache.get("0").unwrap();
        cache.get("1").unwrap();
        cache.set("4", bytes(4)).unwrap(); // "2" → B1

        assert_eq!(cache.remove("2").unwrap(), Some(Removed::Ghost));
        assert_eq!(cache.location("2"), None);
        cache.debug_validate_invariants();
    }

    #[test]
    fn capacity_one_keeps_working_across_ghost_hits() {
        let (mut cache, _dir) = cache(1);
        cache.set("a", bytes(1)).unwrap();
        cache.get("a").unwrap(); // a → T2
        cache.set("b", bytes(2)).unwrap(); // a → B2
        assert_eq!(cache.location("a"), Some(ListKind::B2));

        // Ghost hit on the sole B2 occupant must not lose its blob file.
        assert_eq!(cache.get("a").unwrap(), None);
        assert_eq!(cache.location("a"), Some(ListKind::T2));
        assert_eq!(cache.peek("a"), Some(bytes(1).as_slice()));
        cache.debug_validate_invariants();

        // And the recovered entry keeps cycling.
        cache.set("c", bytes(3)).unwrap();
        cache.debug_validate_invariants();
        assert_eq!(cache.get("a").unwrap(), None); // ghost again
        assert_eq!(cache.peek("a"), Some(bytes(1).as_slice()));
        cache.debug_validate_invariants();
    }

    #[test]
    fn snapshot_reflects_list_sizes() {
        let (mut cache, _dir) = cache(4);
        cache.set("a", bytes(1)).unwrap();
        cache.set("b", bytes(2)).unwrap();
        cache.get("a").unwrap();

        let snap = cache.snapshot();
        assert_eq!(snap.t1_len, 1);
        assert_eq!(snap.t2_len, 1);
        assert_eq!(snap.len, 2);
        assert_eq!(snap.capacity, 4);
        assert_eq!(snap.target, 0);
    }

    #[test]
    fn contains_is_a_pure_read() {
        let (mut cache, _dir) = cache(4);
        cache.set("k", bytes(1)).unwrap();

        assert!(ReadOnlyCache::contains(&cache, "k"));
        assert!(!ReadOnlyCache::contains(&cache, "nope"));
        // Still in T1: no promotion happened.
        assert_eq!(cache.location("k"), Some(ListKind::T1));
        assert_eq!(cache.stats().hits, 0);
        assert_eq!(cache.stats().misses, 0);
    }

    #[test]
    fn drop_removes_blob_directory() {
        let dir = tempfile::tempdir().unwrap();
        let blobs = dir.path().join("blobs");
        {
            let mut cache = ArcCache::with_directory(4, &blobs).unwrap();
            cache.set("k", bytes(1)).unwrap();
            assert!(blobs.join("k").is_file());
        }
        assert!(!blobs.exists());
    }

    #[test]
    fn debug_output_names_the_lists() {
        let (cache, _dir) = cache(4);
        let repr = format!("{cache:?}");
        assert!(repr.contains("t1_len"));
        assert!(repr.contains("target"));
    }
}
