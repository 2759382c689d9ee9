//! Memoization of filter results
//!
//! A filter result depends only on the pool and the constraint set, so it can
//! be shared freely between threads. Many (guess, answer) pairs derive the
//! same constraint set, which is where the hit rate comes from.

use crate::core::{ConstraintSet, WordSet};
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use log::trace;
use rustc_hash::FxBuildHasher;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Cache key: the pool's identity plus the constraints applied to it
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FilterKey {
    pool_fingerprint: u64,
    pool_len: usize,
    constraints: ConstraintSet,
}

impl FilterKey {
    #[must_use]
    pub fn new(pool: &WordSet, constraints: &ConstraintSet) -> Self {
        Self {
            pool_fingerprint: pool.fingerprint(),
            pool_len: pool.len(),
            constraints: constraints.clone(),
        }
    }
}

/// Get-or-compute storage for filter results
///
/// Implementations must return exactly what `compute` would return; caching may
/// only change latency.
pub trait FilterCache: Send + Sync {
    fn get_or_compute(&self, key: FilterKey, compute: impl FnOnce() -> WordSet) -> WordSet;
}

/// Hit and miss counters of a cache
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: usize,
    pub misses: usize,
    pub entries: usize,
}

/// Always recomputes
#[derive(Debug, Clone, Copy, Default)]
pub struct NoCache;

impl FilterCache for NoCache {
    #[inline]
    fn get_or_compute(&self, _key: FilterKey, compute: impl FnOnce() -> WordSet) -> WordSet {
        compute()
    }
}

/// Entry limit of a [`SharedCache`] built with `new`
pub const DEFAULT_MAX_ENTRIES: usize = 1 << 18;

/// Concurrent cache shared by every scoring thread
///
/// Hits take only a shared read lock. A miss computes while the key's shard is
/// held, so each key is computed at most once even when several threads ask
/// for it together.
///
/// The cache is bounded: a miss that finds `max_entries` entries already
/// stored empties the cache before inserting. Concurrent misses can overshoot
/// the limit by at most one entry per thread.
#[derive(Debug)]
pub struct SharedCache {
    entries: DashMap<FilterKey, WordSet, FxBuildHasher>,
    max_entries: usize,
    hits: AtomicUsize,
    misses: AtomicUsize,
}

impl Default for SharedCache {
    fn default() -> Self {
        Self::with_max_entries(DEFAULT_MAX_ENTRIES)
    }
}

impl SharedCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Cache holding at most `max_entries` results (at least one)
    #[must_use]
    pub fn with_max_entries(max_entries: usize) -> Self {
        Self {
            entries: DashMap::with_hasher(FxBuildHasher),
            max_entries: max_entries.max(1),
            hits: AtomicUsize::new(0),
            misses: AtomicUsize::new(0),
        }
    }

    #[must_use]
    pub const fn max_entries(&self) -> usize {
        self.max_entries
    }

    #[must_use]
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            entries: self.entries.len(),
        }
    }

    /// Drop all entries
    pub fn clear(&self) {
        trace!("clearing filter cache with {} entries", self.entries.len());
        self.entries.clear();
    }
}

impl FilterCache for SharedCache {
    fn get_or_compute(&self, key: FilterKey, compute: impl FnOnce() -> WordSet) -> WordSet {
        if let Some(cached) = self.entries.get(&key) {
            self.hits.fetch_add(1, Ordering::Relaxed);
            return cached.value().clone();
        }

        if self.entries.len() >= self.max_entries {
            self.clear();
        }

        match self.entries.entry(key) {
            Entry::Occupied(entry) => {
                self.hits.fetch_add(1, Ordering::Relaxed);
                entry.get().clone()
            }
            Entry::Vacant(entry) => {
                let misses = self.misses.fetch_add(1, Ordering::Relaxed) + 1;
                if misses % 10_000 == 0 {
                    trace!("filter cache: {misses} misses");
                }
                entry.insert(compute()).value().clone()
            }
        }
    }
}

/// Runtime choice between caching and not caching
///
/// Keeps static dispatch while letting the CLI decide.
#[derive(Debug)]
pub enum CacheMode {
    Disabled(NoCache),
    Shared(SharedCache),
}

impl CacheMode {
    /// Shared cache bounded to `max_entries`, or no cache when it is 0
    #[must_use]
    pub fn with_max_entries(max_entries: usize) -> Self {
        if max_entries == 0 {
            Self::Disabled(NoCache)
        } else {
            Self::Shared(SharedCache::with_max_entries(max_entries))
        }
    }

    /// Counters of the shared cache, `None` when caching is disabled
    #[must_use]
    pub fn stats(&self) -> Option<CacheStats> {
        match self {
            Self::Disabled(_) => None,
            Self::Shared(cache) => Some(cache.stats()),
        }
    }
}

impl Default for CacheMode {
    fn default() -> Self {
        Self::Shared(SharedCache::new())
    }
}

impl FilterCache for CacheMode {
    #[inline]
    fn get_or_compute(&self, key: FilterKey, compute: impl FnOnce() -> WordSet) -> WordSet {
        match self {
            Self::Disabled(cache) => cache.get_or_compute(key, compute),
            Self::Shared(cache) => cache.get_or_compute(key, compute),
        }
    }
}
