//! Lazily populated cache of nearest neighbor lists.

use std::{
    collections::HashMap,
    sync::{Mutex, MutexGuard, PoisonError},
};

use clavier_core::metric::Metric;

/// A neighbor list: every other key with its distance, closest first.
pub(crate) type Neighbors = Vec<(char, f64)>;

/// Neighbor lists keyed by the queried character and metric.
///
/// The cache is guarded by a mutex so a lookup and the following insert
/// happen under the same lock. Entries are never invalidated: a layout is
/// immutable once built, so a cached list stays valid for its lifetime.
#[derive(Debug, Default)]
pub(crate) struct NeighborCache {
    entries: Mutex<HashMap<(char, Metric), Neighbors>>,
}

impl NeighborCache {
    /// Returns the cached list for `(key, metric)`, computing and storing it
    /// with `compute` on a miss.
    pub(crate) fn get_or_insert_with<F>(&self, key: char, metric: Metric, compute: F) -> Neighbors
    where
        F: FnOnce() -> Neighbors,
    {
        let mut entries = self.lock();
        entries
            .entry((key, metric))
            .or_insert_with(compute)
            .clone()
    }

    /// Number of cached neighbor lists.
    pub(crate) fn len(&self) -> usize {
        self.lock().len()
    }

    // Entries only hold derived data, so a poisoned lock is still usable.
    fn lock(&self) -> MutexGuard<'_, HashMap<(char, Metric), Neighbors>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
