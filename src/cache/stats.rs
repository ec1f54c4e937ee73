//! Cache Statistics Module
//!
//! Counters kept by the store alongside the index and recency list. They are
//! bookkeeping only: updating them never changes which pages are cached.

// == Cache Stats ==
/// Lookup and churn counters for the page cache.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CacheStats {
    /// Lookups answered with a cached page
    pub hits: u64,
    /// Lookups that had to fall through to disk
    pub misses: u64,
    /// Pages dropped from the tail to stay within capacity
    pub evictions: u64,
    /// Puts that overwrote a page already cached under the same path
    pub replacements: u64,
    /// Pages currently cached
    pub total_entries: usize,
}

impl CacheStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Share of lookups served from memory; 0.0 before the first lookup.
    pub fn hit_rate(&self) -> f64 {
        match self.hits + self.misses {
            0 => 0.0,
            lookups => self.hits as f64 / lookups as f64,
        }
    }

    /// Number of pages that have entered the cache, including replaced ones.
    pub fn insertions(&self) -> u64 {
        self.total_entries as u64 + self.evictions + self.replacements
    }

    pub(crate) fn record_hit(&mut self) {
        self.hits += 1;
    }

    pub(crate) fn record_miss(&mut self) {
        self.misses += 1;
    }

    pub(crate) fn record_eviction(&mut self) {
        self.evictions += 1;
    }

    pub(crate) fn record_replacement(&mut self) {
        self.replacements += 1;
    }

    pub(crate) fn set_total_entries(&mut self, count: usize) {
        self.total_entries = count;
    }
}
