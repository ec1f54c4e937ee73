//! Cache Store Module
//!
//! Main cache engine combining the key index with the recency list.
//!
//! Every live entry sits in exactly one index slot and exactly one list node.
//! Inserting a key that is already cached removes the old entry completely
//! and links a fresh one at the head, so a key is never stored twice. Eviction
//! runs after insertion and drops the list tail until the entry count is back
//! within capacity.

use bytes::Bytes;
use tracing::debug;

use crate::cache::{CacheEntry, CacheStats, CachedContent, Index, RecencyList};
use crate::error::{CacheError, Result};

// == Cache Store ==
/// Fixed-capacity LRU store keyed by resource path.
#[derive(Debug)]
pub struct CacheStore {
    /// Key lookup
    index: Index,
    /// Access order, most recent first
    recency: RecencyList,
    /// Performance statistics
    stats: CacheStats,
    /// Maximum number of entries allowed
    capacity: usize,
}

impl CacheStore {
    // == Constructor ==
    /// Creates an empty store holding at most `capacity` entries.
    ///
    /// A capacity of zero is rejected with [`CacheError::InvalidCapacity`].
    pub fn new(capacity: usize) -> Result<Self> {
        Self::with_index_size(capacity, 0)
    }

    /// Creates an empty store with an explicitly sized index.
    ///
    /// `index_size == 0` sizes the index for `capacity` keys.
    pub fn with_index_size(capacity: usize, index_size: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(CacheError::InvalidCapacity(capacity));
        }

        let slots = if index_size == 0 { capacity } else { index_size };

        Ok(Self {
            index: Index::with_capacity(slots),
            recency: RecencyList::new(),
            stats: CacheStats::new(),
            capacity,
        })
    }

    // == Get ==
    /// Looks up `key`, promoting it to most recently used on a hit.
    ///
    /// Returns `None` on a miss without touching the index or the list.
    pub fn get(&mut self, key: &str) -> Option<CachedContent> {
        let Some(id) = self.index.get(key) else {
            self.stats.record_miss();
            return None;
        };

        let Some(entry) = self.recency.entry(id) else {
            unreachable!("index holds a handle for {key} with no node in the recency list");
        };
        let content = entry.snapshot();

        self.recency.move_to_head(id);
        self.stats.record_hit();
        Some(content)
    }

    // == Put ==
    /// Stores `payload` under `key` as the most recently used entry.
    ///
    /// An existing entry for `key` is replaced. If the store then holds more
    /// than `capacity` entries, least recently used entries are evicted.
    pub fn put(&mut self, key: impl Into<String>, content_type: impl Into<String>, payload: Bytes) {
        let key = key.into();

        if let Some(old_id) = self.index.remove(&key) {
            if let Some(old) = self.recency.remove(old_id) {
                debug!(key = %old.key, size = old.size, "Replacing cached entry");
            }
            self.stats.record_replacement();
        }

        let entry = CacheEntry::new(key.clone(), content_type, payload);
        let id = self.recency.insert_at_head(entry);
        let previous = self.index.put(key, id);
        debug_assert!(previous.is_none(), "key still indexed after its old entry was removed");

        self.evict_overflow();
        self.stats.set_total_entries(self.index.len());

        debug_assert_eq!(self.index.len(), self.recency.len());
    }

    // == Eviction ==
    /// Drops list tails until the store is back within capacity.
    fn evict_overflow(&mut self) {
        while self.index.len() > self.capacity {
            let Some(evicted) = self.recency.remove_tail() else {
                unreachable!("recency list is empty while the index is over capacity");
            };
            self.index.remove(&evicted.key);
            self.stats.record_eviction();
            debug!(key = %evicted.key, size = evicted.size, "Evicted least recently used entry");
        }
    }

    // == Clear ==
    /// Releases every entry, walking the list from head to tail.
    ///
    /// Returns the number of entries released. Safe on an empty store.
    pub fn clear(&mut self) -> usize {
        self.index.clear();
        let released = self.recency.drain();
        let count = released.len();
        drop(released);
        self.stats.set_total_entries(0);
        count
    }

    // == Destroy ==
    /// Tears the store down, returning how many entries were released.
    ///
    /// Consumes the store, so it cannot be used again without re-creation.
    pub fn destroy(mut self) -> usize {
        self.clear()
    }

    // == Inspection ==
    /// Current number of entries.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Checks membership without recording an access.
    pub fn contains(&self, key: &str) -> bool {
        self.index.get(key).is_some()
    }

    /// Keys ordered from most to least recently used.
    pub fn keys_by_recency(&self) -> Vec<String> {
        self.recency.iter().map(|entry| entry.key.clone()).collect()
    }

    /// Age in milliseconds of the entry under `key`, without recording an access.
    pub fn age_ms(&self, key: &str) -> Option<i64> {
        let id = self.index.get(key)?;
        self.recency.entry(id).map(CacheEntry::age_ms)
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.index.len());
        stats
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    fn page(body: &str) -> Bytes {
        Bytes::from(body.to_string())
    }

    fn html(store: &mut CacheStore, key: &str, body: &str) {
        store.put(key, "text/html", page(body));
    }

    #[test]
    fn test_store_new() {
        let store = CacheStore::new(10).unwrap();
        assert_eq!(store.len(), 0);
        assert!(store.is_empty());
        assert_eq!(store.capacity(), 10);
    }

    #[test]
    fn test_store_zero_capacity_rejected() {
        let result = CacheStore::new(0);
        assert!(matches!(result, Err(CacheError::InvalidCapacity(0))));

        let result = CacheStore::with_index_size(0, 64);
        assert!(matches!(result, Err(CacheError::InvalidCapacity(0))));
    }

    #[test]
    fn test_store_explicit_index_size() {
        let mut store = CacheStore::with_index_size(2, 128).unwrap();
        html(&mut store, "/a.html", "A");
        assert!(store.contains("/a.html"));
    }

    #[test]
    fn test_store_put_and_get() {
        let mut store = CacheStore::new(10).unwrap();
        html(&mut store, "/index.html", "<h1>hi</h1>");

        let content = store.get("/index.html").unwrap();
        assert_eq!(content.content_type, "text/html");
        assert_eq!(&content.payload[..], b"<h1>hi</h1>");
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_store_get_miss_leaves_state_alone() {
        let mut store = CacheStore::new(2).unwrap();
        html(&mut store, "/a.html", "A");
        html(&mut store, "/b.html", "B");
        let before = store.keys_by_recency();

        assert!(store.get("/never.html").is_none());

        assert_eq!(store.len(), 2);
        assert_eq!(store.keys_by_recency(), before);
    }

    #[test]
    fn test_store_lru_eviction() {
        let mut store = CacheStore::new(2).unwrap();
        html(&mut store, "A", "a");
        html(&mut store, "B", "b");
        html(&mut store, "C", "c");

        assert_eq!(store.len(), 2);
        assert!(!store.contains("A"));
        assert!(store.contains("B"));
        assert!(store.contains("C"));
    }

    #[test]
    fn test_store_get_promotes_entry() {
        let mut store = CacheStore::new(2).unwrap();
        html(&mut store, "A", "a");
        html(&mut store, "B", "b");

        store.get("A").unwrap();
        html(&mut store, "C", "c");

        assert!(store.contains("A"));
        assert!(!store.contains("B"));
        assert!(store.contains("C"));
    }

    #[test]
    fn test_store_duplicate_put_replaces_and_refreshes() {
        let mut store = CacheStore::new(3).unwrap();
        html(&mut store, "A", "old");
        html(&mut store, "B", "b");
        store.put("A", "text/plain", page("new"));

        assert_eq!(store.len(), 2);
        assert_eq!(store.keys_by_recency(), vec!["A", "B"]);

        let content = store.get("A").unwrap();
        assert_eq!(content.content_type, "text/plain");
        assert_eq!(&content.payload[..], b"new");
        assert_eq!(store.stats().replacements, 1);
    }

    #[test]
    fn test_store_duplicate_put_at_capacity_does_not_evict() {
        let mut store = CacheStore::new(2).unwrap();
        html(&mut store, "A", "a");
        html(&mut store, "B", "b");
        html(&mut store, "A", "a2");

        assert!(store.contains("A"));
        assert!(store.contains("B"));
        assert_eq!(store.stats().evictions, 0);
        assert_eq!(store.keys_by_recency(), vec!["A", "B"]);
    }

    #[test]
    fn test_store_capacity_one() {
        let mut store = CacheStore::new(1).unwrap();
        html(&mut store, "/a.html", "X");
        assert_eq!(store.get("/a.html").unwrap().payload, page("X"));

        html(&mut store, "/b.html", "Y");
        assert!(store.get("/a.html").is_none());

        let content = store.get("/b.html").unwrap();
        assert_eq!(content.content_type, "text/html");
        assert_eq!(content.payload, page("Y"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_store_evicted_payload_stays_readable() {
        let mut store = CacheStore::new(1).unwrap();
        html(&mut store, "/a.html", "in flight");
        let in_flight = store.get("/a.html").unwrap();

        html(&mut store, "/b.html", "next");

        assert!(!store.contains("/a.html"));
        assert_eq!(&in_flight.payload[..], b"in flight");
    }

    #[test]
    fn test_store_stats() {
        let mut store = CacheStore::new(1).unwrap();
        html(&mut store, "A", "a");
        store.get("A").unwrap();
        let _ = store.get("missing");
        html(&mut store, "B", "b");

        let stats = store.stats();
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.evictions, 1);
        assert_eq!(stats.total_entries, 1);
        assert_eq!(stats.insertions(), 2);
    }

    #[test]
    fn test_store_clear() {
        let mut store = CacheStore::new(4).unwrap();
        html(&mut store, "A", "a");
        html(&mut store, "B", "b");

        assert_eq!(store.clear(), 2);
        assert!(store.is_empty());
        assert!(store.keys_by_recency().is_empty());
        assert!(store.get("A").is_none());

        html(&mut store, "C", "c");
        assert_eq!(store.keys_by_recency(), vec!["C"]);
    }

    #[test]
    fn test_store_destroy_empty() {
        let store = CacheStore::new(4).unwrap();
        assert_eq!(store.destroy(), 0);
    }

    #[test]
    fn test_store_destroy_counts_entries() {
        let mut store = CacheStore::new(4).unwrap();
        html(&mut store, "A", "a");
        html(&mut store, "B", "b");
        html(&mut store, "C", "c");
        assert_eq!(store.destroy(), 3);
    }

    #[test]
    fn test_store_repeated_puts_index_one_handle() {
        let mut store = CacheStore::new(3).unwrap();
        for round in 0..10 {
            html(&mut store, "A", &format!("v{}", round));
            html(&mut store, "B", "b");
        }

        assert_eq!(store.index.len(), 2);
        assert_eq!(store.recency.len(), 2);
        assert_eq!(store.stats().replacements, 18);
        let id = store.index.get("A").unwrap();
        assert_eq!(store.recency.entry(id).unwrap().key, "A");
        assert_eq!(&store.get("A").unwrap().payload[..], b"v9");
    }

    #[test]
    #[should_panic(expected = "no node in the recency list")]
    fn test_store_get_panics_on_dangling_handle() {
        let mut store = CacheStore::new(2).unwrap();
        html(&mut store, "A", "a");

        // Break the index/list pairing behind the store's back.
        let id = store.index.get("A").unwrap();
        store.recency.remove(id);

        let _ = store.get("A");
    }

    #[test]
    fn test_store_age_does_not_promote() {
        let mut store = CacheStore::new(2).unwrap();
        html(&mut store, "A", "a");
        html(&mut store, "B", "b");

        assert!(store.age_ms("A").is_some());
        assert!(store.age_ms("missing").is_none());
        assert_eq!(store.keys_by_recency(), vec!["B", "A"]);
    }
}
