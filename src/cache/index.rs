//! Index Module
//!
//! Key lookup for the cache. Maps a resource path to the handle of its node
//! in the recency list and carries no ordering of its own.

use std::collections::HashMap;

use crate::cache::recency::EntryId;

// == Index ==
#[derive(Debug, Default)]
pub struct Index {
    slots: HashMap<String, EntryId>,
}

impl Index {
    // == Constructor ==
    /// Creates an index pre-sized for `slots` keys.
    pub fn with_capacity(slots: usize) -> Self {
        Self {
            slots: HashMap::with_capacity(slots),
        }
    }

    /// Records `key` as living at `id`, returning the handle it replaced.
    pub fn put(&mut self, key: String, id: EntryId) -> Option<EntryId> {
        self.slots.insert(key, id)
    }

    pub fn get(&self, key: &str) -> Option<EntryId> {
        self.slots.get(key).copied()
    }

    pub fn remove(&mut self, key: &str) -> Option<EntryId> {
        self.slots.remove(key)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn clear(&mut self) {
        self.slots.clear();
    }
}
