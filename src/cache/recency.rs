//! Recency List Module
//!
//! Doubly linked list of cache entries ordered from most recently used (head)
//! to least recently used (tail).
//!
//! Nodes live in an arena and link to each other through `EntryId` handles.
//! `None` is the explicit "no predecessor" / "no successor" marker, and a
//! freshly allocated node is detached (both links `None`) until it is linked
//! at the head. Freed slots are reused through a free list, so handles stay
//! stable for the lifetime of the entry they point at.

use crate::cache::CacheEntry;

// == Entry Handle ==
/// Stable handle to a node in the recency list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntryId(usize);

impl EntryId {
    pub(crate) fn new(slot: usize) -> Self {
        Self(slot)
    }
}

#[derive(Debug)]
struct Node {
    entry: CacheEntry,
    prev: Option<EntryId>,
    next: Option<EntryId>,
}

// == Recency List ==
#[derive(Debug, Default)]
pub struct RecencyList {
    slots: Vec<Option<Node>>,
    free: Vec<usize>,
    head: Option<EntryId>,
    tail: Option<EntryId>,
    len: usize,
}

impl RecencyList {
    // == Constructor ==
    pub fn new() -> Self {
        Self::default()
    }

    // == Insert At Head ==
    /// Links a new entry as the most recently used one and returns its handle.
    pub fn insert_at_head(&mut self, entry: CacheEntry) -> EntryId {
        let id = self.alloc(entry);
        self.link_at_head(id);
        self.len += 1;
        id
    }

    // == Move To Head ==
    /// Marks `id` as the most recently used entry.
    ///
    /// No-op when `id` is already the head or is not a live handle.
    pub fn move_to_head(&mut self, id: EntryId) {
        if self.head == Some(id) || self.node(id).is_none() {
            return;
        }
        self.unlink(id);
        self.link_at_head(id);
    }

    // == Remove Tail ==
    /// Detaches and returns the least recently used entry.
    ///
    /// Only the list is touched; removing the key from the index and dropping
    /// the payload are left to the caller. Returns `None` on an empty list.
    pub fn remove_tail(&mut self) -> Option<CacheEntry> {
        let tail = self.tail?;
        self.remove(tail)
    }

    // == Remove ==
    /// Detaches and returns the entry at `id`, wherever it sits.
    pub fn remove(&mut self, id: EntryId) -> Option<CacheEntry> {
        self.node(id)?;
        self.unlink(id);
        let node = self.slots[id.0].take()?;
        self.free.push(id.0);
        self.len -= 1;
        Some(node.entry)
    }

    // == Entry Access ==
    pub fn entry(&self, id: EntryId) -> Option<&CacheEntry> {
        self.node(id).map(|node| &node.entry)
    }

    pub fn head(&self) -> Option<EntryId> {
        self.head
    }

    pub fn tail(&self) -> Option<EntryId> {
        self.tail
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    // == Iteration ==
    /// Walks the list from head (most recent) to tail (least recent).
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            list: self,
            cursor: self.head,
        }
    }

    // == Drain ==
    /// Detaches every entry, head first, leaving the list empty.
    pub fn drain(&mut self) -> Vec<CacheEntry> {
        let mut released = Vec::with_capacity(self.len);
        let mut cursor = self.head;
        while let Some(id) = cursor {
            match self.slots[id.0].take() {
                Some(node) => {
                    cursor = node.next;
                    released.push(node.entry);
                }
                None => break,
            }
        }
        self.slots.clear();
        self.free.clear();
        self.head = None;
        self.tail = None;
        self.len = 0;
        released
    }

    // == Internal Helpers ==
    fn node(&self, id: EntryId) -> Option<&Node> {
        self.slots.get(id.0).and_then(Option::as_ref)
    }

    fn node_mut(&mut self, id: EntryId) -> Option<&mut Node> {
        self.slots.get_mut(id.0).and_then(Option::as_mut)
    }

    fn alloc(&mut self, entry: CacheEntry) -> EntryId {
        let node = Node {
            entry,
            prev: None,
            next: None,
        };
        match self.free.pop() {
            Some(slot) => {
                self.slots[slot] = Some(node);
                EntryId::new(slot)
            }
            None => {
                self.slots.push(Some(node));
                EntryId::new(self.slots.len() - 1)
            }
        }
    }

    /// Splices `id` out of the chain, patching its neighbours and the
    /// head/tail markers, and leaves it detached.
    fn unlink(&mut self, id: EntryId) {
        let (prev, next) = match self.node_mut(id) {
            Some(node) => (node.prev.take(), node.next.take()),
            None => return,
        };

        match prev {
            Some(p) => {
                if let Some(node) = self.node_mut(p) {
                    node.next = next;
                }
            }
            None => self.head = next,
        }

        match next {
            Some(n) => {
                if let Some(node) = self.node_mut(n) {
                    node.prev = prev;
                }
            }
            None => self.tail = prev,
        }
    }

    /// Links a detached node in front of the current head.
    fn link_at_head(&mut self, id: EntryId) {
        let old_head = self.head;
        if let Some(node) = self.node_mut(id) {
            node.prev = None;
            node.next = old_head;
        }
        match old_head {
            Some(h) => {
                if let Some(node) = self.node_mut(h) {
                    node.prev = Some(id);
                }
            }
            None => self.tail = Some(id),
        }
        self.head = Some(id);
    }
}

// == Iterator ==
pub struct Iter<'a> {
    list: &'a RecencyList,
    cursor: Option<EntryId>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a CacheEntry;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.list.node(self.cursor?)?;
        self.cursor = node.next;
        Some(&node.entry)
    }
}
