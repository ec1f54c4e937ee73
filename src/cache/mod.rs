//! Cache Module
//!
//! Bounded in-memory page cache with LRU eviction.

mod entry;
mod index;
mod recency;
mod stats;
mod store;


// Re-export public types
pub use entry::{CacheEntry, CachedContent};
pub use index::Index;
pub use recency::{EntryId, RecencyList};
pub use stats::CacheStats;
pub use store::CacheStore;
