//! Cache Entry Module
//!
//! Defines a single cached document and the snapshot handed back on a hit.

use bytes::Bytes;
use chrono::{DateTime, Utc};

// == Cache Entry ==
/// A cached response body together with the metadata recorded at insertion.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The resource path this entry is stored under
    pub key: String,
    /// MIME type recorded when the entry was inserted
    pub content_type: String,
    /// The cached body (reference counted, never mutated)
    pub payload: Bytes,
    /// Length of the payload in bytes
    pub size: usize,
    /// When the entry was inserted
    pub cached_at: DateTime<Utc>,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new entry; `size` is taken from the payload itself.
    pub fn new(key: impl Into<String>, content_type: impl Into<String>, payload: Bytes) -> Self {
        let size = payload.len();
        Self {
            key: key.into(),
            content_type: content_type.into(),
            payload,
            size,
            cached_at: Utc::now(),
        }
    }

    // == Age ==
    /// Milliseconds elapsed since the entry was cached.
    pub fn age_ms(&self) -> i64 {
        (Utc::now() - self.cached_at).num_milliseconds().max(0)
    }

    // == Snapshot ==
    /// Returns the content a response writer needs.
    ///
    /// The payload is a cheap clone of the shared buffer, so evicting this
    /// entry later never invalidates a snapshot that is still being written.
    pub fn snapshot(&self) -> CachedContent {
        CachedContent {
            content_type: self.content_type.clone(),
            payload: self.payload.clone(),
        }
    }
}

// == Cached Content ==
/// Result of a cache hit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CachedContent {
    pub content_type: String,
    pub payload: Bytes,
}
