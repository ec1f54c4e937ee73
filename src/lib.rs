//! Page Cache - A small HTTP file server with an in-memory LRU page cache
//!
//! Documents are read from disk once and then served from a bounded cache
//! that evicts the least recently used entry when it is full.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod files;

pub use api::{create_router, AppState};
pub use cache::CacheStore;
pub use config::Config;
