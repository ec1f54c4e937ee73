//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;
use std::path::PathBuf;

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
    /// Maximum number of entries the page cache can hold
    pub cache_capacity: usize,
    /// Initial size of the cache index (0 = size it for `cache_capacity`)
    pub cache_index_size: usize,
    /// Directory holding the documents served to clients
    pub server_root: PathBuf,
    /// Directory holding the server's own documents (error pages)
    pub server_files: PathBuf,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SERVER_PORT` - HTTP server port (default: 3490)
    /// - `CACHE_CAPACITY` - Maximum cached documents (default: 10)
    /// - `CACHE_INDEX_SIZE` - Initial index size, 0 for default (default: 0)
    /// - `SERVER_ROOT` - Document root (default: ./serverroot)
    /// - `SERVER_FILES` - Error page directory (default: ./serverfiles)
    ///
    /// Unparsable values fall back to their defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            server_port: parse_var("SERVER_PORT").unwrap_or(defaults.server_port),
            cache_capacity: parse_var("CACHE_CAPACITY").unwrap_or(defaults.cache_capacity),
            cache_index_size: parse_var("CACHE_INDEX_SIZE").unwrap_or(defaults.cache_index_size),
            server_root: env::var("SERVER_ROOT")
                .map(PathBuf::from)
                .unwrap_or(defaults.server_root),
            server_files: env::var("SERVER_FILES")
                .map(PathBuf::from)
                .unwrap_or(defaults.server_files),
        }
    }

    /// Path of the document served for `/`.
    pub fn index_path(&self) -> PathBuf {
        self.server_root.join("index.html")
    }

    /// Path of the document served for unknown routes.
    pub fn not_found_path(&self) -> PathBuf {
        self.server_files.join("404.html")
    }
}

fn parse_var<T: std::str::FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.parse().ok())
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 3490,
            cache_capacity: 10,
            cache_index_size: 0,
            server_root: PathBuf::from("./serverroot"),
            server_files: PathBuf::from("./serverfiles"),
        }
    }
}
