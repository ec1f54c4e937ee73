//! Error types for the page cache server
//!
//! Provides unified error handling using thiserror.

use std::path::PathBuf;

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use thiserror::Error;

// == Cache Error Enum ==
/// Unified error type for the cache and the file server around it.
#[derive(Error, Debug)]
pub enum CacheError {
    /// Cache was created with a capacity that cannot hold any entry
    #[error("Invalid cache capacity: {0} (must be at least 1)")]
    InvalidCapacity(usize),

    /// Requested file does not exist
    #[error("File not found: {0}")]
    NotFound(String),

    /// Reading a file failed for a reason other than absence
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

// == IntoResponse Implementation ==
impl IntoResponse for CacheError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            CacheError::NotFound(_) => (StatusCode::NOT_FOUND, "404 Not Found"),
            CacheError::InvalidCapacity(_) | CacheError::Io { .. } => {
                (StatusCode::INTERNAL_SERVER_ERROR, "500 Internal Server Error")
            }
        };

        (status, [(header::CONTENT_TYPE, "text/plain")], body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the page cache server.
pub type Result<T> = std::result::Result<T, CacheError>;
