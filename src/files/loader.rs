//! File loading for the request handlers.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use bytes::Bytes;
use tracing::debug;

use crate::error::{CacheError, Result};

// == File Data ==
/// A file read fully into memory.
#[derive(Debug, Clone)]
pub struct FileData {
    /// Path the data was read from
    pub path: PathBuf,
    /// File contents
    pub data: Bytes,
    /// Length of the contents in bytes
    pub size: usize,
}

/// Reads the whole file at `path`.
///
/// # Errors
/// - [`CacheError::NotFound`] when the file does not exist
/// - [`CacheError::Io`] for any other read failure
pub async fn load_file(path: impl AsRef<Path>) -> Result<FileData> {
    let path = path.as_ref();

    let data = tokio::fs::read(path).await.map_err(|source| match source.kind() {
        ErrorKind::NotFound => CacheError::NotFound(path.display().to_string()),
        _ => CacheError::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;

    debug!(path = %path.display(), size = data.len(), "Loaded file from disk");

    let size = data.len();
    Ok(FileData {
        path: path.to_path_buf(),
        data: Bytes::from(data),
        size,
    })
}
