//! Files Module
//!
//! Loads documents from disk and infers their content type. The cache never
//! calls into this module; request handlers do, before populating the cache.

mod loader;
mod mime;

pub use loader::{load_file, FileData};
pub use mime::{mime_type_for, DEFAULT_MIME_TYPE};
