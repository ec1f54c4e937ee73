//! API Handlers
//!
//! HTTP request handlers for each route of the page cache server.

use std::path::Path;
use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
};
use tokio::sync::Mutex;
use tracing::{debug, error, info, warn};

use crate::api::pages::{render_d20, roll_d20};
use crate::cache::{CacheStore, CachedContent};
use crate::config::Config;
use crate::error::{CacheError, Result};
use crate::files::{load_file, mime_type_for};

/// Application state shared across all handlers.
///
/// Holds the single cache instance behind one mutex. Every lookup reorders
/// the recency list, so reads and writes take the same lock.
#[derive(Clone)]
pub struct AppState {
    /// Shared page cache
    pub cache: Arc<Mutex<CacheStore>>,
    /// Server configuration
    pub config: Arc<Config>,
}

impl AppState {
    /// Creates a new AppState around an already constructed cache.
    pub fn new(cache: CacheStore, config: Config) -> Self {
        Self {
            cache: Arc::new(Mutex::new(cache)),
            config: Arc::new(config),
        }
    }

    /// Creates a new AppState from configuration.
    ///
    /// Fails if the configured cache capacity is zero.
    pub fn from_config(config: &Config) -> Result<Self> {
        let cache = CacheStore::with_index_size(config.cache_capacity, config.cache_index_size)?;
        Ok(Self::new(cache, config.clone()))
    }
}

/// Returns the document at `path`, from the cache when possible.
///
/// On a miss the file is read from disk with the lock released, then stored.
pub async fn serve_file(state: &AppState, path: &Path) -> Result<CachedContent> {
    let key = path.to_string_lossy().into_owned();

    let hit = {
        let mut cache = state.cache.lock().await;
        cache.get(&key).map(|content| (content, cache.age_ms(&key)))
    };

    if let Some((content, age_ms)) = hit {
        info!(path = %key, size = content.payload.len(), ?age_ms, "Served from cache");
        return Ok(content);
    }

    debug!(path = %key, "Cache miss, loading from disk");
    let file = load_file(path).await?;
    let content_type = mime_type_for(path);

    state
        .cache
        .lock()
        .await
        .put(key.clone(), content_type.clone(), file.data.clone());
    info!(path = %key, size = file.size, "Served from disk and cached");

    Ok(CachedContent {
        content_type,
        payload: file.data,
    })
}

fn document(status: StatusCode, content: CachedContent) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, content.content_type)],
        content.payload,
    )
        .into_response()
}

/// Responds with the 404 document, or a plain-text 404 if it cannot be loaded.
///
/// The document is read from disk on every request and never cached, so
/// unknown URLs cannot push real content out of the cache.
async fn not_found(state: &AppState) -> Response {
    let path = state.config.not_found_path();
    match load_file(&path).await {
        Ok(file) => document(
            StatusCode::NOT_FOUND,
            CachedContent {
                content_type: mime_type_for(&path),
                payload: file.data,
            },
        ),
        Err(err) => {
            warn!(error = %err, "Cannot load 404 document, using plain-text fallback");
            CacheError::NotFound(path.display().to_string()).into_response()
        }
    }
}

/// Handler for GET /
///
/// Serves the document root's `index.html`.
pub async fn index_handler(State(state): State<AppState>) -> Response {
    let path = state.config.index_path();
    match serve_file(&state, &path).await {
        Ok(content) => document(StatusCode::OK, content),
        Err(CacheError::NotFound(missing)) => {
            warn!(path = %missing, "Index document missing");
            not_found(&state).await
        }
        Err(err) => {
            error!(error = %err, "Failed to serve index document");
            err.into_response()
        }
    }
}

/// Handler for GET /d20
pub async fn d20_handler() -> Html<String> {
    let roll = roll_d20();
    debug!(roll, "Rolled d20");
    Html(render_d20(roll))
}

/// Fallback for every other request.
pub async fn not_found_handler(State(state): State<AppState>) -> Response {
    not_found(&state).await
}
