//! API Routes
//!
//! Configures the Axum router with the page cache server's routes.

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use super::handlers::{d20_handler, index_handler, not_found_handler, AppState};

/// Creates the main router.
///
/// # Routes
/// - `GET /` - Index document
/// - `GET /d20` - Random number page
/// - anything else, including other methods on the routes above - 404 document
///
/// # Middleware
/// - Tracing: Logs all requests for debugging
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index_handler).fallback(not_found_handler))
        .route("/d20", get(d20_handler).fallback(not_found_handler))
        .fallback(not_found_handler)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
