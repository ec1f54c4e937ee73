//! API Module
//!
//! HTTP handlers and routing for the page cache server.
//!
//! # Endpoints
//! - `GET /` - The document root's `index.html`, served through the cache
//! - `GET /d20` - A page with a random number from 1 to 20
//! - anything else - The server's `404.html` with status 404

pub mod handlers;
pub mod pages;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
