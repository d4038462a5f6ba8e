//! library-server: HTTP API server for the library catalog
//!
//! This crate provides:
//! - REST endpoints for creating, reading, updating, deleting and
//!   searching books under `/books`
//! - Validation failures reported as structured JSON lists
//!
//! # Architecture
//!
//! The server is built on Axum with a middleware stack for:
//! - Request tracing and logging
//! - Request ID generation
//! - JSON error responses
//!
//! # Usage
//!
//! ```rust,ignore
//! use library_server::{build_app, state::AppState};
//! use library_store::{CatalogService, Store, StoreConfig};
//!
//! let store = Store::connect(StoreConfig::from_env()?).await?;
//! let state = AppState::new(CatalogService::new(store));
//! axum::serve(listener, build_app(state)).await?;
//! ```

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;

use axum::Router;
use tower_http::trace::TraceLayer;

use crate::middleware::request_id::{propagate_request_id, request_id_layer};

// Re-exports for convenience
pub use config::{ConfigError, ServerConfig};
pub use error::{ApiError, ApiResult};
pub use state::AppState;

// Re-export dependent crates
pub use library_core;
pub use library_store;

/// Build the router with the full middleware stack applied.
pub fn build_app(state: AppState) -> Router {
    routes::build_router(state)
        .layer(axum::middleware::from_fn(propagate_request_id))
        .layer(request_id_layer())
        .layer(TraceLayer::new_for_http())
}
