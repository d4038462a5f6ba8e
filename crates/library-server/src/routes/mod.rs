//! Route definitions for the HTTP API.
//!
//! Every resource module exposes a `routes()` function; `build_router`
//! merges them in a fixed order.

pub mod books;

use axum::Router;

use crate::state::AppState;

/// Build the complete router with all routes.
pub fn build_router(state: AppState) -> Router {
    Router::new().merge(books::routes()).with_state(state)
}
