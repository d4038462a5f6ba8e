//! Application state shared across handlers.

use std::sync::Arc;

use library_store::CatalogService;

/// Application state shared across all handlers.
///
/// This is cloneable and can be extracted in handlers using `State<AppState>`.
#[derive(Clone)]
pub struct AppState {
    /// Book catalog.
    catalog: Arc<CatalogService>,
}

impl AppState {
    /// Create new application state.
    pub fn new(catalog: CatalogService) -> Self {
        Self {
            catalog: Arc::new(catalog),
        }
    }

    /// Get a reference to the book catalog.
    pub fn catalog(&self) -> &CatalogService {
        &self.catalog
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState").finish_non_exhaustive()
    }
}
