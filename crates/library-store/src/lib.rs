//! library-store: Storage layer for the library catalog
//!
//! This crate provides:
//! - SQLite storage for books via sqlx (`Store`)
//! - Idempotent schema initialization
//! - The catalog service enforcing business rules over storage
//!
//! # Usage
//!
//! ```rust,ignore
//! use library_store::{CatalogService, Store, StoreConfig};
//!
//! let config = StoreConfig::from_env()?;
//! let store = Store::connect(config).await?;
//! let catalog = CatalogService::new(store);
//!
//! if !catalog.create(&book).await? {
//!     // ISBN already taken
//! }
//! ```

pub mod catalog;
pub mod error;
pub mod models;
pub mod schema;
pub mod store;

pub use catalog::CatalogService;
pub use error::{StoreError, StoreResult};
pub use models::BookRow;
pub use store::{Store, StoreConfig};

// Re-export library-core for downstream crates
pub use library_core;
