//! library-core: Core types for the library catalog
//!
//! This crate provides:
//! - The `Book` entity shared by the store, server and CLI
//! - Field-level validation producing structured failures
//!
//! Nothing in here performs I/O.

pub mod types;
pub mod validation;

pub use types::Book;
pub use validation::{ValidationFailure, is_valid_isbn, validate_book};
