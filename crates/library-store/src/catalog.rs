//! Catalog service providing book-level operations over the store.
//!
//! Expected outcomes are values, not errors: a duplicate ISBN on create or
//! a missing book on update/delete comes back as `false`, a missing book on
//! lookup as `None`. `StoreError` is reserved for storage faults.

use library_core::Book;

use crate::Store;
use crate::error::StoreResult;

/// Business rules for the book catalog.
#[derive(Debug, Clone)]
pub struct CatalogService {
    store: Store,
}

impl CatalogService {
    /// Create a catalog service over the given store.
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    /// Get reference to the underlying store.
    #[cfg(test)]
    pub fn store(&self) -> &Store {
        &self.store
    }

    /// Store a new book.
    ///
    /// Returns false without writing anything if the ISBN is already taken.
    /// Concurrent creates of one ISBN yield exactly one `true`.
    pub async fn create(&self, book: &Book) -> StoreResult<bool> {
        let created = self.store.insert_book(book).await? == 1;
        if created {
            tracing::debug!(isbn = %book.isbn, "Book stored");
        } else {
            tracing::debug!(isbn = %book.isbn, "Book already exists");
        }
        Ok(created)
    }

    /// Look up a book by ISBN.
    pub async fn get_by_isbn(&self, isbn: &str) -> StoreResult<Option<Book>> {
        Ok(self.store.get_book(isbn).await?.map(Book::from))
    }

    /// Every book in the catalog.
    pub async fn get_all(&self) -> StoreResult<Vec<Book>> {
        let rows = self.store.list_books().await?;
        Ok(rows.into_iter().map(Book::from).collect())
    }

    /// Books whose title contains `term`.
    pub async fn search_by_title(&self, term: &str) -> StoreResult<Vec<Book>> {
        let rows = self.store.search_books_by_title(term).await?;
        Ok(rows.into_iter().map(Book::from).collect())
    }

    /// Overwrite the stored book with `book.isbn`.
    ///
    /// Returns false without writing anything if no such book exists.
    pub async fn update(&self, book: &Book) -> StoreResult<bool> {
        Ok(self.store.update_book(book).await? == 1)
    }

    /// Remove a book. Returns false if no such book exists.
    pub async fn delete(&self, isbn: &str) -> StoreResult<bool> {
        Ok(self.store.delete_book(isbn).await? == 1)
    }
}
