//! Book catalog routes.
//!
//! This module implements the book-related HTTP endpoints:
//! - GET /books - List books, optionally filtered by `searchTerm`
//! - GET /books/{isbn} - Fetch one book
//! - POST /books - Create a book
//! - PUT /books/{isbn} - Overwrite a book
//! - DELETE /books/{isbn} - Delete a book

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::{StatusCode, header},
    routing::get,
};
use serde::Deserialize;

use library_core::{Book, ValidationFailure, validate_book};

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

// ============================================================================
// Request Types
// ============================================================================

/// Query parameters for GET /books.
#[derive(Debug, Default, Deserialize)]
pub struct ListBooksQuery {
    /// Substring to look for in titles. Empty means no filter.
    #[serde(rename = "searchTerm")]
    pub search_term: Option<String>,
}

// ============================================================================
// Helper Functions
// ============================================================================

fn ensure_valid(book: &Book) -> ApiResult<()> {
    let failures = validate_book(book);
    if failures.is_empty() {
        Ok(())
    } else {
        tracing::debug!(isbn = %book.isbn, failures = failures.len(), "Book rejected");
        Err(ApiError::Validation(failures))
    }
}

fn book_not_found(isbn: &str) -> ApiError {
    ApiError::NotFound(format!("book {}", isbn))
}

// ============================================================================
// Route Handlers
// ============================================================================

/// GET /books - List books.
///
/// # Response
///
/// - 200 OK: `[Book, ...]`, possibly empty
async fn list_books(
    State(state): State<AppState>,
    Query(query): Query<ListBooksQuery>,
) -> ApiResult<Json<Vec<Book>>> {
    let catalog = state.catalog();

    let books = match query.search_term.as_deref() {
        Some(term) if !term.is_empty() => catalog.search_by_title(term).await?,
        _ => catalog.get_all().await?,
    };

    Ok(Json(books))
}

/// GET /books/{isbn} - Fetch one book.
///
/// # Response
///
/// - 200 OK: `Book`
/// - 404 Not Found: No book with this ISBN
async fn get_book(
    State(state): State<AppState>,
    Path(isbn): Path<String>,
) -> ApiResult<Json<Book>> {
    state
        .catalog()
        .get_by_isbn(&isbn)
        .await?
        .map(Json)
        .ok_or_else(|| book_not_found(&isbn))
}

/// POST /books - Create a book.
///
/// # Response
///
/// - 201 Created: `Book`, with `Location: /books/{isbn}`
/// - 400 Bad Request: `[{"propertyName", "errorMessage"}, ...]`, including
///   the case where the ISBN is already taken
async fn create_book(
    State(state): State<AppState>,
    Json(book): Json<Book>,
) -> ApiResult<(StatusCode, [(header::HeaderName, String); 1], Json<Book>)> {
    ensure_valid(&book)?;

    if !state.catalog().create(&book).await? {
        return Err(ApiError::Validation(vec![ValidationFailure::duplicate_isbn()]));
    }

    tracing::info!(isbn = %book.isbn, title = %book.title, "Book created");

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, book.location())],
        Json(book),
    ))
}

/// PUT /books/{isbn} - Overwrite a book.
///
/// The ISBN in the path wins over any ISBN in the body.
///
/// # Response
///
/// - 200 OK: the updated `Book`
/// - 400 Bad Request: validation failures
/// - 404 Not Found: No book with this ISBN
async fn update_book(
    State(state): State<AppState>,
    Path(isbn): Path<String>,
    Json(book): Json<Book>,
) -> ApiResult<Json<Book>> {
    let book = book.with_isbn(isbn);
    ensure_valid(&book)?;

    if !state.catalog().update(&book).await? {
        return Err(book_not_found(&book.isbn));
    }

    tracing::info!(isbn = %book.isbn, "Book updated");

    Ok(Json(book))
}

/// DELETE /books/{isbn} - Delete a book.
///
/// # Response
///
/// - 204 No Content
/// - 404 Not Found: No book with this ISBN
async fn delete_book(
    State(state): State<AppState>,
    Path(isbn): Path<String>,
) -> ApiResult<StatusCode> {
    if !state.catalog().delete(&isbn).await? {
        return Err(book_not_found(&isbn));
    }

    tracing::info!(isbn = %isbn, "Book deleted");

    Ok(StatusCode::NO_CONTENT)
}

/// Build book routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/books", get(list_books).post(create_book))
        .route(
            "/books/{isbn}",
            get(get_book).put(update_book).delete(delete_book),
        )
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_query_deserialize() {
        let query: ListBooksQuery = serde_json::from_str(r#"{"searchTerm": "oder"}"#).unwrap();
        assert_eq!(query.search_term.as_deref(), Some("oder"));

        let query: ListBooksQuery = serde_json::from_str("{}").unwrap();
        assert!(query.search_term.is_none());
    }

    #[test]
    fn test_ensure_valid_rejects_bad_isbn() {
        let book = Book {
            isbn: "INVALID_BLEH".to_string(),
            title: "The Dirty Coder".to_string(),
            author: "Nick Chapsas".to_string(),
            short_description: "All my tricks in one book".to_string(),
            page_count: 420,
            ..Book::default()
        };
        match ensure_valid(&book) {
            Err(ApiError::Validation(failures)) => {
                assert_eq!(failures.len(), 1);
                assert_eq!(failures[0].property_name, "Isbn");
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_book_not_found_message() {
        let err = book_not_found("978-1234567890");
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert!(err.to_string().contains("978-1234567890"));
    }
}
