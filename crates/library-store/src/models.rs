//! Database models for the storage layer.
//!
//! `BookRow` maps directly to a row of the `books` table. It is kept
//! separate from `library_core::Book` so the column layout can change
//! without touching the wire format.

use chrono::NaiveDate;
use library_core::Book;
use sqlx::FromRow;

/// Database row for the `books` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct BookRow {
    pub isbn: String,
    pub title: String,
    pub author: String,
    pub short_description: String,
    pub page_count: i32,
    /// Stored as `YYYY-MM-DD` text.
    pub release_date: NaiveDate,
}

impl From<BookRow> for Book {
    fn from(row: BookRow) -> Self {
        Self {
            isbn: row.isbn,
            title: row.title,
            author: row.author,
            short_description: row.short_description,
            page_count: row.page_count,
            release_date: row.release_date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_into_book() {
        let row = BookRow {
            isbn: "978-1234567890".to_string(),
            title: "The Dirty Coder".to_string(),
            author: "Nick Chapsas".to_string(),
            short_description: "All my tricks in one book".to_string(),
            page_count: 420,
            release_date: NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
        };
        let book: Book = row.clone().into();
        assert_eq!(book.isbn, row.isbn);
        assert_eq!(book.short_description, row.short_description);
        assert_eq!(book.page_count, 420);
        assert_eq!(book.release_date, row.release_date);
    }
}
