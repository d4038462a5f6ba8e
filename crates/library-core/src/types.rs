//! Core data types for the library catalog.
//!
//! A `Book` is the only entity. It is keyed by its ISBN, which is immutable
//! once the book has been stored: updates address a book by ISBN and
//! overwrite every other field.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ============================================================================
// Book
// ============================================================================

/// A book in the catalog.
///
/// Serialized with camelCase field names. Missing fields fall back to their
/// defaults so that an incomplete payload is reported by validation instead
/// of being rejected during deserialization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Book {
    /// ISBN-10 or ISBN-13, optionally hyphenated. Unique across the catalog.
    pub isbn: String,
    pub title: String,
    pub author: String,
    pub short_description: String,
    pub page_count: i32,
    /// Calendar date only, `YYYY-MM-DD` on the wire and in storage. A
    /// datetime such as `"2023-01-01T00:00:00"` fails to deserialize.
    pub release_date: NaiveDate,
}

impl Book {
    /// Returns this book keyed by `isbn`, ignoring whatever ISBN it carried.
    #[must_use]
    pub fn with_isbn(mut self, isbn: impl Into<String>) -> Self {
        self.isbn = isbn.into();
        self
    }

    /// Location of this book's resource relative to the server root.
    pub fn location(&self) -> String {
        format!("/books/{}", self.isbn)
    }
}

// ============================================================================
// Tests
// ============================================================================
