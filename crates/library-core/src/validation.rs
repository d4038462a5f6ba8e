//! Field-level validation for books.
//!
//! `validate_book` runs every rule and collects the failures in a fixed
//! order: ISBN, title, short description, author, page count. An empty
//! result means the book may be stored.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::types::Book;

/// Digits and hyphens, ending in a digit. The digit count is checked separately.
static ISBN_SHAPE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9-]*[0-9]$").expect("valid isbn shape regex"));

pub const INVALID_ISBN_MESSAGE: &str = "Value was not a valid ISBN-13";
pub const DUPLICATE_ISBN_MESSAGE: &str = "A book with this ISBN-13 already exists";

/// A single rule violation, reported to clients as
/// `{"propertyName": ..., "errorMessage": ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationFailure {
    pub property_name: String,
    pub error_message: String,
}

impl ValidationFailure {
    pub fn new(property_name: impl Into<String>, error_message: impl Into<String>) -> Self {
        Self {
            property_name: property_name.into(),
            error_message: error_message.into(),
        }
    }

    /// The failure reported when creating a book whose ISBN is taken.
    pub fn duplicate_isbn() -> Self {
        Self::new("Isbn", DUPLICATE_ISBN_MESSAGE)
    }
}

/// Returns true for ISBN-10 or ISBN-13 values. Hyphens may appear anywhere
/// except after the last digit.
pub fn is_valid_isbn(isbn: &str) -> bool {
    if !ISBN_SHAPE_RE.is_match(isbn) {
        return false;
    }
    let digits = isbn.bytes().filter(u8::is_ascii_digit).count();
    digits == 10 || digits == 13
}

/// Validate a book, returning every failure found.
pub fn validate_book(book: &Book) -> Vec<ValidationFailure> {
    let mut failures = Vec::new();

    if !is_valid_isbn(&book.isbn) {
        failures.push(ValidationFailure::new("Isbn", INVALID_ISBN_MESSAGE));
    }

    not_empty(&mut failures, "Title", "Title", &book.title);
    not_empty(
        &mut failures,
        "ShortDescription",
        "Short Description",
        &book.short_description,
    );
    not_empty(&mut failures, "Author", "Author", &book.author);

    if book.page_count <= 0 {
        failures.push(ValidationFailure::new(
            "PageCount",
            "'Page Count' must be greater than '0'.",
        ));
    }

    failures
}

fn not_empty(failures: &mut Vec<ValidationFailure>, property: &str, label: &str, value: &str) {
    if value.trim().is_empty() {
        failures.push(ValidationFailure::new(
            property,
            format!("'{label}' must not be empty."),
        ));
    }
}
