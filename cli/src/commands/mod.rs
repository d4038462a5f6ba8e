//! Command implementations for the library CLI.
//!
//! Each command module provides:
//! - Args struct for clap argument parsing
//! - execute() function that performs the command
//! - Human-readable and JSON output formatting

pub mod add;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use anyhow::{Result, anyhow};
use chrono::NaiveDate;
use clap::Args;
use colored::Colorize;
use library_core::{Book, ValidationFailure};
use reqwest::{StatusCode, Url};
use serde::Serialize;

/// Common error type for HTTP requests.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Book rejected:\n{}", format_failures(.0))]
    Validation(Vec<ValidationFailure>),

    #[error("Server error ({status}): {message}")]
    Server { status: u16, message: String },
}

/// Book fields shared by `add` and `update`.
#[derive(Args)]
pub struct BookFields {
    /// Book title
    #[arg(long)]
    pub title: String,

    /// Author name
    #[arg(long)]
    pub author: String,

    /// Short description
    #[arg(long)]
    pub description: String,

    /// Number of pages
    #[arg(long)]
    pub pages: i32,

    /// Release date (YYYY-MM-DD)
    #[arg(long)]
    pub released: NaiveDate,
}

impl BookFields {
    /// Assemble a book keyed by `isbn`.
    pub fn into_book(self, isbn: String) -> Book {
        Book {
            isbn,
            title: self.title,
            author: self.author,
            short_description: self.description,
            page_count: self.pages,
            release_date: self.released,
        }
    }
}

/// Print output in JSON or human-readable format.
pub fn output<T: Serialize + HumanReadable>(value: &T, human: bool) -> Result<()> {
    if human {
        value.print_human();
    } else {
        println!("{}", serde_json::to_string_pretty(value)?);
    }
    Ok(())
}

/// Trait for types that can be printed in human-readable format.
pub trait HumanReadable {
    fn print_human(&self);
}

impl HumanReadable for Book {
    fn print_human(&self) {
        println!("{}", self.title.bold());
        println!("  {} {}", "ISBN:".cyan(), self.isbn);
        println!("  {} {}", "Author:".cyan(), self.author);
        println!("  {} {}", "Pages:".cyan(), self.page_count);
        println!("  {} {}", "Released:".cyan(), self.release_date);
        println!("  {} {}", "About:".cyan(), truncate(&self.short_description, 70));
    }
}

/// URL of the books collection under `base_url`.
pub fn books_url(base_url: &str) -> Result<Url> {
    let mut url = Url::parse(base_url)?;
    url.path_segments_mut()
        .map_err(|_| anyhow!("server URL cannot have a path: {base_url}"))?
        .pop_if_empty()
        .push("books");
    Ok(url)
}

/// URL of a single book. The ISBN is percent-encoded as one path segment.
pub fn book_url(base_url: &str, isbn: &str) -> Result<Url> {
    let mut url = books_url(base_url)?;
    url.path_segments_mut()
        .map_err(|_| anyhow!("server URL cannot have a path: {base_url}"))?
        .push(isbn);
    Ok(url)
}

/// Send a request and turn non-success statuses into errors.
pub async fn send_request(request: reqwest::RequestBuilder) -> Result<reqwest::Response, CliError> {
    let response = request.send().await?;
    let status = response.status();

    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();

    if status == StatusCode::BAD_REQUEST
        && let Ok(failures) = serde_json::from_str::<Vec<ValidationFailure>>(&body)
    {
        return Err(CliError::Validation(failures));
    }

    // Try to parse as JSON error envelope
    let message = serde_json::from_str::<serde_json::Value>(&body)
        .ok()
        .and_then(|json| {
            json.pointer("/error/message")
                .and_then(|v| v.as_str())
                .map(str::to_string)
        })
        .unwrap_or(body);

    Err(CliError::Server {
        status: status.as_u16(),
        message,
    })
}

/// Make an HTTP request and decode the JSON response.
pub async fn make_request<T: serde::de::DeserializeOwned>(
    request: reqwest::RequestBuilder,
) -> Result<T, CliError> {
    Ok(send_request(request).await?.json::<T>().await?)
}

/// Render validation failures one per line.
pub fn format_failures(failures: &[ValidationFailure]) -> String {
    failures
        .iter()
        .map(|f| format!("  {}: {}", f.property_name, f.error_message))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Truncate a string for display, adding ellipsis if needed.
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
