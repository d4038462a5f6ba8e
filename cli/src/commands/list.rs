//! LIST command - List books, optionally searching titles.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use library_core::Book;
use serde::Serialize;

use super::{HumanReadable, books_url, make_request, output};

/// Arguments for the list command.
#[derive(Args)]
pub struct ListArgs {
    /// Only list books whose title contains this text
    #[arg(long, short = 's')]
    pub search: Option<String>,
}

/// Books returned by the server.
#[derive(Debug, Serialize)]
#[serde(transparent)]
pub struct BookList(pub Vec<Book>);

impl HumanReadable for BookList {
    fn print_human(&self) {
        println!("{}", "Books".green().bold());
        println!("{}", "=".repeat(80));

        if self.0.is_empty() {
            println!("  {}", "(No books found)".dimmed());
            return;
        }

        for book in &self.0 {
            println!();
            book.print_human();
        }

        println!();
        println!("{} book(s)", self.0.len());
    }
}

/// Execute the list command.
pub async fn execute(
    client: &reqwest::Client,
    base_url: &str,
    human: bool,
    args: ListArgs,
) -> Result<()> {
    let url = books_url(base_url)?;

    let mut request = client.get(url);
    if let Some(term) = &args.search {
        request = request.query(&[("searchTerm", term)]);
    }

    let books: Vec<Book> = make_request(request).await?;

    output(&BookList(books), human)
}
