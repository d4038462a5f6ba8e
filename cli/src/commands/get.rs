//! GET command - Show a single book.

use anyhow::Result;
use clap::Args;
use library_core::Book;

use super::{book_url, make_request, output};

/// Arguments for the get command.
#[derive(Args)]
pub struct GetArgs {
    /// ISBN of the book
    pub isbn: String,
}

/// Execute the get command.
pub async fn execute(
    client: &reqwest::Client,
    base_url: &str,
    human: bool,
    args: GetArgs,
) -> Result<()> {
    let url = book_url(base_url, &args.isbn)?;

    let book: Book = make_request(client.get(url)).await?;

    output(&book, human)
}
