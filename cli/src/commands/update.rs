//! UPDATE command - Overwrite an existing book.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use library_core::Book;

use super::{BookFields, book_url, make_request, output};

/// Arguments for the update command.
#[derive(Args)]
pub struct UpdateArgs {
    /// ISBN of the book to overwrite
    pub isbn: String,

    #[command(flatten)]
    pub fields: BookFields,
}

/// Execute the update command.
pub async fn execute(
    client: &reqwest::Client,
    base_url: &str,
    human: bool,
    args: UpdateArgs,
) -> Result<()> {
    let url = book_url(base_url, &args.isbn)?;

    let book = args.fields.into_book(args.isbn);
    let updated: Book = make_request(client.put(url).json(&book)).await?;

    if human {
        println!("{}", "Book updated successfully!".green().bold());
        println!();
    }
    output(&updated, human)
}
