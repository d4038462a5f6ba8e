//! ADD command - Create a new book.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use library_core::Book;

use super::{BookFields, books_url, make_request, output};

/// Arguments for the add command.
#[derive(Args)]
pub struct AddArgs {
    /// ISBN-10 or ISBN-13, hyphens allowed
    pub isbn: String,

    #[command(flatten)]
    pub fields: BookFields,
}

/// Execute the add command.
pub async fn execute(
    client: &reqwest::Client,
    base_url: &str,
    human: bool,
    args: AddArgs,
) -> Result<()> {
    let url = books_url(base_url)?;

    let book = args.fields.into_book(args.isbn);
    let created: Book = make_request(client.post(url).json(&book)).await?;

    if human {
        println!("{}", "Book added successfully!".green().bold());
        println!();
    }
    output(&created, human)
}
