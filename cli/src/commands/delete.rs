//! DELETE command - Remove a book.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use serde::Serialize;

use super::{HumanReadable, book_url, output, send_request};

/// Arguments for the delete command.
#[derive(Args)]
pub struct DeleteArgs {
    /// ISBN of the book to delete
    pub isbn: String,

    /// Skip confirmation prompt (for non-interactive use)
    #[arg(long, short = 'y')]
    pub yes: bool,
}

/// Result of a delete. The server answers 204 with no body.
#[derive(Debug, Serialize)]
pub struct DeleteOutcome {
    pub isbn: String,
    pub deleted: bool,
}

impl HumanReadable for DeleteOutcome {
    fn print_human(&self) {
        println!("{}", "Book deleted successfully!".green().bold());
        println!();
        println!("  {} {}", "ISBN:".cyan(), self.isbn);
    }
}

/// Execute the delete command.
pub async fn execute(
    client: &reqwest::Client,
    base_url: &str,
    human: bool,
    args: DeleteArgs,
) -> Result<()> {
    // Confirmation prompt for interactive use
    if human && !args.yes {
        eprint!(
            "{} Are you sure you want to delete book {}? [y/N] ",
            "Warning:".yellow().bold(),
            args.isbn
        );

        use std::io::Write;
        std::io::stderr().flush()?;

        let mut input = String::new();
        std::io::stdin().read_line(&mut input)?;

        if !input.trim().eq_ignore_ascii_case("y") {
            eprintln!("Aborted.");
            return Ok(());
        }
    }

    let url = book_url(base_url, &args.isbn)?;

    send_request(client.delete(url)).await?;

    output(
        &DeleteOutcome {
            isbn: args.isbn,
            deleted: true,
        },
        human,
    )
}
