//! Command-line interface for the library catalog.
//!
//! This CLI tool provides commands for all catalog operations:
//! - list: List books, optionally searching titles
//! - get: Show one book
//! - add: Create a new book
//! - update: Overwrite an existing book
//! - delete: Remove a book
//!
//! Configuration via environment:
//! - LIBRARY_URL: Base URL of the library server (default: http://localhost:5000)

mod commands;

use clap::{Parser, Subcommand};

use commands::{
    add::AddArgs, delete::DeleteArgs, get::GetArgs, list::ListArgs, update::UpdateArgs,
};

/// Library catalog CLI
///
/// Manage the book catalog from the command line. Prints JSON by default;
/// pass --human for formatted output.
#[derive(Parser)]
#[command(name = "library")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Output human-readable formatted text instead of JSON
    #[arg(long, global = true)]
    human: bool,

    /// Library server URL
    #[arg(
        long,
        env = "LIBRARY_URL",
        default_value = "http://localhost:5000",
        global = true
    )]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List books, or search them by title
    List(ListArgs),

    /// Show a single book
    Get(GetArgs),

    /// Add a new book
    Add(AddArgs),

    /// Overwrite an existing book
    Update(UpdateArgs),

    /// Delete a book
    Delete(DeleteArgs),
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let client = reqwest::Client::new();
    let url = cli.url.trim_end_matches('/');

    let result = match cli.command {
        Commands::List(args) => commands::list::execute(&client, url, cli.human, args).await,
        Commands::Get(args) => commands::get::execute(&client, url, cli.human, args).await,
        Commands::Add(args) => commands::add::execute(&client, url, cli.human, args).await,
        Commands::Update(args) => commands::update::execute(&client, url, cli.human, args).await,
        Commands::Delete(args) => commands::delete::execute(&client, url, cli.human, args).await,
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_search() {
        let cli = Cli::try_parse_from(["library", "list", "--search", "oder"]).unwrap();
        match cli.command {
            Commands::List(args) => assert_eq!(args.search.as_deref(), Some("oder")),
            _ => panic!("expected list command"),
        }
    }

    #[test]
    fn parses_add() {
        let cli = Cli::try_parse_from([
            "library",
            "--human",
            "add",
            "978-1234567890",
            "--title",
            "The Dirty Coder",
            "--author",
            "Nick Chapsas",
            "--description",
            "All my tricks in one book",
            "--pages",
            "420",
            "--released",
            "2023-01-01",
        ])
        .unwrap();
        assert!(cli.human);
        match cli.command {
            Commands::Add(args) => {
                let book = args.fields.into_book(args.isbn);
                assert_eq!(book.isbn, "978-1234567890");
                assert_eq!(book.page_count, 420);
            }
            _ => panic!("expected add command"),
        }
    }
}
