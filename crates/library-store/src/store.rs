//! Main store implementation for database operations.
//!
//! The `Store` type issues the parameterized statements behind every
//! catalog operation. Mutations report the number of rows they touched and
//! leave the interpretation to the caller.

use std::str::FromStr;

use library_core::Book;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

use crate::error::{StoreError, StoreResult};
use crate::models::BookRow;
use crate::schema;

/// Connection string for a private in-memory database.
pub const IN_MEMORY_DATABASE_URL: &str = "sqlite::memory:";

/// Configuration for connecting to the database.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Database connection URL.
    pub database_url: String,
    /// Maximum number of connections in the pool.
    pub max_connections: u32,
    /// Run migrations on connect.
    pub run_migrations: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            database_url: "sqlite://library.db".to_string(),
            max_connections: 5,
            run_migrations: true,
        }
    }
}

impl StoreConfig {
    /// Create configuration from environment variables.
    ///
    /// Reads:
    /// - `DATABASE_URL` - Optional, defaults to `sqlite://library.db`
    /// - `DATABASE_MAX_CONNECTIONS` - Optional, defaults to 5
    /// - `DATABASE_RUN_MIGRATIONS` - Optional, defaults to true
    pub fn from_env() -> StoreResult<Self> {
        let defaults = Self::default();

        let database_url = std::env::var("DATABASE_URL").unwrap_or(defaults.database_url);

        let max_connections = match std::env::var("DATABASE_MAX_CONNECTIONS") {
            Ok(s) => s.parse().map_err(|_| {
                StoreError::ConfigError(format!("DATABASE_MAX_CONNECTIONS is not a number: {s}"))
            })?,
            Err(_) => defaults.max_connections,
        };

        let run_migrations = std::env::var("DATABASE_RUN_MIGRATIONS")
            .ok()
            .map(|s| s.to_lowercase() != "false" && s != "0")
            .unwrap_or(true);

        Ok(Self {
            database_url,
            max_connections,
            run_migrations,
        })
    }

    /// Configuration for a throwaway in-memory database.
    ///
    /// Every SQLite connection to `:memory:` opens its own database, so the
    /// pool is capped at a single connection.
    pub fn in_memory() -> Self {
        Self {
            database_url: IN_MEMORY_DATABASE_URL.to_string(),
            max_connections: 1,
            run_migrations: true,
        }
    }
}

/// Database store for the library catalog.
#[derive(Debug, Clone)]
pub struct Store {
    pool: SqlitePool,
}

impl Store {
    /// Connect to the database with the given configuration.
    ///
    /// The database file is created if it does not exist. Runs the schema
    /// initializer before returning if `config.run_migrations` is true.
    pub async fn connect(config: StoreConfig) -> StoreResult<Self> {
        tracing::info!("Connecting to database...");

        let options =
            SqliteConnectOptions::from_str(&config.database_url)?.create_if_missing(true);

        // Connections are never recycled, otherwise an in-memory database
        // would vanish along with its only connection.
        let pool = SqlitePoolOptions::new()
            .max_connections(config.max_connections.max(1))
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;

        tracing::info!(url = %config.database_url, "Connected to database");

        if config.run_migrations {
            schema::run_migrations(&pool).await?;
        } else if !schema::is_schema_initialized(&pool).await? {
            tracing::warn!(
                url = %config.database_url,
                "Migrations disabled and the books table is missing; book requests will fail"
            );
        }

        Ok(Self { pool })
    }

    // ==================== Book Operations ====================

    /// Insert a book unless its ISBN is already present.
    ///
    /// Returns the number of rows inserted: 1 on success, 0 if the ISBN was
    /// taken. The primary key makes the check and the insert one statement.
    pub async fn insert_book(&self, book: &Book) -> StoreResult<u64> {
        let result = sqlx::query(
            r#"
            INSERT INTO books (isbn, title, author, short_description, page_count, release_date)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            ON CONFLICT (isbn) DO NOTHING
            "#,
        )
        .bind(&book.isbn)
        .bind(&book.title)
        .bind(&book.author)
        .bind(&book.short_description)
        .bind(book.page_count)
        .bind(book.release_date)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    /// Check if a book exists.
    #[cfg(test)]
    pub async fn book_exists(&self, isbn: &str) -> StoreResult<bool> {
        let result: (bool,) =
            sqlx::query_as(r#"SELECT EXISTS (SELECT 1 FROM books WHERE isbn = ?1)"#)
                .bind(isbn)
                .fetch_one(&self.pool)
                .await?;

        Ok(result.0)
    }

    /// Get a book by ISBN.
    pub async fn get_book(&self, isbn: &str) -> StoreResult<Option<BookRow>> {
        Ok(sqlx::query_as::<_, BookRow>(
            r#"
            SELECT isbn, title, author, short_description, page_count, release_date
            FROM books
            WHERE isbn = ?1
            "#,
        )
        .bind(isbn)
        .fetch_optional(&self.pool)
        .await?)
    }

    /// List every book, ordered by ISBN.
    pub async fn list_books(&self) -> StoreResult<Vec<BookRow>> {
        Ok(sqlx::query_as::<_, BookRow>(
            r#"
            SELECT isbn, title, author, short_description, page_count, release_date
            FROM books
            ORDER BY isbn
            "#,
        )
        .fetch_all(&self.pool)
        .await?)
    }

    /// List books whose title contains `term`, ordered by ISBN.
    ///
    /// `term` is matched literally; `%` and `_` are not wildcards. Matching
    /// is case-insensitive for ASCII letters, as with any SQLite `LIKE`.
    pub async fn search_books_by_title(&self, term: &str) -> StoreResult<Vec<BookRow>> {
        Ok(sqlx::query_as::<_, BookRow>(
            r#"
            SELECT isbn, title, author, short_description, page_count, release_date
            FROM books
            WHERE title LIKE '%' || ?1 || '%' ESCAPE '\'
            ORDER BY isbn
            "#,
        )
        .bind(escape_like(term))
        .fetch_all(&self.pool)
        .await?)
    }

    /// Overwrite every non-key column of the book with `book.isbn`.
    ///
    /// Returns the number of rows updated: 0 if no such book exists.
    pub async fn update_book(&self, book: &Book) -> StoreResult<u64> {
        let result = sqlx::query(
            r#"
            UPDATE books
            SET title = ?2, author = ?3, short_description = ?4,
                page_count = ?5, release_date = ?6
            WHERE isbn = ?1
            "#,
        )
        .bind(&book.isbn)
        .bind(&book.title)
        .bind(&book.author)
        .bind(&book.short_description)
        .bind(book.page_count)
        .bind(book.release_date)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    /// Delete a book by ISBN.
    ///
    /// Returns the number of rows deleted: 0 if no such book exists.
    pub async fn delete_book(&self, isbn: &str) -> StoreResult<u64> {
        let result = sqlx::query(r#"DELETE FROM books WHERE isbn = ?1"#)
            .bind(isbn)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    /// Count stored books.
    #[cfg(test)]
    pub async fn count_books(&self) -> StoreResult<i64> {
        let count: (i64,) = sqlx::query_as(r#"SELECT COUNT(*) FROM books"#)
            .fetch_one(&self.pool)
            .await?;

        Ok(count.0)
    }
}

/// Escape `LIKE` metacharacters so `term` matches literally.
fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn book(isbn: &str, title: &str) -> Book {
        Book {
            isbn: isbn.to_string(),
            title: title.to_string(),
            author: "Nick Chapsas".to_string(),
            short_description: "All my tricks in one book".to_string(),
            page_count: 420,
            release_date: NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
        }
    }

    async fn store() -> Store {
        Store::connect(StoreConfig::in_memory()).await.unwrap()
    }

    #[test]
    fn test_config_default() {
        let config = StoreConfig::default();
        assert_eq!(config.max_connections, 5);
        assert!(config.run_migrations);
    }

    #[test]
    fn test_config_in_memory_uses_single_connection() {
        let config = StoreConfig::in_memory();
        assert_eq!(config.database_url, IN_MEMORY_DATABASE_URL);
        assert_eq!(config.max_connections, 1);
    }

    #[test]
    fn test_escape_like() {
        assert_eq!(escape_like("oder"), "oder");
        assert_eq!(escape_like("100%"), "100\\%");
        assert_eq!(escape_like("a_b\\c"), "a\\_b\\\\c");
    }

    #[tokio::test]
    async fn test_connect_without_migrations_leaves_schema_alone() {
        let config = StoreConfig {
            run_migrations: false,
            ..StoreConfig::in_memory()
        };
        let store = Store::connect(config).await.unwrap();
        assert!(!schema::is_schema_initialized(&store.pool).await.unwrap());
        assert!(store.list_books().await.is_err());
    }

    #[tokio::test]
    async fn test_connect_runs_migrations() {
        let store = store().await;
        assert!(schema::is_schema_initialized(&store.pool).await.unwrap());
    }

    #[tokio::test]
    async fn test_insert_and_get_book() {
        let store = store().await;
        let book = book("978-1234567890", "The Dirty Coder");

        assert_eq!(store.insert_book(&book).await.unwrap(), 1);

        let row = store.get_book(&book.isbn).await.unwrap().unwrap();
        assert_eq!(Book::from(row), book);
        assert!(store.book_exists(&book.isbn).await.unwrap());
    }

    #[tokio::test]
    async fn test_insert_duplicate_touches_nothing() {
        let store = store().await;
        let original = book("978-1234567890", "The Dirty Coder");
        store.insert_book(&original).await.unwrap();

        let clash = book("978-1234567890", "Another Title");
        assert_eq!(store.insert_book(&clash).await.unwrap(), 0);

        let row = store.get_book(&original.isbn).await.unwrap().unwrap();
        assert_eq!(row.title, "The Dirty Coder");
        assert_eq!(store.count_books().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_get_missing_book() {
        let store = store().await;
        assert!(store.get_book("0000000000").await.unwrap().is_none());
        assert!(!store.book_exists("0000000000").await.unwrap());
    }

    #[tokio::test]
    async fn test_list_books_ordered_by_isbn() {
        let store = store().await;
        store.insert_book(&book("2222222222", "B")).await.unwrap();
        store.insert_book(&book("1111111111", "A")).await.unwrap();

        let isbns: Vec<_> = store
            .list_books()
            .await
            .unwrap()
            .into_iter()
            .map(|r| r.isbn)
            .collect();
        assert_eq!(isbns, ["1111111111", "2222222222"]);
    }

    #[tokio::test]
    async fn test_search_is_literal_substring() {
        let store = store().await;
        store.insert_book(&book("1111111111", "The Dirty Coder")).await.unwrap();
        store.insert_book(&book("2222222222", "Gardening")).await.unwrap();
        store.insert_book(&book("3333333333", "100% Rust")).await.unwrap();

        let hits = store.search_books_by_title("oder").await.unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title, "The Dirty Coder");

        let hits = store.search_books_by_title("%").await.unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title, "100% Rust");

        assert!(store.search_books_by_title("_").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_book() {
        let store = store().await;
        store.insert_book(&book("1111111111", "Draft")).await.unwrap();

        let mut changed = book("1111111111", "Final");
        changed.page_count = 69;
        assert_eq!(store.update_book(&changed).await.unwrap(), 1);

        let row = store.get_book("1111111111").await.unwrap().unwrap();
        assert_eq!(row.title, "Final");
        assert_eq!(row.page_count, 69);
    }

    #[tokio::test]
    async fn test_update_missing_book() {
        let store = store().await;
        assert_eq!(store.update_book(&book("1111111111", "Ghost")).await.unwrap(), 0);
        assert_eq!(store.count_books().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_delete_book() {
        let store = store().await;
        store.insert_book(&book("1111111111", "Doomed")).await.unwrap();

        assert_eq!(store.delete_book("1111111111").await.unwrap(), 1);
        assert_eq!(store.delete_book("1111111111").await.unwrap(), 0);
        assert!(store.get_book("1111111111").await.unwrap().is_none());
    }
}
