//! Schema definitions and initialization.
//!
//! The schema is embedded at compile time and applied with
//! `CREATE ... IF NOT EXISTS`, so running it on every startup is safe.

use sqlx::SqlitePool;

use crate::error::{StoreError, StoreResult};

/// Embedded migration SQL for the books table (001_books.sql).
pub const BOOKS_MIGRATION: &str = include_str!("../../../migrations/001_books.sql");

/// Ensure the books table exists.
///
/// # Errors
///
/// Returns an error if the migration fails to execute.
pub async fn run_migrations(pool: &SqlitePool) -> StoreResult<()> {
    tracing::info!("Running database migrations...");

    tracing::debug!("Running books migration (001_books.sql)...");
    sqlx::raw_sql(BOOKS_MIGRATION)
        .execute(pool)
        .await
        .map_err(|e| StoreError::MigrationError(format!("Books migration failed: {}", e)))?;

    tracing::info!("Migrations completed successfully");
    Ok(())
}

/// Check if the schema has been initialized.
///
/// Returns true if the `books` table exists.
pub async fn is_schema_initialized(pool: &SqlitePool) -> StoreResult<bool> {
    let result: (bool,) = sqlx::query_as(
        r#"
        SELECT EXISTS (
            SELECT 1 FROM sqlite_master
            WHERE type = 'table' AND name = 'books'
        )
        "#,
    )
    .fetch_one(pool)
    .await?;

    Ok(result.0)
}

#[cfg(test)]
mod tests {
    use sqlx::sqlite::SqlitePoolOptions;

    use super::*;

    async fn memory_pool() -> SqlitePool {
        SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap()
    }

    #[test]
    fn test_books_migration_embedded() {
        assert!(BOOKS_MIGRATION.contains("CREATE TABLE IF NOT EXISTS books"));
        assert!(BOOKS_MIGRATION.contains("isbn              TEXT    PRIMARY KEY"));
        assert!(BOOKS_MIGRATION.contains("short_description"));
        assert!(BOOKS_MIGRATION.contains("release_date"));
    }

    #[tokio::test]
    async fn test_migrations_create_books_table() {
        let pool = memory_pool().await;
        assert!(!is_schema_initialized(&pool).await.unwrap());

        run_migrations(&pool).await.unwrap();
        assert!(is_schema_initialized(&pool).await.unwrap());
    }

    #[tokio::test]
    async fn test_migrations_add_no_secondary_index() {
        let pool = memory_pool().await;
        run_migrations(&pool).await.unwrap();

        // The primary key's autoindex has no SQL text; anything else was declared.
        let declared: (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM sqlite_master \
             WHERE type = 'index' AND tbl_name = 'books' AND sql IS NOT NULL",
        )
        .fetch_one(&pool)
        .await
        .unwrap();
        assert_eq!(declared.0, 0);
    }

    #[tokio::test]
    async fn test_migrations_are_idempotent() {
        let pool = memory_pool().await;
        run_migrations(&pool).await.unwrap();
        run_migrations(&pool).await.unwrap();
        assert!(is_schema_initialized(&pool).await.unwrap());
    }
}
