//! PostgreSQL schema migrations for bookstall storage.

use sqlx::PgPool;

use crate::error::StorageError;

/// Run all PostgreSQL migrations.
pub async fn run_pg_migrations(pool: &PgPool) -> Result<(), StorageError> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS book_attributes (
            id TEXT PRIMARY KEY,
            price INTEGER NOT NULL CHECK (price >= 0),
            rating SMALLINT NOT NULL CHECK (rating BETWEEN 0 AND 255),
            liked_by TEXT[] NOT NULL DEFAULT '{}',
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    )
    .execute(pool)
    .await?;

    // Reverse lookup: which books a user liked
    sqlx::query(
        "CREATE INDEX IF NOT EXISTS idx_book_attributes_liked_by
         ON book_attributes USING GIN (liked_by)",
    )
    .execute(pool)
    .await?;

    Ok(())
}
