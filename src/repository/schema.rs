//! Storage schema for book records

use sqlx::SqlitePool;

use crate::error::AppResult;

/// `AUTOINCREMENT` keeps ids monotonic: a deleted id is never handed out again.
const CREATE_BOOKS_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS books (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        title TEXT NOT NULL,
        author TEXT NOT NULL,
        publication_year INTEGER NOT NULL,
        available BOOLEAN NOT NULL
    )
"#;

/// Create the `books` table if it does not exist yet. Safe to call repeatedly.
pub async fn ensure_schema(pool: &SqlitePool) -> AppResult<()> {
    let mut conn = pool.acquire().await?;
    sqlx::query(CREATE_BOOKS_TABLE).execute(&mut *conn).await?;
    tracing::debug!("books table ready");
    Ok(())
}
