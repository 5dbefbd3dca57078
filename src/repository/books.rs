//! Books repository

use async_trait::async_trait;
use sqlx::{SqliteConnection, SqlitePool};
use validator::Validate;

use super::BookStore;
use crate::{
    error::{AppError, AppResult},
    models::book::{Book, BookInput},
};

const SELECT_BOOK: &str = "SELECT id, title, author, publication_year, available FROM books";

#[derive(Clone)]
pub struct BooksRepository {
    pool: SqlitePool,
}

impl BooksRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Number of stored books
    pub async fn count(&self) -> AppResult<i64> {
        let mut conn = self.pool.acquire().await?;
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM books")
            .fetch_one(&mut *conn)
            .await?;
        Ok(count)
    }
}

#[async_trait]
impl BookStore for BooksRepository {
    async fn list_all(&self) -> AppResult<Vec<Book>> {
        let mut conn = self.pool.acquire().await?;
        let rows = sqlx::query_as::<_, Book>(&format!("{SELECT_BOOK} ORDER BY id"))
            .fetch_all(&mut *conn)
            .await?;
        Ok(rows)
    }

    async fn get_by_id(&self, id: i64) -> AppResult<Book> {
        let mut conn = self.pool.acquire().await?;
        let book = sqlx::query_as::<_, Book>(&format!("{SELECT_BOOK} WHERE id = ?"))
            .bind(id)
            .fetch_optional(&mut *conn)
            .await?;
        book.ok_or(AppError::NotFound(id))
    }

    async fn insert(&self, input: &BookInput) -> AppResult<i64> {
        input.validate()?;

        let mut conn = self.pool.acquire().await?;
        let result = sqlx::query(
            r#"
            INSERT INTO books (title, author, publication_year, available)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(&input.title)
        .bind(&input.author)
        .bind(input.publication_year)
        .bind(input.available)
        .execute(&mut *conn)
        .await?;

        let id = result.last_insert_rowid();
        tracing::info!(book_id = id, "book created");
        Ok(id)
    }

    async fn update(&self, id: i64, input: &BookInput) -> AppResult<()> {
        input.validate()?;

        let mut conn = self.pool.acquire().await?;
        ensure_exists(&mut conn, id).await?;

        let result = sqlx::query(
            r#"
            UPDATE books
            SET title = ?, author = ?, publication_year = ?, available = ?
            WHERE id = ?
            "#,
        )
        .bind(&input.title)
        .bind(&input.author)
        .bind(input.publication_year)
        .bind(input.available)
        .bind(id)
        .execute(&mut *conn)
        .await?;

        // Row removed between the check and the update
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(id));
        }
        tracing::info!(book_id = id, "book updated");
        Ok(())
    }

    async fn delete(&self, id: i64) -> AppResult<()> {
        let mut conn = self.pool.acquire().await?;
        ensure_exists(&mut conn, id).await?;

        let result = sqlx::query("DELETE FROM books WHERE id = ?")
            .bind(id)
            .execute(&mut *conn)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(id));
        }
        tracing::info!(book_id = id, "book deleted");
        Ok(())
    }
}

/// Existence check run on the connection that will perform the mutation
async fn ensure_exists(conn: &mut SqliteConnection, id: i64) -> AppResult<()> {
    let found: Option<i64> = sqlx::query_scalar("SELECT id FROM books WHERE id = ?")
        .bind(id)
        .fetch_optional(&mut *conn)
        .await?;

    match found {
        Some(_) => Ok(()),
        None => Err(AppError::NotFound(id)),
    }
}
