//! Repository layer for database operations
//!
//! Every read or write of the `books` table goes through [`BookStore`]. Each
//! operation acquires its own pooled connection and releases it when it
//! returns, whatever the outcome.

pub mod books;
pub mod schema;

use std::time::Duration;

use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

use crate::{
    config::DatabaseConfig,
    error::AppResult,
    models::book::{Book, BookInput},
};

pub use books::BooksRepository;
pub use schema::ensure_schema;

/// Capability set shared by the JSON API and the web form
#[async_trait]
pub trait BookStore: Send + Sync {
    /// All books, ordered by id
    async fn list_all(&self) -> AppResult<Vec<Book>>;

    /// Fails with `NotFound` when no book has this id
    async fn get_by_id(&self, id: i64) -> AppResult<Book>;

    /// Validates the input, stores it and returns the assigned id
    async fn insert(&self, input: &BookInput) -> AppResult<i64>;

    /// Replaces all business fields of an existing book
    async fn update(&self, id: i64, input: &BookInput) -> AppResult<()>;

    /// Permanently removes an existing book
    async fn delete(&self, id: i64) -> AppResult<()>;
}

/// Open the SQLite pool, creating the database file if it is missing
pub async fn connect(config: &DatabaseConfig) -> AppResult<SqlitePool> {
    let options = SqliteConnectOptions::new()
        .filename(&config.path)
        .create_if_missing(true)
        .busy_timeout(Duration::from_secs(config.busy_timeout_secs));

    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .connect_with(options)
        .await?;

    tracing::info!(path = %config.path, "Connected to database");
    Ok(pool)
}

/// Round-trip to the store, used by the readiness probe
pub async fn ping(pool: &SqlitePool) -> AppResult<()> {
    let mut conn = pool.acquire().await?;
    sqlx::query("SELECT 1").execute(&mut *conn).await?;
    Ok(())
}
