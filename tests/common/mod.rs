//! Shared helpers for integration tests

use bookshelf_server::{
    config::{AppConfig, DatabaseConfig},
    repository, AppState,
};
use sqlx::SqlitePool;
use tempfile::TempDir;

/// Fresh SQLite file with the books table in place.
///
/// The returned directory must be kept alive for as long as the pool is used.
pub async fn test_pool() -> (TempDir, SqlitePool) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let config = DatabaseConfig {
        path: dir.path().join("books.db").to_string_lossy().into_owned(),
        max_connections: 2,
        busy_timeout_secs: 5,
    };
    let pool = repository::connect(&config)
        .await
        .expect("Failed to open test database");
    repository::ensure_schema(&pool)
        .await
        .expect("Failed to create schema");
    (dir, pool)
}

#[allow(dead_code)]
pub async fn test_state() -> (TempDir, AppState) {
    let (dir, pool) = test_pool().await;
    (dir, AppState::new(AppConfig::default(), pool))
}
