//! Create the Bookshelf database file and the books table, then exit.

use anyhow::Context;

use bookshelf_server::{config::AppConfig, logging, repository};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load().context("Failed to load configuration")?;
    logging::init(&config.logging);

    let pool = repository::connect(&config.database)
        .await
        .context("Failed to open database")?;
    repository::ensure_schema(&pool)
        .await
        .context("Failed to create books table")?;
    pool.close().await;

    tracing::info!(path = %config.database.path, "Database initialized");
    Ok(())
}
