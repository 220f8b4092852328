// ABOUTME: Database connection bootstrap for the todo service
// ABOUTME: Opens the SQLite pool, applies pragmas, and ensures the schema exists

use std::path::Path;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use tracing::{debug, info};

pub async fn open_pool(database_path: &Path) -> Result<SqlitePool, sqlx::Error> {
    debug!("connecting to database: {}", database_path.display());

    let options = SqliteConnectOptions::new()
        .filename(database_path)
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(10)
        .acquire_timeout(Duration::from_secs(30))
        .connect_with(options)
        .await?;

    sqlx::query("PRAGMA journal_mode = WAL")
        .execute(&pool)
        .await?;

    sqlx::query("PRAGMA synchronous = NORMAL")
        .execute(&pool)
        .await?;

    info!("database connection established");

    init_schema(&pool).await?;

    Ok(pool)
}

async fn init_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS todo_item (
            id TEXT PRIMARY KEY,
            summary TEXT NOT NULL,
            date_created TEXT NOT NULL DEFAULT (datetime('now')),
            date_updated TEXT NOT NULL DEFAULT (datetime('now')),
            deleted BOOLEAN NOT NULL DEFAULT FALSE,
            completed BOOLEAN NOT NULL DEFAULT FALSE
        )
        "#,
    )
    .execute(pool)
    .await?;

    debug!("database schema ready");
    Ok(())
}
