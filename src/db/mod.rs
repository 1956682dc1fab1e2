//! Database module for SQLite persistence.
//!
//! SQLite is the source of truth for donations and NGO requests.

mod repository;

pub use repository::*;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::path::Path;
use std::str::FromStr;

/// Initialize the database connection pool and run migrations.
pub async fn init_database(db_path: &Path) -> Result<SqlitePool, sqlx::Error> {
    // Ensure the parent directory exists
    if let Some(parent) = db_path.parent() {
        tokio::fs::create_dir_all(parent).await.ok();
    }

    let db_url = format!("sqlite:{}?mode=rwc", db_path.display());

    let options = SqliteConnectOptions::from_str(&db_url)?
        .create_if_missing(true)
        .journal_mode(sqlx::sqlite::SqliteJournalMode::Wal)
        .synchronous(sqlx::sqlite::SqliteSynchronous::Normal)
        .busy_timeout(std::time::Duration::from_secs(30));

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    run_migrations(&pool).await?;

    Ok(pool)
}

/// Run database migrations.
async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS donations (
            id TEXT PRIMARY KEY,
            donor_name TEXT NOT NULL,
            contact_number TEXT NOT NULL,
            food_type TEXT NOT NULL,
            quantity TEXT NOT NULL,
            city TEXT NOT NULL,
            area TEXT NOT NULL,
            is_fresh INTEGER NOT NULL DEFAULT 1,
            status TEXT NOT NULL DEFAULT 'Pending',
            created_at TEXT NOT NULL,
            safe_until TEXT
        );
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS ngo_requests (
            id TEXT PRIMARY KEY,
            ngo_name TEXT NOT NULL,
            contact_number TEXT NOT NULL,
            requirements TEXT NOT NULL,
            city TEXT NOT NULL,
            status TEXT NOT NULL DEFAULT 'Pending',
            created_at TEXT NOT NULL
        );
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE INDEX IF NOT EXISTS idx_donations_city ON donations(city);
        CREATE INDEX IF NOT EXISTS idx_ngo_requests_city ON ngo_requests(city);
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}
