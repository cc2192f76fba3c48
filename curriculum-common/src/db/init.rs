//! Database initialization
//!
//! Opens (or creates) the SQLite course store and makes sure the `courses`
//! table exists. Safe to call on every startup.

use crate::Result;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;
use std::time::Duration;
use tracing::{debug, info};

/// Busy timeout applied to every pooled connection
const BUSY_TIMEOUT: Duration = Duration::from_millis(5000);

/// Open the course store at `database_url` and create the schema if needed
///
/// Accepts any sqlx SQLite URL (`sqlite://catalog.db`, `sqlite::memory:`).
/// The database file is created when it does not exist yet.
pub async fn init_database(database_url: &str) -> Result<SqlitePool> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .busy_timeout(BUSY_TIMEOUT);

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    info!("Opened course store: {}", database_url);

    // WAL lets the query routes keep reading while the load cycle writes
    let journal_mode: String = sqlx::query_scalar("PRAGMA journal_mode = WAL")
        .fetch_one(&pool)
        .await?;
    debug!("Journal mode: {}", journal_mode);

    create_courses_table(&pool).await?;

    Ok(pool)
}

/// Create the courses table
///
/// `tags` holds a JSON array of strings so tag membership can be tested with
/// `json_each`. Rows are returned in `id` order when no sort is requested.
pub async fn create_courses_table(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS courses (
            id INTEGER PRIMARY KEY,
            code TEXT NOT NULL CHECK (length(code) > 0),
            description TEXT NOT NULL CHECK (length(description) > 0),
            units REAL NOT NULL,
            tags TEXT NOT NULL CHECK (json_valid(tags) AND json_type(tags) = 'array')
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_courses_description ON courses(description)")
        .execute(pool)
        .await?;

    Ok(())
}
