//! # Database Module
//!
//! Opens the SQLite connection pool shared by every handler and creates the
//! schema on startup.
//!
//! ## Schema
//!
//! Two tables, created idempotently from `schema.sql`:
//!
//! - `boards(id INTEGER PRIMARY KEY AUTOINCREMENT, title VARCHAR(30) NOT NULL)`
//! - `cards(id INTEGER PRIMARY KEY AUTOINCREMENT, content TEXT NOT NULL,
//!   bid INTEGER NOT NULL REFERENCES boards(id) ON DELETE CASCADE)`
//!
//! SQLite only enforces the foreign key (and therefore the cascade) when
//! `foreign_keys` is on for the connection, so every pooled connection is
//! opened with it enabled.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use kanban::backend::db;
//!
//! # async fn example() -> Result<(), sqlx::Error> {
//! let pool = db::connect("db.sqlite").await?;
//! db::init_schema(&pool).await?;
//! # Ok(())
//! # }
//! ```

use std::path::Path;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions, SqliteSynchronous};

/// How long a connection waits on a locked database before failing
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Open (creating if needed) the database file and build a connection pool
///
/// Uses WAL mode so readers are not blocked by the single writer.
pub async fn connect(db_path: impl AsRef<Path>) -> Result<SqlitePool, sqlx::Error> {
    let db_path = db_path.as_ref();

    let options = SqliteConnectOptions::new()
        .filename(db_path)
        .create_if_missing(true)
        .foreign_keys(true)
        .journal_mode(SqliteJournalMode::Wal)
        .synchronous(SqliteSynchronous::Normal)
        .busy_timeout(BUSY_TIMEOUT);

    let pool = SqlitePoolOptions::new().connect_with(options).await?;
    tracing::info!("Opened SQLite database at {}", db_path.display());

    Ok(pool)
}

/// Create the `boards` and `cards` tables if they do not exist yet
pub async fn init_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::raw_sql(include_str!("schema.sql")).execute(pool).await?;
    tracing::info!("Database schema ready");
    Ok(())
}
