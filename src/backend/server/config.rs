/**
 * Server Configuration
 *
 * This module loads the `AppConfig` for the server process and opens the
 * database it points at.
 *
 * # Configuration Sources
 *
 * Lowest precedence first:
 *
 * 1. Built-in defaults (`localhost:8080`, `http://localhost:3000`, `db.sqlite`)
 * 2. A TOML file: the path in `KANBAN_CONFIG`, otherwise `kanban.toml` in the
 *    working directory if it exists
 * 3. Environment variables `KANBAN_LISTEN_ADDRESS`, `KANBAN_ALLOWED_ORIGIN`
 *    and `KANBAN_DB_PATH`
 *
 * # Error Handling
 *
 * Unlike optional services, the database is required: failing to open it or
 * to create the schema is returned as an error and aborts startup.
 */

use std::path::{Path, PathBuf};

use sqlx::SqlitePool;

use crate::backend::db;
use crate::backend::error::BackendError;
use crate::shared::{AppConfig, AppConfigBuilder, ConfigError};

/// Environment variable naming the configuration file
pub const CONFIG_PATH_KEY: &str = "KANBAN_CONFIG";

/// Configuration file picked up from the working directory
pub const DEFAULT_CONFIG_FILE: &str = "kanban.toml";

/// Load the configuration from file and environment
///
/// # Errors
///
/// - `ConfigError::Io` if `KANBAN_CONFIG` names a file that cannot be read
/// - `ConfigError::Parse` if the file is not valid TOML or has unknown keys
/// - Any validation error from `AppConfig::validate`
pub fn load_config() -> Result<AppConfig, ConfigError> {
    let builder = match config_file_path() {
        Some(path) => {
            tracing::info!("Loading configuration from {}", path.display());
            apply_file(AppConfig::builder(), &path)?
        }
        None => AppConfig::builder(),
    };

    builder
        .apply_overrides(|key| std::env::var(key).ok())
        .build()
}

fn config_file_path() -> Option<PathBuf> {
    match std::env::var(CONFIG_PATH_KEY) {
        Ok(path) => Some(PathBuf::from(path)),
        Err(_) => {
            let default = PathBuf::from(DEFAULT_CONFIG_FILE);
            default.is_file().then_some(default)
        }
    }
}

fn apply_file(builder: AppConfigBuilder, path: &Path) -> Result<AppConfigBuilder, ConfigError> {
    let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    builder.apply_toml(&source)
}

/// Open the configured database and make sure the schema exists
///
/// This function:
/// 1. Opens (creating if missing) the SQLite file at `config.db_path`
/// 2. Creates the `boards` and `cards` tables if they are absent
pub async fn load_database(config: &AppConfig) -> Result<SqlitePool, BackendError> {
    tracing::info!("Connecting to database...");

    let pool = db::connect(&config.db_path).await.map_err(|e| {
        tracing::error!("Failed to open database {}: {}", config.db_path.display(), e);
        e
    })?;

    db::init_schema(&pool).await.map_err(|e| {
        tracing::error!("Failed to create database schema: {}", e);
        e
    })?;

    Ok(pool)
}
