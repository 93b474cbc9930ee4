//! Application configuration module
//!
//! `AppConfig` holds the three settings the server needs: where to listen,
//! which origin may make credentialed cross-origin requests, and where the
//! SQLite database lives. Values are layered by `AppConfigBuilder`:
//! defaults, then a TOML document, then key/value overrides (the server feeds
//! environment variables through `apply_overrides`).
//!
//! ```toml
//! listen_address = "0.0.0.0:8080"
//! allowed_origin = "https://board.example.com"
//! db_path = "/var/lib/kanban/db.sqlite"
//! ```
//!
//! An empty `allowed_origin` disables the CORS layer.

use std::path::PathBuf;

use serde::Deserialize;
use thiserror::Error;

/// Default listen address
pub const DEFAULT_LISTEN_ADDRESS: &str = "localhost:8080";

/// Default origin allowed to make cross-origin requests
pub const DEFAULT_ALLOWED_ORIGIN: &str = "http://localhost:3000";

/// Default SQLite database file
pub const DEFAULT_DB_PATH: &str = "db.sqlite";

/// Override key for the listen address
pub const LISTEN_ADDRESS_KEY: &str = "KANBAN_LISTEN_ADDRESS";

/// Override key for the allowed origin
pub const ALLOWED_ORIGIN_KEY: &str = "KANBAN_ALLOWED_ORIGIN";

/// Override key for the database path
pub const DB_PATH_KEY: &str = "KANBAN_DB_PATH";

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Address to bind, as `host:port`
    pub listen_address: String,
    /// Origin allowed to make credentialed cross-origin requests.
    /// `None` disables the CORS layer entirely.
    pub allowed_origin: Option<String>,
    /// Location of the SQLite database file
    pub db_path: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            listen_address: DEFAULT_LISTEN_ADDRESS.to_string(),
            allowed_origin: Some(DEFAULT_ALLOWED_ORIGIN.to_string()),
            db_path: PathBuf::from(DEFAULT_DB_PATH),
        }
    }
}

impl AppConfig {
    /// Create a new AppConfigBuilder seeded with the defaults
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// - `InvalidListenAddress` unless the address is `host:port` with a numeric port
    /// - `InvalidOrigin` unless the origin is a bare `http`/`https` origin
    /// - `MissingValue` if the database path is empty
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_listen_address(&self.listen_address)?;
        if let Some(origin) = &self.allowed_origin {
            validate_origin(origin)?;
        }
        if self.db_path.as_os_str().is_empty() {
            return Err(ConfigError::MissingValue("db_path"));
        }
        Ok(())
    }

    /// Whether cross-origin requests are allowed at all
    pub fn cors_enabled(&self) -> bool {
        self.allowed_origin.is_some()
    }
}

fn validate_listen_address(address: &str) -> Result<(), ConfigError> {
    let invalid = || ConfigError::InvalidListenAddress(address.to_string());

    let (host, port) = address.rsplit_once(':').ok_or_else(invalid)?;
    if host.is_empty() {
        return Err(invalid());
    }
    port.parse::<u16>().map_err(|_| invalid())?;
    Ok(())
}

/// Check that `origin` is a bare `http`/`https` origin usable with
/// credentialed CORS
pub fn validate_origin(origin: &str) -> Result<(), ConfigError> {
    let invalid = |reason: &str| ConfigError::InvalidOrigin(format!("{}: {}", origin, reason));

    // Credentialed CORS cannot be combined with a wildcard origin
    if origin == "*" {
        return Err(invalid("wildcard origin cannot be used with credentials"));
    }

    let host = origin
        .strip_prefix("http://")
        .or_else(|| origin.strip_prefix("https://"))
        .ok_or_else(|| invalid("scheme must be http or https"))?;

    if host.is_empty() || host.contains('/') {
        return Err(invalid("expected scheme://host[:port] with no path"));
    }
    if !origin.bytes().all(|b| b.is_ascii_graphic()) {
        return Err(invalid("contains characters not allowed in a header value"));
    }
    Ok(())
}

/// Shape of the TOML configuration file; every key is optional
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    listen_address: Option<String>,
    allowed_origin: Option<String>,
    db_path: Option<PathBuf>,
}

/// Builder for AppConfig
#[derive(Debug, Clone)]
pub struct AppConfigBuilder {
    listen_address: String,
    allowed_origin: Option<String>,
    db_path: PathBuf,
}

impl Default for AppConfigBuilder {
    fn default() -> Self {
        let AppConfig {
            listen_address,
            allowed_origin,
            db_path,
        } = AppConfig::default();
        Self {
            listen_address,
            allowed_origin,
            db_path,
        }
    }
}

impl AppConfigBuilder {
    /// Set the listen address
    pub fn listen_address(mut self, address: impl Into<String>) -> Self {
        self.listen_address = address.into();
        self
    }

    /// Set the allowed origin; an empty string disables CORS
    pub fn allowed_origin(mut self, origin: impl Into<String>) -> Self {
        let origin = origin.into();
        self.allowed_origin = if origin.is_empty() { None } else { Some(origin) };
        self
    }

    /// Turn the CORS layer off
    pub fn disable_cors(mut self) -> Self {
        self.allowed_origin = None;
        self
    }

    /// Set the database path
    pub fn db_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.db_path = path.into();
        self
    }

    /// Layer values from a TOML document over the current ones
    pub fn apply_toml(mut self, source: &str) -> Result<Self, ConfigError> {
        let file: FileConfig = toml::from_str(source)?;
        if let Some(address) = file.listen_address {
            self = self.listen_address(address);
        }
        if let Some(origin) = file.allowed_origin {
            self = self.allowed_origin(origin);
        }
        if let Some(path) = file.db_path {
            self = self.db_path(path);
        }
        Ok(self)
    }

    /// Layer values from a key lookup (normally the process environment)
    ///
    /// Recognized keys are `KANBAN_LISTEN_ADDRESS`, `KANBAN_ALLOWED_ORIGIN`
    /// and `KANBAN_DB_PATH`.
    pub fn apply_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(address) = lookup(LISTEN_ADDRESS_KEY) {
            self = self.listen_address(address);
        }
        if let Some(origin) = lookup(ALLOWED_ORIGIN_KEY) {
            self = self.allowed_origin(origin);
        }
        if let Some(path) = lookup(DB_PATH_KEY) {
            self = self.db_path(path);
        }
        self
    }

    /// Build and validate the configuration
    pub fn build(self) -> Result<AppConfig, ConfigError> {
        let config = AppConfig {
            listen_address: self.listen_address,
            allowed_origin: self.allowed_origin,
            db_path: self.db_path,
        };
        config.validate()?;
        Ok(config)
    }
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid listen address '{0}': expected host:port")]
    InvalidListenAddress(String),
    #[error("invalid allowed origin {0}")]
    InvalidOrigin(String),
    #[error("missing value: {0}")]
    MissingValue(&'static str),
    #[error("failed to read config file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config file: {0}")]
    Parse(#[from] toml::de::Error),
}
