//! Database configuration loading.
//!
//! # Responsibility
//! - Read the `[database]` table from a TOML configuration file.
//! - Classify every loading failure as `ErrorKind::Configuration`.
//!
//! # Invariants
//! - A loaded config always has a non-empty database path.
//! - Relative database paths are resolved against the config file directory.
//!
//! Example:
//! ```toml
//! [database]
//! path = "clubdesk.sqlite3"
//! busy_timeout_ms = 2000
//! ```

use crate::error::{CoreError, CoreResult, ResultExt};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Special `path` value selecting a private in-memory database.
pub const IN_MEMORY_PATH: &str = ":memory:";

const DEFAULT_BUSY_TIMEOUT_MS: u64 = 5_000;
/// SQLite takes the busy timeout as a C `int` of milliseconds.
const MAX_BUSY_TIMEOUT_MS: u64 = i32::MAX as u64;

/// Top-level configuration file shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    pub database: DbConfig,
}

/// Connection settings for the club store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DbConfig {
    /// SQLite file path, or `:memory:`.
    pub path: String,
    #[serde(default = "default_busy_timeout_ms")]
    pub busy_timeout_ms: u64,
}

/// Where a `DbConfig` points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DbTarget {
    Memory,
    File(PathBuf),
}

impl DbConfig {
    pub fn in_memory() -> Self {
        Self {
            path: IN_MEMORY_PATH.to_string(),
            busy_timeout_ms: DEFAULT_BUSY_TIMEOUT_MS,
        }
    }

    pub fn file(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_string_lossy().into_owned(),
            busy_timeout_ms: DEFAULT_BUSY_TIMEOUT_MS,
        }
    }

    pub fn target(&self) -> DbTarget {
        match self.path.trim() {
            IN_MEMORY_PATH => DbTarget::Memory,
            path => DbTarget::File(PathBuf::from(path)),
        }
    }

    pub fn busy_timeout(&self) -> Duration {
        Duration::from_millis(self.busy_timeout_ms)
    }

    /// Rejects values that cannot yield a usable connection.
    pub fn validate(&self) -> CoreResult<()> {
        if self.path.trim().is_empty() {
            return Err(CoreError::configuration("database.path must not be empty"));
        }
        if self.busy_timeout_ms > MAX_BUSY_TIMEOUT_MS {
            return Err(CoreError::configuration(format!(
                "database.busy_timeout_ms must be at most {MAX_BUSY_TIMEOUT_MS}"
            )));
        }
        Ok(())
    }
}

impl AppConfig {
    /// Loads and validates a TOML configuration file.
    ///
    /// # Errors
    /// - `Configuration` when the file is missing or unreadable.
    /// - `Configuration` when the TOML is malformed or values are invalid.
    pub fn from_file(path: impl AsRef<Path>) -> CoreResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).configuration_context(|| {
            format!("failed to read configuration file `{}`", path.display())
        })?;
        let mut config = Self::from_toml_str(&content)?;

        if let (DbTarget::File(db_path), Some(base)) = (config.database.target(), path.parent()) {
            if db_path.is_relative() {
                config.database.path = base.join(db_path).to_string_lossy().into_owned();
            }
        }
        Ok(config)
    }

    /// Parses and validates configuration text.
    pub fn from_toml_str(content: &str) -> CoreResult<Self> {
        let config: Self = toml::from_str(content)
            .configuration_context(|| "malformed database configuration".to_string())?;
        config.database.validate()?;
        Ok(config)
    }
}

fn default_busy_timeout_ms() -> u64 {
    DEFAULT_BUSY_TIMEOUT_MS
}

#[cfg(test)]
mod tests {
    use super::{AppConfig, DbConfig, DbTarget};
    use crate::error::ErrorKind;
    use std::time::Duration;

    #[test]
    fn parses_database_table_with_default_timeout() {
        let config = AppConfig::from_toml_str("[database]\npath = \":memory:\"\n").unwrap();
        assert_eq!(config.database.target(), DbTarget::Memory);
        assert_eq!(config.database.busy_timeout(), Duration::from_secs(5));
    }

    #[test]
    fn malformed_toml_is_a_configuration_error() {
        let err = AppConfig::from_toml_str("[database\npath = 1").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Configuration);
        assert!(err.cause().is_some());
    }

    #[test]
    fn missing_path_value_is_a_configuration_error() {
        let err = AppConfig::from_toml_str("[database]\nbusy_timeout_ms = 10\n").unwrap_err();
        assert!(err.is_configuration());

        let err = AppConfig::from_toml_str("[database]\npath = \"  \"\n").unwrap_err();
        assert!(err.is_configuration());
        assert!(err.message().contains("database.path"));
    }

    #[test]
    fn busy_timeout_beyond_sqlite_range_is_a_configuration_error() {
        let err = AppConfig::from_toml_str(
            "[database]\npath = \"x.sqlite3\"\nbusy_timeout_ms = 3000000000\n",
        )
        .unwrap_err();
        assert!(err.is_configuration());
        assert!(err.message().contains("database.busy_timeout_ms"));

        let config = AppConfig::from_toml_str(
            "[database]\npath = \"x.sqlite3\"\nbusy_timeout_ms = 2147483647\n",
        )
        .unwrap();
        assert_eq!(config.database.busy_timeout_ms, 2_147_483_647);
    }

    #[test]
    fn unknown_keys_are_a_configuration_error() {
        let err =
            AppConfig::from_toml_str("[database]\npath = \":memory:\"\nbusy_timeout = 10\n")
                .unwrap_err();
        assert!(err.is_configuration());
        assert!(err.cause().is_some());

        let err =
            AppConfig::from_toml_str("[database]\npath = \":memory:\"\n[cache]\nsize = 1\n")
                .unwrap_err();
        assert!(err.is_configuration());
    }

    #[test]
    fn missing_file_is_a_configuration_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = AppConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
        assert!(err.is_configuration());
        assert!(err.message().contains("absent.toml"));
    }

    #[test]
    fn relative_database_path_resolves_next_to_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("db.toml");
        std::fs::write(
            &config_path,
            "[database]\npath = \"clubs.sqlite3\"\nbusy_timeout_ms = 250\n",
        )
        .unwrap();

        let config = AppConfig::from_file(&config_path).unwrap();
        assert_eq!(
            config.database.target(),
            DbTarget::File(dir.path().join("clubs.sqlite3"))
        );
        assert_eq!(config.database.busy_timeout_ms, 250);
    }

    #[test]
    fn file_constructor_round_trips_target() {
        let config = DbConfig::file("/tmp/clubdesk.sqlite3");
        assert_eq!(
            config.target(),
            DbTarget::File("/tmp/clubdesk.sqlite3".into())
        );
    }
}
