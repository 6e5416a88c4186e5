//! Explicitly owned single-connection provider.
//!
//! # Responsibility
//! - Own at most one open SQLite connection for the application.
//! - Make the open/close lifecycle explicit to the embedding layer.
//!
//! # Invariants
//! - At most one connection is open per provider; it is reused until
//!   `release()` succeeds.
//! - No pooling and no internal locking. The provider is `Send` but not
//!   `Sync`; callers sharing it across threads must serialize access
//!   themselves (for example behind a `Mutex`).

use super::{open_db, open_db_in_memory};
use crate::config::{AppConfig, DbConfig, DbTarget};
use crate::error::{CoreError, CoreResult, ErrorKind};
use log::{error, info};
use rusqlite::Connection;
use std::path::Path;

pub struct ConnectionProvider {
    config: DbConfig,
    conn: Option<Connection>,
}

impl ConnectionProvider {
    /// Creates a closed provider; nothing is opened until `open`/`acquire`.
    pub fn new(config: DbConfig) -> Self {
        Self { config, conn: None }
    }

    /// Creates a closed provider from a TOML configuration file.
    ///
    /// # Errors
    /// - `Configuration` when the file is missing, unreadable or malformed.
    pub fn from_config_file(path: impl AsRef<Path>) -> CoreResult<Self> {
        let config = AppConfig::from_file(path)?;
        Ok(Self::new(config.database))
    }

    pub fn in_memory() -> Self {
        Self::new(DbConfig::in_memory())
    }

    pub fn config(&self) -> &DbConfig {
        &self.config
    }

    pub fn is_open(&self) -> bool {
        self.conn.is_some()
    }

    /// Opens the connection if it is not open yet. Idempotent.
    ///
    /// # Errors
    /// - `Configuration` when the held config is invalid.
    /// - `Storage` when the database cannot be opened or migrated.
    pub fn open(&mut self) -> CoreResult<()> {
        self.acquire().map(|_| ())
    }

    /// Returns the shared connection, opening it on first use.
    pub fn acquire(&mut self) -> CoreResult<&Connection> {
        if self.conn.is_none() {
            self.config.validate()?;
            let conn = match self.config.target() {
                DbTarget::Memory => open_db_in_memory(),
                DbTarget::File(path) => open_db(path, self.config.busy_timeout()),
            }
            .map_err(|err| {
                CoreError::with_cause(ErrorKind::Storage, "failed to connect to database", err)
            })?;
            self.conn = Some(conn);
        }

        self.conn
            .as_ref()
            .ok_or_else(|| CoreError::storage("database connection is not open"))
    }

    /// Closes the connection if open. Idempotent.
    ///
    /// On failure the handle stays owned by the provider so the caller can
    /// retry.
    pub fn release(&mut self) -> CoreResult<()> {
        let Some(conn) = self.conn.take() else {
            return Ok(());
        };

        match conn.close() {
            Ok(()) => {
                info!("event=db_close module=db status=ok");
                Ok(())
            }
            Err((conn, err)) => {
                error!("event=db_close module=db status=error error={err}");
                self.conn = Some(conn);
                Err(CoreError::with_cause(
                    ErrorKind::Storage,
                    "failed to close database connection",
                    err,
                ))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ConnectionProvider;
    use crate::config::DbConfig;
    use crate::db::migrations::{current_user_version, latest_version};

    #[test]
    fn acquire_opens_lazily_and_reuses_connection() {
        let mut provider = ConnectionProvider::in_memory();
        assert!(!provider.is_open());

        provider
            .acquire()
            .unwrap()
            .execute("INSERT INTO Venues (venue_id, venue_name) VALUES (1, 'Hall')", [])
            .unwrap();
        assert!(provider.is_open());

        let count: i64 = provider
            .acquire()
            .unwrap()
            .query_row("SELECT COUNT(*) FROM Venues", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 1);
    }

    #[test]
    fn release_is_idempotent_and_allows_reopen() {
        let mut provider = ConnectionProvider::in_memory();
        provider.open().unwrap();
        provider.release().unwrap();
        assert!(!provider.is_open());
        provider.release().unwrap();

        let conn = provider.acquire().unwrap();
        assert_eq!(current_user_version(conn).unwrap(), latest_version());
    }

    #[test]
    fn invalid_config_fails_as_configuration() {
        let mut provider = ConnectionProvider::new(DbConfig::file(""));
        let err = provider.acquire().unwrap_err();
        assert!(err.is_configuration());
        assert!(!provider.is_open());
    }

    #[test]
    fn unopenable_file_fails_as_storage() {
        let dir = tempfile::tempdir().unwrap();
        let mut provider =
            ConnectionProvider::new(DbConfig::file(dir.path().join("missing/dir/db.sqlite3")));
        let err = provider.acquire().unwrap_err();
        assert!(err.is_storage());
    }
}
