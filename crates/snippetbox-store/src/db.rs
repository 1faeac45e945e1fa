//! Database connection management

use crate::errors::{from_rusqlite, Result};
use rusqlite::Connection;
use std::path::Path;
use std::time::Duration;

/// Connection tuning shared by every store handle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreOptions {
    /// Upper bound on waiting for a database lock held by another
    /// connection. Past it the operation fails with a storage error.
    pub busy_timeout: Duration,
}

impl Default for StoreOptions {
    fn default() -> Self {
        Self {
            busy_timeout: Duration::from_secs(5),
        }
    }
}

/// Open a SQLite database at the given path
pub fn open<P: AsRef<Path>>(path: P) -> Result<Connection> {
    Connection::open(path).map_err(|e| from_rusqlite("db_open", e))
}

/// Open an in-memory SQLite database (for testing)
pub fn open_in_memory() -> Result<Connection> {
    Connection::open_in_memory().map_err(|e| from_rusqlite("db_open", e))
}

/// Configure a connection
///
/// The busy timeout is set first so that switching to WAL does not fail
/// outright when another connection holds the lock.
pub fn configure(conn: &Connection, options: &StoreOptions) -> Result<()> {
    conn.busy_timeout(options.busy_timeout)
        .map_err(|e| from_rusqlite("db_configure", e))?;

    // In-memory databases report "memory" and stay that way
    let _mode: String = conn
        .pragma_update_and_check(None, "journal_mode", "WAL", |row| row.get(0))
        .map_err(|e| from_rusqlite("db_configure", e))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configure_in_memory() {
        let conn = open_in_memory().unwrap();
        assert!(configure(&conn, &StoreOptions::default()).is_ok());
    }

    #[test]
    fn test_configure_file_uses_wal() {
        let dir = tempfile::tempdir().unwrap();
        let conn = open(dir.path().join("snippets.db")).unwrap();
        configure(&conn, &StoreOptions::default()).unwrap();

        let mode: String = conn
            .query_row("PRAGMA journal_mode", [], |row| row.get(0))
            .unwrap();
        assert_eq!(mode.to_lowercase(), "wal");
    }
}
