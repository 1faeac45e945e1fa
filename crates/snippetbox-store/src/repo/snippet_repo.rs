//! SQLite-backed snippet store
//!
//! Every operation is a single parameterized statement, so atomicity and
//! isolation between concurrent callers come from SQLite. Each caller owns
//! its own `SnippetStore` (and therefore its own connection); handles on the
//! same database file contend only on SQLite's locks, which are bounded by
//! the configured busy timeout.

use crate::db::{self, StoreOptions};
use crate::errors::{from_rusqlite, Result};
use crate::migrations::apply_migrations;
use chrono::{DateTime, TimeZone, Utc};
use rusqlite::types::{FromSqlError, Type};
use rusqlite::{Connection, OptionalExtension, Row};
use snippetbox_core::schema::{
    FIELD_SNIPPET_COUNT, FIELD_SNIPPET_ID, OP_SNIPPET_GET, OP_SNIPPET_INSERT, OP_SNIPPET_LATEST,
};
use snippetbox_core::{log_op_end, log_op_error, log_op_start};
use snippetbox_core::{Clock, Snippet, SnippetError, SystemClock};
use std::path::Path;
use std::time::Instant;

/// Maximum number of snippets returned by [`SnippetStore::latest`]
pub const LATEST_LIMIT: usize = 10;

const MILLIS_PER_DAY: i64 = 86_400_000;

const SELECT_COLUMNS: &str = "SELECT id, title, content, created, expires FROM snippets";

/// Snippet persistence over one SQLite connection
pub struct SnippetStore<C: Clock = SystemClock> {
    conn: Connection,
    clock: C,
}

impl SnippetStore<SystemClock> {
    /// Open (creating if needed) a file database, configure it and bring its
    /// schema up to date
    pub fn open<P: AsRef<Path>>(path: P, options: &StoreOptions) -> Result<Self> {
        let mut conn = db::open(path)?;
        db::configure(&conn, options)?;
        apply_migrations(&mut conn)?;
        Ok(Self::from_connection(conn))
    }

    /// Open a private in-memory database with the schema applied
    pub fn open_in_memory() -> Result<Self> {
        let mut conn = db::open_in_memory()?;
        db::configure(&conn, &StoreOptions::default())?;
        apply_migrations(&mut conn)?;
        Ok(Self::from_connection(conn))
    }

    /// Wrap an already migrated connection
    pub fn from_connection(conn: Connection) -> Self {
        Self {
            conn,
            clock: SystemClock,
        }
    }
}

impl<C: Clock> SnippetStore<C> {
    /// Replace the time source
    pub fn with_clock<C2: Clock>(self, clock: C2) -> SnippetStore<C2> {
        SnippetStore {
            conn: self.conn,
            clock,
        }
    }

    /// Underlying connection, for diagnostics and tests
    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    /// Insert a new snippet and return its assigned id
    ///
    /// Inputs are assumed to be validated already. `created` is the current
    /// instant and `expires` is `created + expires_days` days.
    ///
    /// # Errors
    ///
    /// - `Storage` - the insert failed (lock timeout, constraint, I/O)
    pub fn insert(&self, title: &str, content: &str, expires_days: i64) -> Result<i64> {
        let start = Instant::now();
        log_op_start!(OP_SNIPPET_INSERT, expires_days = expires_days);

        let created = self.clock.now().timestamp_millis();
        let result = expiry_millis(created, expires_days).and_then(|expires| {
            self.conn
                .query_row(
                    "INSERT INTO snippets (title, content, created, expires)
                     VALUES (?1, ?2, ?3, ?4)
                     RETURNING id",
                    rusqlite::params![title, content, created, expires],
                    |row| row.get::<_, i64>(0),
                )
                .map_err(|e| from_rusqlite(OP_SNIPPET_INSERT, e))
        });

        let duration_ms = elapsed_ms(start);
        match &result {
            Ok(id) => {
                log_op_end!(
                    OP_SNIPPET_INSERT,
                    duration_ms = duration_ms,
                    { FIELD_SNIPPET_ID } = *id
                );
            }
            Err(e) => log_op_error!(OP_SNIPPET_INSERT, e, duration_ms = duration_ms),
        }
        result
    }

    /// Fetch a live snippet by id
    ///
    /// An expired snippet is reported exactly like a missing one.
    ///
    /// # Errors
    ///
    /// - `NoRecord` - no live snippet has this id
    /// - `Storage` - the query failed
    pub fn get(&self, id: i64) -> Result<Snippet> {
        let start = Instant::now();
        log_op_start!(OP_SNIPPET_GET, { FIELD_SNIPPET_ID } = id);

        let now = self.clock.now();
        let result = self
            .conn
            .query_row(
                &format!("{SELECT_COLUMNS} WHERE expires > ?1 AND id = ?2"),
                rusqlite::params![now.timestamp_millis(), id],
                row_to_snippet,
            )
            .optional()
            .map_err(|e| from_rusqlite(OP_SNIPPET_GET, e))
            .and_then(|row| row.ok_or(SnippetError::NoRecord));

        let duration_ms = elapsed_ms(start);
        match &result {
            Ok(snippet) => {
                debug_assert!(snippet.is_live_at(now));
                log_op_end!(
                    OP_SNIPPET_GET,
                    duration_ms = duration_ms,
                    { FIELD_SNIPPET_ID } = id,
                    found = true
                );
            }
            Err(SnippetError::NoRecord) => {
                log_op_end!(
                    OP_SNIPPET_GET,
                    duration_ms = duration_ms,
                    { FIELD_SNIPPET_ID } = id,
                    found = false
                );
            }
            Err(e) => log_op_error!(
                OP_SNIPPET_GET,
                e,
                duration_ms = duration_ms,
                { FIELD_SNIPPET_ID } = id
            ),
        }
        result
    }

    /// Fetch up to [`LATEST_LIMIT`] live snippets, highest id first
    ///
    /// Either the complete result set is returned or an error; a failure
    /// while reading any row discards the rows read so far. The cursor is
    /// released before returning on every path.
    ///
    /// # Errors
    ///
    /// - `Storage` - preparing, running or reading the query failed
    pub fn latest(&self) -> Result<Vec<Snippet>> {
        let start = Instant::now();
        log_op_start!(OP_SNIPPET_LATEST);

        let result = self.query_latest();

        let duration_ms = elapsed_ms(start);
        match &result {
            Ok(snippets) => {
                log_op_end!(
                    OP_SNIPPET_LATEST,
                    duration_ms = duration_ms,
                    { FIELD_SNIPPET_COUNT } = snippets.len() as u64
                );
            }
            Err(e) => log_op_error!(OP_SNIPPET_LATEST, e, duration_ms = duration_ms),
        }
        result
    }

    fn query_latest(&self) -> Result<Vec<Snippet>> {
        let now = self.clock.now().timestamp_millis();

        let mut stmt = self
            .conn
            .prepare(&format!(
                "{SELECT_COLUMNS} WHERE expires > ?1 ORDER BY id DESC LIMIT ?2"
            ))
            .map_err(|e| from_rusqlite(OP_SNIPPET_LATEST, e))?;

        let snippets = stmt
            .query_map(rusqlite::params![now, LATEST_LIMIT as i64], row_to_snippet)
            .map_err(|e| from_rusqlite(OP_SNIPPET_LATEST, e))?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| from_rusqlite(OP_SNIPPET_LATEST, e))?;

        Ok(snippets)
    }
}

/// `created + days` in epoch milliseconds
fn expiry_millis(created: i64, days: i64) -> Result<i64> {
    days.checked_mul(MILLIS_PER_DAY)
        .and_then(|ms| created.checked_add(ms))
        .ok_or_else(|| {
            SnippetError::storage(
                OP_SNIPPET_INSERT,
                format!("expiry of {} days is out of range", days),
            )
        })
}

fn row_to_snippet(row: &Row<'_>) -> rusqlite::Result<Snippet> {
    Ok(Snippet {
        id: row.get(0)?,
        title: row.get(1)?,
        content: row.get(2)?,
        created: millis_to_datetime(3, row.get(3)?)?,
        expires: millis_to_datetime(4, row.get(4)?)?,
    })
}

fn millis_to_datetime(column: usize, millis: i64) -> rusqlite::Result<DateTime<Utc>> {
    Utc.timestamp_millis_opt(millis).single().ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            column,
            Type::Integer,
            Box::new(FromSqlError::OutOfRange(millis)),
        )
    })
}

fn elapsed_ms(start: Instant) -> u64 {
    start.elapsed().as_millis() as u64
}
