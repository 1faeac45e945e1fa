use super::embedded::{Migration, MIGRATIONS};
use crate::errors::{checksum_mismatch, from_rusqlite, migration_error, Result};
use rusqlite::{Connection, OptionalExtension, TransactionBehavior};
use snippetbox_core::schema::OP_MIGRATE;
use snippetbox_core::{log_op_end, log_op_error, log_op_start};
use std::time::Instant;

const LEDGER_DDL: &str = "CREATE TABLE IF NOT EXISTS snippetbox_migrations (
    name TEXT PRIMARY KEY,
    checksum TEXT NOT NULL,
    applied_at INTEGER NOT NULL
)";

/// Bring the schema up to date
///
/// Migrations already in the ledger are skipped once their recorded
/// checksum matches the embedded SQL; an edited migration is an error.
/// Several handles may run this against a fresh file at the same time.
pub fn apply_migrations(conn: &mut Connection) -> Result<()> {
    let start = Instant::now();
    log_op_start!(OP_MIGRATE);

    let result = run_all(conn);

    let duration_ms = start.elapsed().as_millis() as u64;
    match &result {
        Ok(applied) => {
            log_op_end!(OP_MIGRATE, duration_ms = duration_ms, applied = *applied);
        }
        Err(e) => log_op_error!(OP_MIGRATE, e, duration_ms = duration_ms),
    }
    result.map(drop)
}

fn run_all(conn: &mut Connection) -> Result<u64> {
    conn.execute_batch(LEDGER_DDL)
        .map_err(|e| from_rusqlite(OP_MIGRATE, e))?;

    let mut applied = 0;
    for migration in MIGRATIONS {
        if apply_one(conn, migration)? {
            applied += 1;
        }
    }
    Ok(applied)
}

/// Apply `migration` unless the ledger already has it; returns whether it ran
///
/// The ledger is read under the write lock, so a handle that lost the race
/// sees the winner's row and skips.
fn apply_one(conn: &mut Connection, migration: &Migration) -> Result<bool> {
    let tx = conn
        .transaction_with_behavior(TransactionBehavior::Immediate)
        .map_err(|e| from_rusqlite(OP_MIGRATE, e))?;

    let recorded: Option<String> = tx
        .query_row(
            "SELECT checksum FROM snippetbox_migrations WHERE name = ?1",
            [migration.name],
            |row| row.get(0),
        )
        .optional()
        .map_err(|e| from_rusqlite(OP_MIGRATE, e))?;

    let checksum = migration.checksum();
    match recorded {
        Some(sum) if sum == checksum => return Ok(false),
        Some(sum) => return Err(checksum_mismatch(migration.name, &sum, &checksum)),
        None => {}
    }

    tx.execute_batch(migration.sql)
        .map_err(|e| migration_error(migration.name, &e.to_string()))?;
    tx.execute(
        "INSERT INTO snippetbox_migrations (name, checksum, applied_at) VALUES (?1, ?2, ?3)",
        rusqlite::params![migration.name, checksum, chrono::Utc::now().timestamp_millis()],
    )
    .map_err(|e| from_rusqlite(OP_MIGRATE, e))?;

    tx.commit().map_err(|e| from_rusqlite(OP_MIGRATE, e))?;
    tracing::debug!(migration = migration.name, "migration applied");
    Ok(true)
}
