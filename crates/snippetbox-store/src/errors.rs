//! Error helpers for snippetbox-store
//!
//! Every persistence failure becomes `SnippetError::Storage`, tagged with
//! the operation that hit it.

use snippetbox_core::errors::SnippetError;

/// Result type alias using SnippetError
pub type Result<T> = std::result::Result<T, SnippetError>;

/// Wrap a rusqlite::Error
pub fn from_rusqlite(op: &str, err: rusqlite::Error) -> SnippetError {
    SnippetError::storage(op, err)
}

/// Create a migration error
pub fn migration_error(migration_id: &str, reason: &str) -> SnippetError {
    SnippetError::storage(
        "migration",
        format!("Migration {} failed: {}", migration_id, reason),
    )
}

/// Create a checksum mismatch error
pub fn checksum_mismatch(migration_id: &str, expected: &str, actual: &str) -> SnippetError {
    SnippetError::storage(
        "migration_checksum",
        format!(
            "Checksum mismatch for migration {}: expected {}, got {}",
            migration_id, expected, actual
        ),
    )
}
