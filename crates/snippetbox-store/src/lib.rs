//! Snippetbox Store - SQLite persistence for snippets
//!
//! Provides:
//! - Connection management with bounded lock waits
//! - Embedded, checksummed schema migrations
//! - `SnippetStore`: insert, fetch-live-by-id, and latest-live queries

pub mod db;
pub mod errors;
pub mod migrations;
pub mod repo;

pub use db::StoreOptions;
pub use errors::Result;
pub use repo::{SnippetStore, LATEST_LIMIT};
