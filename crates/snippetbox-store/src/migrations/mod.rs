//! Schema migrations
//!
//! SQL files are embedded at compile time and applied in order, each in
//! its own transaction. The `snippetbox_migrations` ledger records the
//! SHA-256 of every applied file.

mod checksums;
mod embedded;
mod runner;

pub use runner::apply_migrations;
