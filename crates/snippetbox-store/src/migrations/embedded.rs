//! Migrations compiled into the binary

use super::checksums::sha256_hex;

pub struct Migration {
    pub name: &'static str,
    pub sql: &'static str,
}

impl Migration {
    pub fn checksum(&self) -> String {
        sha256_hex(self.sql)
    }
}

/// Application order; append only
pub const MIGRATIONS: &[Migration] = &[Migration {
    name: "001_create_snippets",
    sql: include_str!("../../migrations/001_create_snippets.sql"),
}];
