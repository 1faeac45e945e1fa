//! Repository layer for snippets

pub mod snippet_repo;

pub use snippet_repo::{SnippetStore, LATEST_LIMIT};
