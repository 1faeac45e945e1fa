//! Latest command
//!
//! Usage: snippetbox latest [--json]

use super::{human_date, CommandError};
use clap::Args;
use snippetbox_core::Clock;
use snippetbox_store::SnippetStore;
use std::fmt::Write;

#[derive(Debug, Args)]
pub struct LatestArgs {
    /// Print the snippets as a JSON array
    #[arg(long)]
    pub json: bool,
}

pub fn execute<C: Clock>(store: &SnippetStore<C>, args: LatestArgs) -> Result<String, CommandError> {
    let snippets = store.latest()?;

    if args.json {
        return Ok(format!("{}\n", serde_json::to_string_pretty(&snippets)?));
    }
    if snippets.is_empty() {
        return Ok("No snippets yet\n".to_string());
    }

    let mut out = String::new();
    for s in &snippets {
        // Writing to a String cannot fail
        let _ = writeln!(out, "#{}\t{}\t{}", s.id, s.title, human_date(s.created));
    }
    Ok(out)
}
