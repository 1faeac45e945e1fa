//! View command
//!
//! Usage: snippetbox view <ID> [--json]

use super::{human_date, CommandError};
use crate::forms::parse_snippet_id;
use clap::Args;
use snippetbox_core::{Clock, Snippet};
use snippetbox_store::SnippetStore;

#[derive(Debug, Args)]
pub struct ViewArgs {
    /// Snippet id
    #[arg(allow_hyphen_values = true)]
    pub id: String,

    /// Print the snippet as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn execute<C: Clock>(store: &SnippetStore<C>, args: ViewArgs) -> Result<String, CommandError> {
    // Malformed ids never reach the store
    let id = parse_snippet_id(&args.id).map_err(|_| CommandError::NotFound)?;
    let snippet = store.get(id)?;

    if args.json {
        return Ok(format!("{}\n", serde_json::to_string_pretty(&snippet)?));
    }
    Ok(render(&snippet))
}

fn render(snippet: &Snippet) -> String {
    format!(
        "#{} {}\n\n{}\n\nCreated: {}\nExpires: {}\n",
        snippet.id,
        snippet.title,
        snippet.content,
        human_date(snippet.created),
        human_date(snippet.expires),
    )
}
