//! Create command
//!
//! Usage: snippetbox create --title <TITLE> --content <CONTENT> [--expires <DAYS>]

use super::CommandError;
use crate::forms::{parse_expires, SnippetCreateForm, DEFAULT_EXPIRY_DAYS};
use clap::Args;
use snippetbox_core::Clock;
use snippetbox_store::SnippetStore;

#[derive(Debug, Args)]
pub struct CreateArgs {
    /// Snippet title (at most 100 characters)
    #[arg(long, allow_hyphen_values = true)]
    pub title: String,

    /// Snippet body
    #[arg(long, allow_hyphen_values = true)]
    pub content: String,

    /// Days until the snippet expires: 1, 7 or 365
    #[arg(long, allow_hyphen_values = true, default_value_t = DEFAULT_EXPIRY_DAYS.to_string())]
    pub expires: String,
}

/// Validate the submission and store it
pub fn execute<C: Clock>(store: &SnippetStore<C>, args: CreateArgs) -> Result<String, CommandError> {
    let expires = parse_expires(&args.expires).map_err(CommandError::BadRequest)?;

    let mut form = SnippetCreateForm::new(args.title, args.content, expires);
    if !form.validate() {
        return Err(CommandError::Invalid(form.errors));
    }

    let id = store.insert(&form.title, &form.content, form.expires)?;
    Ok(format!("Created snippet {}\n", id))
}
