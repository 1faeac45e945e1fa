//! Command implementations
//!
//! Each command returns the text to print on success. Failures are mapped
//! to a small set of user-facing outcomes; storage details never leave the
//! log.

pub mod create;
pub mod latest;
pub mod view;

use crate::forms::FormError;
use chrono::{DateTime, Utc};
use snippetbox_core::{SnippetError, ValidationErrorSet};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CommandError {
    /// Input could not be parsed at all
    #[error("Bad Request")]
    BadRequest(#[source] FormError),

    /// Submitted form failed validation
    #[error("Unprocessable Entity")]
    Invalid(ValidationErrorSet),

    /// No live snippet for the requested id, or the id was malformed
    #[error("Not Found")]
    NotFound,

    /// Storage or output failure; the cause is for the log only
    #[error("Internal Server Error")]
    Internal(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl CommandError {
    /// Process exit status for this outcome
    pub fn exit_code(&self) -> i32 {
        match self {
            CommandError::Internal(_) => 1,
            CommandError::BadRequest(_) => 2,
            CommandError::Invalid(_) => 3,
            CommandError::NotFound => 4,
        }
    }
}

impl From<SnippetError> for CommandError {
    fn from(err: SnippetError) -> Self {
        match err {
            SnippetError::NoRecord => CommandError::NotFound,
            storage @ SnippetError::Storage { .. } => CommandError::Internal(Box::new(storage)),
        }
    }
}

impl From<serde_json::Error> for CommandError {
    fn from(err: serde_json::Error) -> Self {
        CommandError::Internal(Box::new(err))
    }
}

/// Format a timestamp the way snippets are displayed, e.g. `02 Jan 2024 at 15:04`
pub fn human_date(t: DateTime<Utc>) -> String {
    t.format("%d %b %Y at %H:%M").to_string()
}
