//! Request boundary: turns raw user input into validated values
//!
//! Nothing here touches storage. Ids are rejected before a lookup is
//! attempted, and a create form only reaches the store once its
//! `ValidationErrorSet` is empty.

use snippetbox_core::validator::{max_length, not_blank, permitted_value};
use snippetbox_core::ValidationErrorSet;
use thiserror::Error;

/// Expiry periods, in days, a snippet may be created with
pub const PERMITTED_EXPIRY_DAYS: [i64; 3] = [1, 7, 365];

/// Expiry pre-selected on a blank form
pub const DEFAULT_EXPIRY_DAYS: i64 = 365;

pub const TITLE_MAX_CHARS: usize = 100;

pub const MSG_BLANK: &str = "This field cannot be blank";
pub const MSG_TITLE_TOO_LONG: &str = "This field cannot be more than 100 characters long";
pub const MSG_EXPIRES: &str = "This field must equal 1, 7 or 365";

/// Malformed input rejected before validation or storage
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    /// Not a positive integer; reported to the user as "not found"
    #[error("invalid snippet id: {raw:?}")]
    InvalidId { raw: String },

    /// Not an integer at all; reported as a bad request
    #[error("invalid expiry value: {raw:?}")]
    InvalidExpiry { raw: String },
}

/// Parse a snippet id from untrusted input
///
/// Only positive integers are accepted.
pub fn parse_snippet_id(raw: &str) -> Result<i64, FormError> {
    match raw.trim().parse::<i64>() {
        Ok(id) if id >= 1 => Ok(id),
        _ => Err(FormError::InvalidId {
            raw: raw.to_string(),
        }),
    }
}

/// Parse the expiry selection
///
/// Any integer is accepted here; membership in
/// [`PERMITTED_EXPIRY_DAYS`] is a validation concern.
pub fn parse_expires(raw: &str) -> Result<i64, FormError> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| FormError::InvalidExpiry {
            raw: raw.to_string(),
        })
}

/// Candidate snippet as submitted, plus its field errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnippetCreateForm {
    pub title: String,
    pub content: String,
    pub expires: i64,
    pub errors: ValidationErrorSet,
}

impl Default for SnippetCreateForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            content: String::new(),
            expires: DEFAULT_EXPIRY_DAYS,
            errors: ValidationErrorSet::new(),
        }
    }
}

impl SnippetCreateForm {
    pub fn new(title: impl Into<String>, content: impl Into<String>, expires: i64) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            expires,
            errors: ValidationErrorSet::new(),
        }
    }

    /// Run every field check against the current values; returns true when
    /// the form is valid
    ///
    /// Errors from an earlier call are discarded first.
    pub fn validate(&mut self) -> bool {
        self.errors = ValidationErrorSet::new();
        self.errors
            .check_field(not_blank(&self.title), "title", MSG_BLANK);
        self.errors.check_field(
            max_length(&self.title, TITLE_MAX_CHARS),
            "title",
            MSG_TITLE_TOO_LONG,
        );
        self.errors
            .check_field(not_blank(&self.content), "content", MSG_BLANK);
        self.errors.check_field(
            permitted_value(&self.expires, &PERMITTED_EXPIRY_DAYS),
            "expires",
            MSG_EXPIRES,
        );
        self.errors.valid()
    }
}
