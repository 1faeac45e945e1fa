//! Field validation primitives
//!
//! The check functions are pure and total: every input, including empty
//! strings, zero bounds and empty allowed-sets, yields a boolean. Failures are
//! collected as data in a [`ValidationErrorSet`] that a form owns next to its
//! typed fields.

use serde::Serialize;
use std::collections::HashMap;

/// Per-submission collection of field errors
///
/// Each field keeps only the first message recorded for it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationErrorSet {
    field_errors: HashMap<String, String>,
}

impl ValidationErrorSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// True iff no field has a recorded error
    pub fn valid(&self) -> bool {
        self.field_errors.is_empty()
    }

    /// Record `message` under `field` unless the field already failed
    pub fn add_field_error(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.field_errors
            .entry(field.into())
            .or_insert_with(|| message.into());
    }

    /// Record `message` under `field` when `ok` is false
    pub fn check_field(&mut self, ok: bool, field: &str, message: &str) {
        if !ok {
            self.add_field_error(field, message);
        }
    }

    /// Message recorded for `field`, if any
    pub fn get(&self, field: &str) -> Option<&str> {
        self.field_errors.get(field).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.field_errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.field_errors.is_empty()
    }

    /// Field errors sorted by field name, for stable display
    pub fn sorted(&self) -> Vec<(&str, &str)> {
        let mut errors: Vec<(&str, &str)> = self
            .field_errors
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        errors.sort_unstable_by_key(|(field, _)| *field);
        errors
    }
}

/// True iff `value` is non-empty after trimming surrounding whitespace
pub fn not_blank(value: &str) -> bool {
    !value.trim().is_empty()
}

/// True iff `value` has at most `n` Unicode code points
pub fn max_length(value: &str, n: usize) -> bool {
    value.chars().count() <= n
}

/// True iff `value` is one of `allowed`
pub fn permitted_value<T: PartialEq>(value: &T, allowed: &[T]) -> bool {
    allowed.contains(value)
}
