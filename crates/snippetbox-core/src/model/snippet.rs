use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Snippet - one published piece of text
///
/// Rows are created by the store and never mutated afterwards. A snippet is
/// *live* while `expires` lies in the future; once the clock passes `expires`
/// it is unreachable through every read path, although the row stays on disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snippet {
    /// Store-assigned identifier (positive, never reused)
    pub id: i64,

    pub title: String,

    pub content: String,

    /// Timestamp set by the store at insertion
    pub created: DateTime<Utc>,

    /// `created` plus the chosen expiry period
    pub expires: DateTime<Utc>,
}

impl Snippet {
    /// Check whether this snippet is live at the given instant
    ///
    /// The boundary is exclusive: a snippet is already expired at exactly
    /// `expires`.
    pub fn is_live_at(&self, now: DateTime<Utc>) -> bool {
        self.expires > now
    }

    /// Length of the expiry period
    pub fn lifetime(&self) -> chrono::Duration {
        self.expires - self.created
    }
}
