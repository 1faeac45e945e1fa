use thiserror::Error;

/// Result type alias using SnippetError
pub type Result<T> = std::result::Result<T, SnippetError>;

/// Boxed underlying failure carried by [`SnippetError::Storage`]
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Stable classification of [`SnippetError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnippetErrorKind {
    NoRecord,
    Storage,
}

impl SnippetErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            SnippetErrorKind::NoRecord => "ERR_NO_RECORD",
            SnippetErrorKind::Storage => "ERR_STORAGE",
        }
    }
}

/// Domain errors surfaced by snippet persistence
///
/// `NoRecord` is an expected outcome (the caller shows "not found");
/// `Storage` is an incident and its cause must stay internal.
#[derive(Error, Debug)]
pub enum SnippetError {
    /// No live snippet matches the requested id
    #[error("no matching record found")]
    NoRecord,

    /// The underlying persistence layer failed
    #[error("storage failure in operation '{op}': {source}")]
    Storage {
        op: String,
        #[source]
        source: BoxError,
    },
}

impl SnippetError {
    /// Wrap an underlying persistence failure
    pub fn storage(op: impl Into<String>, cause: impl Into<BoxError>) -> Self {
        SnippetError::Storage {
            op: op.into(),
            source: cause.into(),
        }
    }

    pub fn kind(&self) -> SnippetErrorKind {
        match self {
            SnippetError::NoRecord => SnippetErrorKind::NoRecord,
            SnippetError::Storage { .. } => SnippetErrorKind::Storage,
        }
    }

    pub fn code(&self) -> &'static str {
        self.kind().code()
    }

    /// Operation that failed, for storage errors
    pub fn op(&self) -> Option<&str> {
        match self {
            SnippetError::NoRecord => None,
            SnippetError::Storage { op, .. } => Some(op),
        }
    }

    pub fn is_no_record(&self) -> bool {
        matches!(self, SnippetError::NoRecord)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_storage_keeps_cause() {
        let err = SnippetError::storage("snippet_get", "disk I/O error");
        assert_eq!(err.kind(), SnippetErrorKind::Storage);
        assert_eq!(err.op(), Some("snippet_get"));
        assert_eq!(err.source().map(|s| s.to_string()).as_deref(), Some("disk I/O error"));
    }

    #[test]
    fn test_no_record_has_no_source() {
        let err = SnippetError::NoRecord;
        assert!(err.is_no_record());
        assert!(err.source().is_none());
        assert_eq!(err.op(), None);
    }
}
