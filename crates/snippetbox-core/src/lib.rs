//! Snippetbox Core - snippet lifecycle and validation
//!
//! This crate provides:
//! - The `Snippet` model and its liveness rule
//! - A `Clock` abstraction so expiry can be evaluated against an injectable "now"
//! - Field-validation primitives and a per-request `ValidationErrorSet`
//! - The closed `SnippetError` type shared by the store and its callers
//! - The structured logging facility

pub mod clock;
pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod validator;

// Logging macros refer to the schema constants through this path
pub use snippetbox_core_types::schema;

// Re-export commonly used types
pub use clock::{Clock, ManualClock, SystemClock};
pub use errors::{Result, SnippetError, SnippetErrorKind};
pub use model::Snippet;
pub use validator::ValidationErrorSet;
