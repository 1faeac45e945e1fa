//! Subscriber installation

use std::sync::Once;
use tracing_subscriber::EnvFilter;

const CRATES: [&str; 3] = ["snippetbox_core", "snippetbox_store", "snippetbox_cli"];

/// Output style selected at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    /// Human-readable, debug and up
    Development,
    /// One JSON object per line, info and up
    Production,
    /// Installs nothing; see [`init_test_capture`](super::init_test_capture)
    Test,
}

impl Profile {
    /// Filter used when `RUST_LOG` is unset
    pub fn default_directives(self) -> String {
        let level = match self {
            Profile::Production => "info",
            Profile::Development | Profile::Test => "debug",
        };
        CRATES
            .iter()
            .map(|krate| format!("{krate}={level}"))
            .collect::<Vec<_>>()
            .join(",")
    }
}

static INSTALLED: Once = Once::new();

/// Install the global subscriber for `profile`
///
/// Only the first call in a process does anything. Output goes to stderr;
/// stdout is reserved for command output.
pub fn init(profile: Profile) {
    INSTALLED.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(profile.default_directives()));
        let fmt = tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_env_filter(filter);

        // A subscriber installed elsewhere keeps precedence
        let _ = match profile {
            Profile::Development => fmt.try_init(),
            Profile::Production => fmt.json().with_current_span(true).try_init(),
            Profile::Test => Ok(()),
        };
    });
}
