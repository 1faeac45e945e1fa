//! Layered configuration
//!
//! Lowest to highest precedence: built-in defaults, an optional config file,
//! `SNIPPETBOX_*` environment variables (a `.env` file is loaded first when
//! present), then command-line overrides.

use config::{Config, Environment, File};
use serde::Deserialize;
use snippetbox_core::logging_facility::Profile;
use snippetbox_store::StoreOptions;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

pub const ENV_PREFIX: &str = "SNIPPETBOX";
pub const DEFAULT_DB_PATH: &str = ".snippetbox/snippets.db";
pub const DEFAULT_BUSY_TIMEOUT_MS: u64 = 5_000;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),
}

/// Logging output selected in configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogProfile {
    Development,
    Production,
}

impl From<LogProfile> for Profile {
    fn from(p: LogProfile) -> Self {
        match p {
            LogProfile::Development => Profile::Development,
            LogProfile::Production => Profile::Production,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Settings {
    pub db_path: PathBuf,
    pub busy_timeout_ms: u64,
    pub log_profile: LogProfile,
}

impl Settings {
    pub fn store_options(&self) -> StoreOptions {
        StoreOptions {
            busy_timeout: Duration::from_millis(self.busy_timeout_ms),
        }
    }
}

/// Values supplied on the command line
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub config_file: Option<PathBuf>,
    pub db_path: Option<PathBuf>,
}

/// Load settings from every layer
pub fn load(overrides: &Overrides) -> Result<Settings, ConfigError> {
    // A missing .env is not an error
    dotenvy::dotenv().ok();
    build(overrides.config_file.as_deref(), overrides.db_path.as_deref())
}

fn build(config_file: Option<&Path>, db_path: Option<&Path>) -> Result<Settings, ConfigError> {
    let mut builder = Config::builder()
        .set_default("db_path", DEFAULT_DB_PATH)?
        .set_default("busy_timeout_ms", DEFAULT_BUSY_TIMEOUT_MS)?
        .set_default("log_profile", "development")?;

    if let Some(path) = config_file {
        builder = builder.add_source(File::from(path).required(true));
    }

    let settings = builder
        .add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true))
        .set_override_option(
            "db_path",
            db_path.map(|p| p.to_string_lossy().into_owned()),
        )?
        .build()?
        .try_deserialize()?;

    Ok(settings)
}
