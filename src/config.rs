//! Configuration loader and validator for the feed store.
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::db::repo::expand_home;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("YAML parse error: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("Invalid configuration: {0}")]
    Invalid(&'static str),
}

/// Root configuration struct mirroring the YAML schema exactly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    pub app: App,
    pub database: Database,
}

/// App-level settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct App {
    pub data_dir: String,
}

impl App {
    /// `data_dir` with a leading `~/` expanded.
    pub fn resolved_data_dir(&self) -> String {
        expand_home(&self.data_dir)
    }
}

/// SQLite file settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Database {
    /// File name inside `app.data_dir`.
    pub filename: String,
    /// Optional schema script used instead of the bundled one when the
    /// database file is first created.
    #[serde(default)]
    pub schema_path: Option<String>,
}

impl Config {
    /// Ensure required directories exist (creates `app.data_dir` if missing).
    pub fn ensure_dirs(&self) -> Result<(), std::io::Error> {
        if self.app.data_dir.trim().is_empty() {
            return Ok(());
        }
        fs::create_dir_all(self.app.resolved_data_dir())
    }

    pub fn database_url(&self) -> String {
        format!(
            "sqlite://{}/{}",
            self.app.resolved_data_dir().trim_end_matches('/'),
            self.database.filename
        )
    }

    /// Configured schema script, with a leading `~/` expanded.
    pub fn schema_path(&self) -> Option<PathBuf> {
        self.database
            .schema_path
            .as_deref()
            .map(|p| PathBuf::from(expand_home(p)))
    }
}

/// Load configuration from a YAML file and validate it.
/// - If `path` is None, uses `config.yaml` in the current working directory.
pub fn load(path: Option<&Path>) -> Result<Config, ConfigError> {
    let path = path.unwrap_or_else(|| Path::new("config.yaml"));
    let content = fs::read_to_string(path)?;
    let cfg: Config = serde_yaml::from_str(&content)?;
    validate(&cfg)?;
    Ok(cfg)
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if cfg.app.data_dir.trim().is_empty() {
        return Err(ConfigError::Invalid("app.data_dir must be non-empty"));
    }
    let filename = cfg.database.filename.trim();
    if filename.is_empty() {
        return Err(ConfigError::Invalid("database.filename must be non-empty"));
    }
    if filename.contains('/') || filename.contains('\\') {
        return Err(ConfigError::Invalid(
            "database.filename must be a bare file name",
        ));
    }
    if let Some(p) = &cfg.database.schema_path {
        if p.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "database.schema_path must be non-empty when set",
            ));
        }
    }
    Ok(())
}

/// Example configuration, also used by tests.
pub fn example() -> &'static str {
    r#"app:
  data_dir: "./data"

database:
  filename: "feedbot.db"
"#
}
