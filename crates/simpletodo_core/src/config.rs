//! Runtime configuration for SimpleTodo frontends.
//!
//! # Responsibility
//! - Resolve database path, log directory and log level.
//! - Layer defaults, then environment variables, then explicit overrides.
//!
//! # Invariants
//! - A resolved config always carries a canonical log level.
//! - Paths are never empty; relative paths are resolved against the
//!   working directory at load time.

use crate::logging::{default_log_level, normalize_level, LoggingError};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

pub const DB_PATH_ENV: &str = "SIMPLETODO_DB_PATH";
pub const LOG_DIR_ENV: &str = "SIMPLETODO_LOG_DIR";
pub const LOG_LEVEL_ENV: &str = "SIMPLETODO_LOG_LEVEL";

const APP_DIR_NAME: &str = "simpletodo";
const DB_FILE_NAME: &str = "simpletodo.sqlite3";
const LOG_DIR_NAME: &str = "logs";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    EmptyPath(&'static str),
    UnresolvablePath { field: &'static str, message: String },
    InvalidLogLevel(LoggingError),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyPath(field) => write!(f, "config `{field}` cannot be empty"),
            Self::UnresolvablePath { field, message } => {
                write!(f, "config `{field}` cannot be made absolute: {message}")
            }
            Self::InvalidLogLevel(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidLogLevel(err) => Some(err),
            Self::EmptyPath(_) | Self::UnresolvablePath { .. } => None,
        }
    }
}

impl From<LoggingError> for ConfigError {
    fn from(value: LoggingError) -> Self {
        Self::InvalidLogLevel(value)
    }
}

/// Resolved settings for one process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub db_path: PathBuf,
    pub log_dir: PathBuf,
    pub log_level: &'static str,
}

impl Default for AppConfig {
    fn default() -> Self {
        let app_dir = std::env::temp_dir().join(APP_DIR_NAME);
        Self {
            db_path: app_dir.join(DB_FILE_NAME),
            log_dir: app_dir.join(LOG_DIR_NAME),
            log_level: default_log_level(),
        }
    }
}

impl AppConfig {
    /// Defaults overridden by `SIMPLETODO_*` environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for each variable.
    ///
    /// Blank values are treated as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let read = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let mut config = Self::default();
        if let Some(path) = read(DB_PATH_ENV) {
            config.db_path = resolve_path("db_path", PathBuf::from(path))?;
        }
        if let Some(dir) = read(LOG_DIR_ENV) {
            config.log_dir = resolve_path("log_dir", PathBuf::from(dir))?;
        }
        if let Some(level) = read(LOG_LEVEL_ENV) {
            config.log_level = normalize_level(&level)?;
        }
        Ok(config)
    }

    /// Applies explicit overrides, typically command-line flags.
    pub fn with_overrides(
        mut self,
        db_path: Option<PathBuf>,
        log_dir: Option<PathBuf>,
        log_level: Option<&str>,
    ) -> Result<Self, ConfigError> {
        if let Some(path) = db_path {
            self.db_path = resolve_path("db_path", path)?;
        }
        if let Some(dir) = log_dir {
            self.log_dir = resolve_path("log_dir", dir)?;
        }
        if let Some(level) = log_level {
            self.log_level = normalize_level(level)?;
        }
        Ok(self)
    }
}

fn resolve_path(field: &'static str, path: PathBuf) -> Result<PathBuf, ConfigError> {
    if path.as_os_str().is_empty() {
        return Err(ConfigError::EmptyPath(field));
    }
    if path.is_absolute() {
        return Ok(path);
    }
    std::path::absolute(&path).map_err(|err| ConfigError::UnresolvablePath {
        field,
        message: err.to_string(),
    })
}
