//! Site configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `SITE_DATA_DIR` - Directory holding `menu.json` and `content.json` (default: `.`)
//! - `SITE_DATA_URL` - Base URL to fetch the documents from; overrides `SITE_DATA_DIR`
//! - `SITE_STORAGE_PATH` - File backing the key-value store (default: `site-storage.json`)
//! - `LOG_FORMAT` - `pretty` or `json` (default: `pretty`)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name

use std::path::PathBuf;

use thiserror::Error;
use url::Url;

use crate::catalog::{FileSource, HttpSource, LoadError};

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Where the static documents come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataLocation {
    Dir(PathBuf),
    Url(Url),
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Site configuration.
#[derive(Debug, Clone)]
pub struct SiteConfig {
    /// Source of `menu.json` and `content.json`
    pub data: DataLocation,
    /// File backing the key-value store
    pub storage_path: PathBuf,
    /// Log output format
    pub log_format: LogFormat,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment (e.g., "production")
    pub sentry_environment: Option<String>,
}

impl SiteConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let data = match non_empty(lookup("SITE_DATA_URL")) {
            Some(raw) => DataLocation::Url(Url::parse(&raw).map_err(|e| {
                ConfigError::InvalidEnvVar("SITE_DATA_URL".to_string(), e.to_string())
            })?),
            None => DataLocation::Dir(PathBuf::from(
                non_empty(lookup("SITE_DATA_DIR")).unwrap_or_else(|| ".".to_string()),
            )),
        };

        let storage_path = PathBuf::from(
            non_empty(lookup("SITE_STORAGE_PATH"))
                .unwrap_or_else(|| "site-storage.json".to_string()),
        );

        let log_format = match non_empty(lookup("LOG_FORMAT")).as_deref() {
            None | Some("pretty") => LogFormat::Pretty,
            Some("json") => LogFormat::Json,
            Some(other) => {
                return Err(ConfigError::InvalidEnvVar(
                    "LOG_FORMAT".to_string(),
                    format!("expected 'pretty' or 'json', got '{other}'"),
                ));
            }
        };

        Ok(Self {
            data,
            storage_path,
            log_format,
            sentry_dsn: non_empty(lookup("SENTRY_DSN")),
            sentry_environment: non_empty(lookup("SENTRY_ENVIRONMENT")),
        })
    }
}

impl DataLocation {
    /// File-backed source, if the data lives on disk.
    #[must_use]
    pub fn file_source(&self) -> Option<FileSource> {
        match self {
            Self::Dir(dir) => Some(FileSource::new(dir.clone())),
            Self::Url(_) => None,
        }
    }

    /// HTTP-backed source, if the data lives behind a URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL cannot serve as a base.
    pub fn http_source(&self) -> Result<Option<HttpSource>, LoadError> {
        match self {
            Self::Url(url) => HttpSource::new(url.as_str()).map(Some),
            Self::Dir(_) => Ok(None),
        }
    }
}

/// Treat empty values as unset.
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
