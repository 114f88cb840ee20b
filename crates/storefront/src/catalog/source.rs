//! Data sources for `menu.json` and `content.json`.

use std::future::Future;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use thiserror::Error;
use tiffin_core::{Catalog, ContentDoc};
use url::Url;

/// File name of the menu document.
pub const MENU_FILE: &str = "menu.json";

/// File name of the content document.
pub const CONTENT_FILE: &str = "content.json";

/// Errors that can occur while fetching a document.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Reading a local file failed.
    #[error("I/O error reading {path}: {message}")]
    Io { path: String, message: String },

    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with a non-success status.
    #[error("HTTP {status} fetching {url}")]
    Status { status: u16, url: String },

    /// Document URL could not be built.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Asynchronous source of the site's static documents.
pub trait DataSource {
    /// Fetch and parse the menu.
    fn fetch_catalog(&self) -> impl Future<Output = Result<Catalog, LoadError>> + Send;

    /// Fetch and parse the site content.
    fn fetch_content(&self) -> impl Future<Output = Result<ContentDoc, LoadError>> + Send;
}

/// Documents read from a local directory.
#[derive(Debug, Clone)]
pub struct FileSource {
    root: PathBuf,
}

impl FileSource {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    async fn read_json<T: DeserializeOwned>(&self, name: &str) -> Result<T, LoadError> {
        let path = self.root.join(name);
        let content = tokio::fs::read_to_string(&path)
            .await
            .map_err(|e| io_error(&path, &e))?;
        Ok(serde_json::from_str(&content)?)
    }
}

fn io_error(path: &Path, err: &std::io::Error) -> LoadError {
    LoadError::Io {
        path: path.display().to_string(),
        message: err.to_string(),
    }
}

impl DataSource for FileSource {
    async fn fetch_catalog(&self) -> Result<Catalog, LoadError> {
        self.read_json(MENU_FILE).await
    }

    async fn fetch_content(&self) -> Result<ContentDoc, LoadError> {
        self.read_json(CONTENT_FILE).await
    }
}

/// Documents fetched over HTTP relative to a base URL.
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: reqwest::Client,
    base: Url,
}

impl HttpSource {
    /// Create a source rooted at `base`. A trailing slash is added so that
    /// document names resolve inside the base path.
    ///
    /// # Errors
    ///
    /// Returns an error if `base` is not a valid URL.
    pub fn new(base: &str) -> Result<Self, LoadError> {
        let mut base = Url::parse(base)?;
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        Ok(Self {
            client: reqwest::Client::new(),
            base,
        })
    }

    /// Absolute URL of a document.
    ///
    /// # Errors
    ///
    /// Returns an error if `name` cannot be joined onto the base URL.
    pub fn document_url(&self, name: &str) -> Result<Url, LoadError> {
        Ok(self.base.join(name)?)
    }

    async fn get_json<T: DeserializeOwned>(&self, name: &str) -> Result<T, LoadError> {
        let url = self.document_url(name)?;
        let response = self.client.get(url.clone()).send().await?;

        let status = response.status();
        if !status.is_success() {
            tracing::error!(status = %status, url = %url, "Data source returned non-success status");
            return Err(LoadError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| {
            tracing::error!(
                error = %e,
                body = %body.chars().take(500).collect::<String>(),
                "Failed to parse document"
            );
            LoadError::Parse(e)
        })
    }
}

impl DataSource for HttpSource {
    async fn fetch_catalog(&self) -> Result<Catalog, LoadError> {
        self.get_json(MENU_FILE).await
    }

    async fn fetch_content(&self) -> Result<ContentDoc, LoadError> {
        self.get_json(CONTENT_FILE).await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn temp_dir() -> PathBuf {
        let dir = std::env::temp_dir().join(format!("tiffin-data-{}", uuid::Uuid::new_v4()));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[tokio::test]
    async fn test_file_source_reads_menu() {
        let dir = temp_dir();
        std::fs::write(
            dir.join(MENU_FILE),
            r#"{"appetizers": [{"name": "Chicken Shingara", "desc": "Flaky", "price": 6.99, "image": "s.jpg"}]}"#,
        )
        .unwrap();

        let source = FileSource::new(&dir);
        let catalog = source.fetch_catalog().await.unwrap();
        assert_eq!(catalog.len(), 1);

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[tokio::test]
    async fn test_file_source_missing_file() {
        let dir = temp_dir();
        let source = FileSource::new(&dir);
        assert!(matches!(
            source.fetch_content().await,
            Err(LoadError::Io { .. })
        ));
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[tokio::test]
    async fn test_file_source_bad_json() {
        let dir = temp_dir();
        std::fs::write(dir.join(CONTENT_FILE), "{ nope").unwrap();
        let source = FileSource::new(&dir);
        assert!(matches!(
            source.fetch_content().await,
            Err(LoadError::Parse(_))
        ));
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_http_document_url_keeps_base_path() {
        let source = HttpSource::new("https://example.com/site").unwrap();
        assert_eq!(
            source.document_url(MENU_FILE).unwrap().as_str(),
            "https://example.com/site/menu.json"
        );

        let source = HttpSource::new("https://example.com/").unwrap();
        assert_eq!(
            source.document_url(CONTENT_FILE).unwrap().as_str(),
            "https://example.com/content.json"
        );
    }

    #[test]
    fn test_http_source_rejects_bad_base() {
        assert!(matches!(
            HttpSource::new("not a url"),
            Err(LoadError::Url(_))
        ));
    }
}
