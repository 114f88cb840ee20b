//! Catalog store.
//!
//! Holds the parsed menu and site content for one page view. Both documents
//! are loaded once from a [`DataSource`]; until the load resolves the store
//! is empty, and a failed load degrades to an empty catalog without retry.

mod source;

use std::sync::LazyLock;

use regex::Regex;
use tiffin_core::{Catalog, ContentDoc};
use tracing::instrument;

pub use source::{DataSource, FileSource, HttpSource, LoadError};

/// Regex for a lowercase-to-uppercase boundary in camelCase keys.
static CAMEL_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([a-z0-9])([A-Z])").expect("Invalid regex"));

/// Turn a camelCase category key into a display name
/// (`"mainCourse"` → `"Main Course"`). Runs of capitals stay one word
/// (`"BBQ"` stays `"BBQ"`).
#[must_use]
pub fn format_category_name(key: &str) -> String {
    let spaced = CAMEL_BOUNDARY.replace_all(key, "$1 $2");
    spaced
        .split(' ')
        .map(|word| {
            let mut chars = word.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().chain(chars).collect()
            })
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Load state of a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadStatus {
    #[default]
    Loading,
    Ready,
    Failed,
}

/// In-memory menu and content for the current page view.
#[derive(Debug, Clone, Default)]
pub struct CatalogStore {
    catalog: Catalog,
    content: Option<ContentDoc>,
    catalog_status: LoadStatus,
    content_status: LoadStatus,
}

impl CatalogStore {
    /// Create an empty store in the `Loading` state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that is already populated.
    #[must_use]
    pub fn with_catalog(catalog: Catalog) -> Self {
        Self {
            catalog,
            catalog_status: LoadStatus::Ready,
            ..Self::default()
        }
    }

    /// Fetch both documents. Failures are logged and leave that document
    /// empty; the returned errors are for reporting only.
    #[instrument(skip(self, source))]
    pub async fn load(&mut self, source: &impl DataSource) -> Vec<LoadError> {
        let mut errors = Vec::new();

        match source.fetch_catalog().await {
            Ok(catalog) => {
                tracing::info!(items = catalog.len(), "Menu loaded");
                self.catalog = catalog;
                self.catalog_status = LoadStatus::Ready;
            }
            Err(e) => {
                tracing::error!("Failed to load menu: {e}");
                self.catalog = Catalog::new();
                self.catalog_status = LoadStatus::Failed;
                errors.push(e);
            }
        }

        match source.fetch_content().await {
            Ok(content) => {
                self.content = Some(content);
                self.content_status = LoadStatus::Ready;
            }
            Err(e) => {
                tracing::error!("Failed to load content: {e}");
                self.content = None;
                self.content_status = LoadStatus::Failed;
                errors.push(e);
            }
        }

        errors
    }

    /// The menu, empty while loading or after a failure.
    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Site content, if it loaded.
    #[must_use]
    pub const fn content(&self) -> Option<&ContentDoc> {
        self.content.as_ref()
    }

    #[must_use]
    pub const fn catalog_status(&self) -> LoadStatus {
        self.catalog_status
    }

    #[must_use]
    pub const fn content_status(&self) -> LoadStatus {
        self.content_status
    }

    /// Category keys with their display names, for the editor's select box.
    #[must_use]
    pub fn category_options(&self) -> Vec<(String, String)> {
        self.catalog
            .categories()
            .iter()
            .map(|c| (c.key.clone(), format_category_name(&c.key)))
            .collect()
    }
}
