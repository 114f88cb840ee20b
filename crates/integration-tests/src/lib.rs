//! Integration test support for the Tiffin site.
//!
//! Provides a [`RecordingRenderer`] that captures every call the engines make,
//! a [`FailingStore`] for persistence-failure paths, and a sample menu.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p tiffin-integration-tests
//! ```

use std::collections::HashMap;

use tiffin_core::{Catalog, Section, Sender};
use tiffin_storefront::catalog::CatalogStore;
use tiffin_storefront::render::{CartView, Renderer};
use tiffin_storefront::storage::{KeyValueStore, MemoryStore, StorageError};
use tiffin_storefront::SiteState;

/// Sample `menu.json`.
pub const MENU_JSON: &str = r#"{
    "appetizers": [
        {"name": "Chicken Shingara", "desc": "Flaky pastry with spiced chicken", "price": 6.99, "image": "images/shingara.jpg", "videoId": "shingara01"},
        {"name": "Chotpoti", "desc": "Tangy chickpea street snack", "price": 9.99, "image": "images/chotpoti.jpg"}
    ],
    "mainCourse": [
        {"name": "Beef Haleem", "desc": "Slow-cooked lentil and beef stew", "price": 9.99, "image": "images/haleem.jpg", "videoId": "haleem01"}
    ]
}"#;

/// Sample `content.json`.
pub const CONTENT_JSON: &str = r#"{
    "hero": {"title": "Taste of Dhaka", "subtitle": "Street food, home style", "cta": "See the Menu"},
    "about": {"text": "Family recipes since 1998.", "videoId": "about01"},
    "footer": {
        "social": [{"platform": "Instagram", "url": "https://instagram.com/tiffin", "icon": "icons/ig.svg"}],
        "policies": [{"name": "Privacy", "url": "/privacy"}, {"name": "Terms", "url": "/terms"}]
    }
}"#;

/// Parse the sample menu.
///
/// # Panics
///
/// Panics if the fixture is invalid.
#[must_use]
#[allow(clippy::unwrap_used)]
pub fn sample_catalog() -> Catalog {
    serde_json::from_str(MENU_JSON).unwrap()
}

/// A session over the sample menu with an in-memory store.
#[must_use]
pub fn sample_site() -> SiteState<MemoryStore, RecordingRenderer> {
    site_with_store(MemoryStore::new())
}

/// A session over the sample menu with the given store.
#[must_use]
pub fn site_with_store<S: KeyValueStore>(store: S) -> SiteState<S, RecordingRenderer> {
    SiteState::new(
        CatalogStore::with_catalog(sample_catalog()),
        store,
        RecordingRenderer::default(),
    )
}

/// Renderer that records what the engines asked for.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    pub carts: Vec<CartView>,
    pub loyalty: Vec<u64>,
    pub messages: Vec<(Sender, String)>,
    pub summaries: Vec<Vec<String>>,
    pub visibility: HashMap<String, bool>,
    pub scrolls: Vec<Section>,
    pub alerts: Vec<String>,
}

impl RecordingRenderer {
    /// Most recent cart view.
    #[must_use]
    pub fn last_cart(&self) -> Option<&CartView> {
        self.carts.last()
    }

    /// Most recent bot message.
    #[must_use]
    pub fn last_bot_message(&self) -> Option<&str> {
        self.messages
            .iter()
            .rev()
            .find(|(sender, _)| *sender == Sender::Bot)
            .map(|(_, text)| text.as_str())
    }

    /// Whether an element was last set visible.
    #[must_use]
    pub fn is_visible(&self, element_id: &str) -> Option<bool> {
        self.visibility.get(element_id).copied()
    }
}

impl Renderer for RecordingRenderer {
    fn render_cart(&mut self, view: &CartView) {
        self.carts.push(view.clone());
    }

    fn render_loyalty(&mut self, points: u64) {
        self.loyalty.push(points);
    }

    fn render_message(&mut self, sender: Sender, text: &str) {
        self.messages.push((sender, text.to_owned()));
    }

    fn render_order_summary(&mut self, summary: &[String]) {
        self.summaries.push(summary.to_vec());
    }

    fn set_visibility(&mut self, element_id: &str, visible: bool) {
        self.visibility.insert(element_id.to_owned(), visible);
    }

    fn scroll_to_section(&mut self, section: Section) {
        self.scrolls.push(section);
    }

    fn alert(&mut self, text: &str) {
        self.alerts.push(text.to_owned());
    }
}

/// Store whose reads succeed but whose writes always fail.
#[derive(Debug, Default)]
pub struct FailingStore {
    inner: MemoryStore,
}

impl FailingStore {
    /// Seed a value that reads will return.
    ///
    /// # Panics
    ///
    /// Never; the in-memory store cannot fail.
    #[must_use]
    #[allow(clippy::unwrap_used)]
    pub fn with(key: &str, value: &str) -> Self {
        let mut inner = MemoryStore::new();
        inner.set(key, value).unwrap();
        Self { inner }
    }
}

impl KeyValueStore for FailingStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.inner.get(key)
    }

    fn set(&mut self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Io("storage quota exceeded".to_string()))
    }
}
