//! Menu catalog types.
//!
//! `menu.json` is a JSON object mapping a category key (e.g. `"appetizers"`,
//! `"mainCourse"`) to an array of items. Category order in the document is
//! the display order, so [`Catalog`] keeps categories in a `Vec` instead of a
//! sorted map.

use core::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::price::Price;

/// A single dish or drink on the menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    /// Display name, also the identity key for cart and search.
    pub name: String,
    pub desc: String,
    pub price: Price,
    /// Image URL or `data:` URI.
    pub image: String,
    /// External video identifier for the preparation clip.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_id: Option<String>,
}

impl MenuItem {
    /// Video identifier, treating an empty string as absent.
    #[must_use]
    pub fn video(&self) -> Option<&str> {
        self.video_id.as_deref().filter(|id| !id.is_empty())
    }
}

/// One category of the menu with its items in display order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Category {
    pub key: String,
    pub items: Vec<MenuItem>,
}

/// The full menu, grouped by category.
///
/// ## Examples
///
/// ```
/// use tiffin_core::Catalog;
///
/// let catalog: Catalog = serde_json::from_str(
///     r#"{"drinks": [{"name": "Mango Shake", "desc": "Fresh", "price": 4.5, "image": "m.jpg"}]}"#,
/// ).unwrap();
///
/// assert_eq!(catalog.len(), 1);
/// assert!(catalog.find_item("MANGO SHAKE").is_some());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Catalog {
    categories: Vec<Category>,
}

impl Catalog {
    /// Create an empty catalog.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            categories: Vec::new(),
        }
    }

    /// Categories in display order.
    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Look up a category by its key.
    #[must_use]
    pub fn category(&self, key: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.key == key)
    }

    /// Append an item, creating the category at the end if it is new.
    pub fn push(&mut self, key: &str, item: MenuItem) {
        if let Some(category) = self.categories.iter_mut().find(|c| c.key == key) {
            category.items.push(item);
        } else {
            self.categories.push(Category {
                key: key.to_owned(),
                items: vec![item],
            });
        }
    }

    /// Every item paired with its category key, in display order.
    pub fn items(&self) -> impl Iterator<Item = (&str, &MenuItem)> {
        self.categories
            .iter()
            .flat_map(|c| c.items.iter().map(move |item| (c.key.as_str(), item)))
    }

    /// Find the first item whose name equals `name`, ignoring case.
    #[must_use]
    pub fn find_item(&self, name: &str) -> Option<&MenuItem> {
        let wanted = name.to_lowercase();
        self.items()
            .map(|(_, item)| item)
            .find(|item| item.name.to_lowercase() == wanted)
    }

    /// Total number of items across all categories.
    #[must_use]
    pub fn len(&self) -> usize {
        self.categories.iter().map(|c| c.items.len()).sum()
    }

    /// Whether the catalog has no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Serialize for Catalog {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.categories.len()))?;
        for category in &self.categories {
            map.serialize_entry(&category.key, &category.items)?;
        }
        map.end()
    }
}

struct CatalogVisitor;

impl<'de> Visitor<'de> for CatalogVisitor {
    type Value = Catalog;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map of category names to arrays of menu items")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut catalog = Catalog::new();
        while let Some((key, items)) = access.next_entry::<String, Vec<MenuItem>>()? {
            if let Some(existing) = catalog.categories.iter_mut().find(|c| c.key == key) {
                existing.items = items;
            } else {
                catalog.categories.push(Category { key, items });
            }
        }
        Ok(catalog)
    }
}

impl<'de> Deserialize<'de> for Catalog {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(CatalogVisitor)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    const MENU: &str = r#"{
        "mainCourse": [
            {"name": "Beef Haleem", "desc": "Slow-cooked lentil stew", "price": 9.99, "image": "haleem.jpg", "videoId": "abc123"}
        ],
        "appetizers": [
            {"name": "Chicken Shingara", "desc": "Flaky pastry", "price": 6.99, "image": "shingara.jpg"},
            {"name": "Chotpoti", "desc": "Tangy chickpeas", "price": 9.99, "image": "chotpoti.jpg", "videoId": ""}
        ]
    }"#;

    #[test]
    fn test_preserves_document_order() {
        let catalog: Catalog = serde_json::from_str(MENU).unwrap();
        let keys: Vec<&str> = catalog.categories().iter().map(|c| c.key.as_str()).collect();
        assert_eq!(keys, ["mainCourse", "appetizers"]);
        assert_eq!(catalog.len(), 3);
    }

    #[test]
    fn test_find_item_ignores_case() {
        let catalog: Catalog = serde_json::from_str(MENU).unwrap();
        let item = catalog.find_item("chicken shingara").unwrap();
        assert_eq!(item.name, "Chicken Shingara");
        assert!(catalog.find_item("vegetable samosa").is_none());
    }

    #[test]
    fn test_empty_video_id_is_absent() {
        let catalog: Catalog = serde_json::from_str(MENU).unwrap();
        assert_eq!(catalog.find_item("beef haleem").unwrap().video(), Some("abc123"));
        assert_eq!(catalog.find_item("chotpoti").unwrap().video(), None);
        assert_eq!(catalog.find_item("chicken shingara").unwrap().video(), None);
    }

    #[test]
    fn test_push_creates_category() {
        let mut catalog = Catalog::new();
        let item = MenuItem {
            name: "Mango Shake".to_string(),
            desc: "Fresh mango".to_string(),
            price: Price::from_cents(450).unwrap(),
            image: "mango.jpg".to_string(),
            video_id: None,
        };
        catalog.push("drinks", item.clone());
        catalog.push("drinks", item);
        assert_eq!(catalog.categories().len(), 1);
        assert_eq!(catalog.category("drinks").unwrap().items.len(), 2);
    }

    #[test]
    fn test_serialize_keeps_order_and_numbers() {
        let catalog: Catalog = serde_json::from_str(MENU).unwrap();
        let json = serde_json::to_string(&catalog).unwrap();
        assert!(json.find("mainCourse").unwrap() < json.find("appetizers").unwrap());
        assert!(json.contains("\"price\":6.99"));
        assert!(json.contains("\"videoId\":\"abc123\""));

        let reparsed: Catalog = serde_json::from_str(&json).unwrap();
        assert_eq!(reparsed, catalog);
    }

    #[test]
    fn test_rejects_negative_price() {
        let bad = r#"{"x": [{"name": "A", "desc": "", "price": -1, "image": ""}]}"#;
        assert!(serde_json::from_str::<Catalog>(bad).is_err());
    }

    #[test]
    fn test_items_pairs_category() {
        let catalog: Catalog = serde_json::from_str(MENU).unwrap();
        let pairs: Vec<(&str, &str)> = catalog
            .items()
            .map(|(key, item)| (key, item.name.as_str()))
            .collect();
        assert_eq!(pairs[0], ("mainCourse", "Beef Haleem"));
        assert_eq!(pairs[2], ("appetizers", "Chotpoti"));
    }
}
