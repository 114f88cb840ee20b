//! Menu search filter.
//!
//! A case-insensitive substring test over the text a menu card displays:
//! name, description, formatted price and category. The caller toggles card
//! visibility with the result.

use tiffin_core::{Catalog, MenuItem};

use crate::catalog::format_category_name;

/// Whether `item` in `category` matches `query`. An empty (or all-whitespace)
/// query matches everything.
#[must_use]
pub fn matches(item: &MenuItem, category: &str, query: &str) -> bool {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    card_text(item, category).contains(&needle)
}

/// Lowercased text of a menu card.
fn card_text(item: &MenuItem, category: &str) -> String {
    format!(
        "{} {} {} {} {}",
        item.name,
        item.desc,
        item.price,
        format_category_name(category),
        category
    )
    .to_lowercase()
}

/// DOM id of a menu card (e.g. `"appetizers-chicken-shingara"`).
#[must_use]
pub fn item_element_id(category: &str, item: &MenuItem) -> String {
    let slug: String = item
        .name
        .to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { '-' })
        .collect();
    format!("{category}-{slug}")
}

/// Visibility of every card for `query`, in catalog order.
#[must_use]
pub fn visibility(catalog: &Catalog, query: &str) -> Vec<(String, bool)> {
    catalog
        .items()
        .map(|(category, item)| {
            (
                item_element_id(category, item),
                matches(item, category, query),
            )
        })
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        serde_json::from_str(
            r#"{
                "appetizers": [
                    {"name": "Chicken Shingara", "desc": "Flaky pastry", "price": 6.99, "image": "a.jpg"}
                ],
                "mainCourse": [
                    {"name": "Beef Haleem", "desc": "Slow-cooked lentils", "price": 9.99, "image": "b.jpg"}
                ]
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_matches_name_case_insensitively() {
        let catalog = catalog();
        let item = catalog.find_item("chicken shingara").unwrap();
        assert!(matches(item, "appetizers", "CHICKEN"));
        assert!(matches(item, "appetizers", "  pastry "));
        assert!(!matches(item, "appetizers", "beef"));
    }

    #[test]
    fn test_matches_price_and_category() {
        let catalog = catalog();
        let haleem = catalog.find_item("beef haleem").unwrap();
        assert!(matches(haleem, "mainCourse", "$9.99"));
        assert!(matches(haleem, "mainCourse", "main course"));
        assert!(matches(haleem, "mainCourse", "maincourse"));
    }

    #[test]
    fn test_empty_query_matches_all() {
        let catalog = catalog();
        assert!(visibility(&catalog, "").iter().all(|(_, visible)| *visible));
        assert!(visibility(&catalog, "   ").iter().all(|(_, visible)| *visible));
    }

    #[test]
    fn test_visibility_hides_non_matches() {
        let result = visibility(&catalog(), "chicken");
        assert_eq!(
            result,
            [
                ("appetizers-chicken-shingara".to_string(), true),
                ("mainCourse-beef-haleem".to_string(), false),
            ]
        );
    }
}
