//! Integration tests for the newsletter and taste quiz forms.

use tiffin_integration_tests::sample_site;
use tiffin_storefront::quiz;

#[test]
fn test_newsletter_confirms_valid_address() {
    let mut site = sample_site();
    let text = site.submit_newsletter("rumi@example.com");

    assert_eq!(
        text.as_deref(),
        Some("Thanks for subscribing, rumi@example.com!")
    );
    assert_eq!(site.renderer().alerts, [text.expect("No confirmation")]);
}

#[test]
fn test_newsletter_ignores_blank_and_flags_invalid() {
    let mut site = sample_site();
    assert_eq!(site.submit_newsletter("  "), None);
    assert!(site.renderer().alerts.is_empty());

    assert_eq!(
        site.submit_newsletter("rumi").as_deref(),
        Some("Please enter a valid email address.")
    );
    assert_eq!(site.renderer().alerts.len(), 1);
}

#[test]
fn test_quiz_recommends_by_spice() {
    assert_eq!(
        quiz::recommend_raw(Some("mild")),
        "Try our Chicken Shingara ($6.99)"
    );
    assert_eq!(quiz::recommend_raw(Some("spicy")), "Try our Chotpoti ($9.99)");
    assert_eq!(quiz::recommend_raw(None), "Try our Beef Haleem ($9.99)");
}
