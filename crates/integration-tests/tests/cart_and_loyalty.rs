//! Integration tests for cart totals, checkout and reward redemption.

use tiffin_core::RedemptionOption;
use tiffin_integration_tests::{FailingStore, sample_site, site_with_store};
use tiffin_storefront::StorefrontError;
use tiffin_storefront::loyalty::LoyaltyError;
use tiffin_storefront::render::CHECKOUT_MODAL;
use tiffin_storefront::storage::{KeyValueStore, LOYALTY_POINTS_KEY, MemoryStore};

fn mango_shake() -> &'static RedemptionOption {
    RedemptionOption::find("Mango Shake").expect("Mango Shake reward missing")
}

fn store_with_points(points: u64) -> MemoryStore {
    let mut store = MemoryStore::new();
    store
        .set(LOYALTY_POINTS_KEY, &points.to_string())
        .expect("Failed to seed points");
    store
}

// =============================================================================
// Cart
// =============================================================================

#[test]
fn test_add_renders_lines_and_total() {
    let mut site = sample_site();
    site.add_to_cart("Chicken Shingara", "6.99").expect("Failed to add item");
    site.add_to_cart("Chicken Shingara", "6.99").expect("Failed to add item");

    let view = site.renderer().last_cart().cloned().expect("No cart rendered");
    assert_eq!(
        view.lines,
        ["Chicken Shingara: $6.99", "Chicken Shingara: $6.99"]
    );
    assert_eq!(view.total, "13.98");
    assert_eq!(site.renderer().carts.len(), 2);
}

#[test]
fn test_total_equals_exact_sum() {
    let mut site = sample_site();
    for price in ["0.10", "0.20", "1.01", "9.99", "0.70"] {
        assert!(site.add_to_cart("Item", price).is_ok());
    }
    assert_eq!(site.cart().total().to_fixed(), "12.00");
}

#[test]
fn test_invalid_price_leaves_cart_unchanged() {
    let mut site = sample_site();
    let result = site.add_to_cart("Mystery", "NaN");
    assert!(matches!(result, Err(StorefrontError::Cart(_))));
    assert!(site.cart().is_empty());
    assert!(site.renderer().carts.is_empty());
}

#[test]
fn test_total_overflow_is_rejected_not_fatal() {
    let mut site = sample_site();
    site.add_to_cart("Banquet", "79228162514264337593543950335")
        .expect("Failed to add item");
    let result = site.add_to_cart("Banquet", "1");

    assert!(matches!(result, Err(StorefrontError::Cart(_))));
    assert_eq!(site.cart().len(), 1);
    assert_eq!(site.renderer().carts.len(), 1);
    assert_eq!(
        site.handle_chat("add chotpoti").as_deref(),
        Some("Invalid price for Chotpoti: price total is out of range")
    );
    assert_eq!(site.cart().len(), 1);

    let receipt = site.submit_checkout().expect("Failed to submit checkout");
    assert_eq!(receipt.earned, u64::MAX);
    assert_eq!(site.points(), u64::MAX);
}

#[test]
fn test_clear_always_yields_zero_total() {
    let mut site = sample_site();
    assert!(site.add_to_cart("Beef Haleem", "9.99").is_ok());
    site.clear_cart();
    assert_eq!(site.cart().view().total, "0.00");
    assert_eq!(
        site.renderer().last_cart().map(|v| v.total.as_str()),
        Some("0.00")
    );
}

// =============================================================================
// Checkout
// =============================================================================

#[test]
fn test_checkout_of_19_98_earns_200_points() {
    let mut site = sample_site();
    assert!(site.add_to_cart("Chicken Shingara", "6.99").is_ok());
    assert!(site.add_to_cart("Chicken Shingara", "12.99").is_ok());

    site.open_checkout();
    assert_eq!(site.renderer().is_visible(CHECKOUT_MODAL), Some(true));
    assert_eq!(
        site.renderer().summaries.last().and_then(|s| s.last()).map(String::as_str),
        Some("Total: $19.98")
    );

    let receipt = site.submit_checkout().expect("Failed to submit checkout");
    assert_eq!(receipt.earned, 200);
    assert_eq!(receipt.balance, 200);
    assert_eq!(site.points(), 200);
    assert!(site.cart().is_empty());
    assert_eq!(site.renderer().is_visible(CHECKOUT_MODAL), Some(false));
    assert_eq!(
        site.renderer().alerts.last().map(String::as_str),
        Some("Thank you! Your order has been submitted. You earned 200 points.")
    );
    assert_eq!(
        site.store().get(LOYALTY_POINTS_KEY).ok().flatten().as_deref(),
        Some("200")
    );
}

#[test]
fn test_earn_accumulates_on_existing_balance() {
    let mut site = site_with_store(store_with_points(45));
    assert!(site.add_to_cart("Chotpoti", "9.99").is_ok());
    let receipt = site.submit_checkout().expect("Failed to submit checkout");
    assert_eq!(receipt.earned, 100);
    assert_eq!(site.points(), 145);
}

#[test]
fn test_checkout_persistence_failure_keeps_cart() {
    let mut site = site_with_store(FailingStore::with(LOYALTY_POINTS_KEY, "10"));
    assert!(site.add_to_cart("Chotpoti", "9.99").is_ok());

    let result = site.submit_checkout();
    assert!(matches!(
        result,
        Err(StorefrontError::Loyalty(LoyaltyError::Storage(_)))
    ));
    assert_eq!(site.points(), 10);
    assert_eq!(site.cart().len(), 1);
}

// =============================================================================
// Redemption
// =============================================================================

#[test]
fn test_redeem_with_enough_points() {
    let mut site = site_with_store(store_with_points(350));
    let balance = site.redeem(mango_shake()).expect("Failed to redeem reward");

    assert_eq!(balance, 50);
    assert_eq!(site.points(), 50);
    assert_eq!(site.cart().len(), 1);
    let line = site.cart().lines().first().expect("Reward line missing");
    assert_eq!(line.name, "Mango Shake (Reward)");
    assert!(line.price.is_zero());
    assert_eq!(site.renderer().loyalty.last(), Some(&50));
}

#[test]
fn test_redeem_with_insufficient_points_changes_nothing() {
    let mut site = site_with_store(store_with_points(299));
    let result = site.redeem(mango_shake());

    assert!(matches!(
        result,
        Err(StorefrontError::Loyalty(LoyaltyError::InsufficientPoints {
            cost: 300,
            available: 299
        }))
    ));
    assert_eq!(site.points(), 299);
    assert!(site.cart().is_empty());
    assert!(site.renderer().carts.is_empty());
}

#[test]
fn test_redeem_is_atomic_when_persistence_fails() {
    let mut site = site_with_store(FailingStore::with(LOYALTY_POINTS_KEY, "1000"));
    let result = site.redeem(mango_shake());

    assert!(matches!(
        result,
        Err(StorefrontError::Loyalty(LoyaltyError::Storage(_)))
    ));
    assert_eq!(site.points(), 1000);
    assert!(site.cart().is_empty());
}

#[test]
fn test_redeem_offer_alerts_outcome() {
    let mut site = site_with_store(store_with_points(300));
    assert!(site.redeem_offer(mango_shake()).is_ok());
    assert!(site.redeem_offer(mango_shake()).is_err());
    assert_eq!(
        site.renderer().alerts,
        [
            "You have redeemed a Mango Shake! It has been added to your cart.",
            "Not enough points to redeem this reward."
        ]
    );
    assert_eq!(
        site.reward_offers(),
        ["Vegetable Samosa - 500 pts", "Mango Shake - 300 pts"]
    );
}

#[test]
fn test_balance_survives_new_session() {
    let mut site = site_with_store(store_with_points(600));
    let samosa = RedemptionOption::find("vegetable samosa").expect("Vegetable Samosa reward missing");
    assert!(site.redeem(samosa).is_ok());

    let store = site.store().clone();
    let next = site_with_store(store);
    assert_eq!(next.points(), 100);
    assert_eq!(next.renderer().loyalty.first(), Some(&100));
}
