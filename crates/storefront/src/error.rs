//! Unified error handling with Sentry integration.
//!
//! Every engine has its own error enum; [`StorefrontError`] unifies them for
//! the session layer. Errors never escape a UI event: the session recovers
//! them locally, reports infrastructure failures to Sentry and turns the rest
//! into a user-visible message.

use thiserror::Error;

use crate::cart::CartError;
use crate::catalog::LoadError;
use crate::loyalty::LoyaltyError;
use crate::storage::StorageError;

/// Application-level error type for the site session.
#[derive(Debug, Error)]
pub enum StorefrontError {
    /// Catalog or content could not be fetched or parsed.
    #[error("Load error: {0}")]
    Load(#[from] LoadError),

    /// Rejected cart input.
    #[error("Cart error: {0}")]
    Cart(#[from] CartError),

    /// Loyalty operation failed.
    #[error("Loyalty error: {0}")]
    Loyalty(#[from] LoyaltyError),

    /// Persistence store failed.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// An add or redeem target does not exist.
    #[error("Not found: {0}")]
    ItemNotFound(String),
}

impl StorefrontError {
    /// Whether the failure comes from infrastructure rather than user input.
    #[must_use]
    pub const fn is_infrastructure(&self) -> bool {
        matches!(
            self,
            Self::Load(_) | Self::Storage(_) | Self::Loyalty(LoyaltyError::Storage(_))
        )
    }

    /// Message suitable for an alert or chat bubble.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Load(_) => "Sorry, the menu could not be loaded.".to_string(),
            Self::Storage(_) | Self::Loyalty(LoyaltyError::Storage(_)) => {
                "Sorry, we couldn't save your points. Please try again.".to_string()
            }
            Self::Loyalty(LoyaltyError::InsufficientPoints { .. }) => {
                "Not enough points to redeem this reward.".to_string()
            }
            Self::Cart(err) => err.to_string(),
            Self::ItemNotFound(name) => format!("Item “{name}” not found."),
        }
    }
}

/// Result type alias for `StorefrontError`.
pub type Result<T> = std::result::Result<T, StorefrontError>;

/// Log an error and, for infrastructure failures, capture it to Sentry.
pub fn report(err: &StorefrontError) {
    if err.is_infrastructure() {
        let event_id = sentry::capture_error(err);
        tracing::error!(error = %err, sentry_event_id = %event_id, "Event failed");
    } else {
        tracing::warn!(error = %err, "Event rejected");
    }
}

/// Add a breadcrumb for user actions.
///
/// Breadcrumbs appear in Sentry error reports to show the trail of user actions
/// leading up to an error.
///
/// # Example
///
/// ```rust,ignore
/// add_breadcrumb("cart", "Added item", Some(&[("name", "Chotpoti")]));
/// ```
pub fn add_breadcrumb(category: &str, message: &str, data: Option<&[(&str, &str)]>) {
    let mut breadcrumb = sentry::Breadcrumb {
        category: Some(category.to_string()),
        message: Some(message.to_string()),
        level: sentry::Level::Info,
        ..Default::default()
    };

    if let Some(pairs) = data {
        for (key, value) in pairs {
            breadcrumb.data.insert(
                (*key).to_string(),
                serde_json::Value::String((*value).to_string()),
            );
        }
    }

    sentry::add_breadcrumb(breadcrumb);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = StorefrontError::ItemNotFound("vegetable samosa".to_string());
        assert_eq!(err.to_string(), "Not found: vegetable samosa");
        assert_eq!(err.user_message(), "Item “vegetable samosa” not found.");
    }

    #[test]
    fn test_infrastructure_classification() {
        let storage = StorefrontError::Storage(StorageError::Io("disk full".to_string()));
        assert!(storage.is_infrastructure());

        let points = StorefrontError::Loyalty(LoyaltyError::InsufficientPoints {
            cost: 500,
            available: 10,
        });
        assert!(!points.is_infrastructure());
        assert_eq!(
            points.user_message(),
            "Not enough points to redeem this reward."
        );
    }

    #[test]
    fn test_report_without_sentry_client_is_noop() {
        // No client bound: capture and breadcrumbs must not panic
        report(&StorefrontError::Storage(StorageError::Io("x".to_string())));
        add_breadcrumb("cart", "Added item", Some(&[("name", "Chotpoti")]));
    }
}
