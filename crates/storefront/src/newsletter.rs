//! Newsletter sign-up form.
//!
//! There is no mailing backend; a valid address only earns a confirmation.

use thiserror::Error;

/// Newsletter form errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NewsletterError {
    /// Nothing was entered; the form is ignored.
    #[error("no email entered")]
    Empty,
    #[error("invalid email address: {0}")]
    InvalidEmail(String),
}

impl NewsletterError {
    /// Alert text for the customer, if any.
    #[must_use]
    pub const fn user_message(&self) -> Option<&'static str> {
        match self {
            Self::Empty => None,
            Self::InvalidEmail(_) => Some("Please enter a valid email address."),
        }
    }
}

/// Confirmation for a submitted address.
///
/// # Errors
///
/// Returns [`NewsletterError::Empty`] for a blank field and
/// [`NewsletterError::InvalidEmail`] for an address without a local part or
/// a dotted domain.
pub fn confirmation(email: &str) -> Result<String, NewsletterError> {
    let email = email.trim();
    if email.is_empty() {
        return Err(NewsletterError::Empty);
    }
    if !is_valid_email(email) {
        return Err(NewsletterError::InvalidEmail(email.to_owned()));
    }
    tracing::info!(email, "Newsletter subscription");
    Ok(format!("Thanks for subscribing, {email}!"))
}

fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty() && !domain.is_empty() && domain.contains('.')
}
