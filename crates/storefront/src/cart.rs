//! Cart engine.
//!
//! An append-only list of [`CartLine`]s until an explicit clear. The engine
//! itself is pure; the session layer pushes [`CartEngine::view`] to the
//! renderer after each mutation.

use thiserror::Error;
use tiffin_core::{CartLine, Price, PriceError, RedemptionOption};

use crate::render::CartView;

/// Cart errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CartError {
    /// Non-numeric, non-finite or negative price, or one that would push the
    /// total out of range.
    #[error("Invalid price for {name}: {source}")]
    InvalidItem {
        name: String,
        #[source]
        source: PriceError,
    },
}

/// The active order.
#[derive(Debug, Clone, Default)]
pub struct CartEngine {
    lines: Vec<CartLine>,
}

impl CartEngine {
    /// Create an empty cart.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a line for an already validated price.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::InvalidItem`] and leaves the cart untouched if the
    /// new total would overflow.
    pub fn add(&mut self, name: &str, price: Price) -> Result<(), CartError> {
        self.total()
            .checked_add(price)
            .map_err(|source| invalid(name, source))?;
        let line = CartLine::new(name, price);
        tracing::debug!(name = %line.name, price = %line.price, "Cart line added");
        self.lines.push(line);
        Ok(())
    }

    /// Append a line from a raw price string, as carried by an "Add to Cart"
    /// button.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::InvalidItem`] and leaves the cart untouched if the
    /// price is not a finite non-negative number or the total would overflow.
    pub fn add_raw(&mut self, name: &str, raw_price: &str) -> Result<(), CartError> {
        let price = raw_price
            .parse::<Price>()
            .map_err(|source| invalid(name, source))?;
        self.add(name, price)
    }

    /// Append a line from a floating-point price.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::InvalidItem`] for NaN, infinities and negative
    /// values, and when the total would overflow.
    pub fn add_f64(&mut self, name: &str, price: f64) -> Result<(), CartError> {
        let price = Price::from_f64(price).map_err(|source| invalid(name, source))?;
        self.add(name, price)
    }

    /// Append the zero-priced line for a redeemed reward.
    pub fn add_reward(&mut self, option: &RedemptionOption) {
        self.lines.push(CartLine::reward(option));
    }

    /// Exact sum of all line prices; zero for an empty cart. Lines are only
    /// accepted while this sum stays in range.
    #[must_use]
    pub fn total(&self) -> Price {
        self.lines.iter().map(|line| line.price).sum()
    }

    /// Remove every line.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Lines in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Display data for the renderer.
    #[must_use]
    pub fn view(&self) -> CartView {
        CartView::new(&self.lines, self.total())
    }
}

fn invalid(name: &str, source: PriceError) -> CartError {
    tracing::warn!(name, error = %source, "Rejected cart item");
    CartError::InvalidItem {
        name: name.to_owned(),
        source,
    }
}
