//! Cart and reward types.

use core::fmt;

use serde::{Deserialize, Serialize};

use super::price::Price;

/// One line in the active order.
///
/// Lines carry no identity beyond name and price; adding the same dish twice
/// yields two lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub name: String,
    pub price: Price,
}

impl CartLine {
    /// Create a cart line.
    #[must_use]
    pub fn new(name: impl Into<String>, price: Price) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }

    /// The zero-priced line added when a reward is redeemed.
    #[must_use]
    pub fn reward(option: &RedemptionOption) -> Self {
        Self::new(format!("{} (Reward)", option.name), Price::ZERO)
    }
}

impl fmt::Display for CartLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.price)
    }
}

/// A reward purchasable with loyalty points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct RedemptionOption {
    pub name: &'static str,
    pub cost: u64,
}

impl RedemptionOption {
    /// The fixed reward catalog.
    pub const ALL: &'static [Self] = &[
        Self {
            name: "Vegetable Samosa",
            cost: 500,
        },
        Self {
            name: "Mango Shake",
            cost: 300,
        },
    ];

    /// Find a reward by name, ignoring case.
    #[must_use]
    pub fn find(name: &str) -> Option<&'static Self> {
        let wanted = name.to_lowercase();
        Self::ALL
            .iter()
            .find(|option| option.name.to_lowercase() == wanted)
    }

    /// Offer label shown on the rewards panel (e.g. `"Mango Shake - 300 pts"`).
    #[must_use]
    pub fn label(&self) -> String {
        format!("{} - {} pts", self.name, self.cost)
    }
}
