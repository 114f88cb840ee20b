//! Type-safe price representation using decimal arithmetic.
//!
//! Menu prices arrive as JSON numbers (`6.99`) and as raw strings scraped from
//! button attributes (`"6.99"`). Both paths go through [`Price`], which rejects
//! anything that is not a finite, non-negative amount. Arithmetic stays in
//! [`Decimal`] so cart totals never drift by a penny.

use core::fmt;
use core::iter::Sum;
use core::str::FromStr;

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Errors that can occur when constructing a [`Price`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PriceError {
    /// The value is NaN or infinite.
    #[error("price must be a finite number")]
    NotFinite,
    /// The value is below zero.
    #[error("price cannot be negative (got {0})")]
    Negative(Decimal),
    /// The input string is not a number.
    #[error("price is not a number: {0:?}")]
    Unparsable(String),
    /// A sum of prices exceeds the representable range.
    #[error("price total is out of range")]
    Overflow,
}

/// A non-negative amount in the site's single currency (USD).
///
/// ## Examples
///
/// ```
/// use tiffin_core::Price;
///
/// let price: Price = "6.99".parse().unwrap();
/// assert_eq!(price.to_string(), "$6.99");
///
/// assert!("-1".parse::<Price>().is_err());
/// assert!(Price::from_f64(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Price(Decimal);

impl Price {
    /// A price of zero, used for reward lines.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Create a price from a decimal amount.
    ///
    /// # Errors
    ///
    /// Returns [`PriceError::Negative`] if the amount is below zero.
    pub fn new(amount: Decimal) -> Result<Self, PriceError> {
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(PriceError::Negative(amount));
        }
        Ok(Self(amount.normalize()))
    }

    /// Create a price from whole cents.
    ///
    /// # Errors
    ///
    /// Returns [`PriceError::Negative`] if `cents` is below zero.
    pub fn from_cents(cents: i64) -> Result<Self, PriceError> {
        Self::new(Decimal::new(cents, 2))
    }

    /// Create a price from a float, keeping the shortest decimal that
    /// round-trips (`6.99` stays `6.99`, not `6.9900000000000002`).
    ///
    /// # Errors
    ///
    /// Returns an error for NaN, infinities and negative values.
    pub fn from_f64(value: f64) -> Result<Self, PriceError> {
        if !value.is_finite() {
            return Err(PriceError::NotFinite);
        }
        let amount = Decimal::from_f64(value).ok_or(PriceError::NotFinite)?;
        Self::new(amount)
    }

    /// The exact decimal amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// The amount rounded half away from zero to two places.
    #[must_use]
    pub fn rounded(&self) -> Decimal {
        self.0
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    }

    /// Format without the currency symbol (e.g., `"19.98"`).
    #[must_use]
    pub fn to_fixed(&self) -> String {
        format!("{:.2}", self.rounded())
    }

    /// Exact sum of two prices.
    ///
    /// # Errors
    ///
    /// Returns [`PriceError::Overflow`] if the sum is out of range.
    pub fn checked_add(self, rhs: Self) -> Result<Self, PriceError> {
        self.0
            .checked_add(rhs.0)
            .map(Self)
            .ok_or(PriceError::Overflow)
    }

    /// Sum of two prices, clamped at the largest representable amount.
    #[must_use]
    pub fn saturating_add(self, rhs: Self) -> Self {
        Self(self.0.saturating_add(rhs.0))
    }

    /// Whether the amount is exactly zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}", self.to_fixed())
    }
}

impl FromStr for Price {
    type Err = PriceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let amount = Decimal::from_str(trimmed)
            .or_else(|_| Decimal::from_scientific(trimmed))
            .map_err(|_| PriceError::Unparsable(s.to_owned()))?;
        Self::new(amount)
    }
}

impl TryFrom<Decimal> for Price {
    type Error = PriceError;

    fn try_from(amount: Decimal) -> Result<Self, Self::Error> {
        Self::new(amount)
    }
}

impl From<Price> for Decimal {
    fn from(price: Price) -> Self {
        price.0
    }
}

// Saturating, so summing never panics; callers that must reject overflow use
// `checked_add`.
impl Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Self::saturating_add)
    }
}

impl<'a> Sum<&'a Self> for Price {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

// JSON keeps prices as numbers (`"price": 6.99`), matching menu.json.
impl Serialize for Price {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        rust_decimal::serde::float::serialize(&self.0, serializer)
    }
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let amount = <Decimal as Deserialize>::deserialize(deserializer)?;
        Self::new(amount).map_err(serde::de::Error::custom)
    }
}
