//! Taste quiz recommendation.

use std::str::FromStr;

/// Spice preference picked on the quiz form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Spice {
    Mild,
    Medium,
    Spicy,
}

impl FromStr for Spice {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mild" => Ok(Self::Mild),
            "medium" => Ok(Self::Medium),
            "spicy" => Ok(Self::Spicy),
            _ => Err(format!("invalid spice level: {s}")),
        }
    }
}

/// Recommend a dish for the quiz answers.
///
/// Only the spice answer decides; no answer falls through to the house
/// favourite.
#[must_use]
pub fn recommend(spice: Option<Spice>) -> String {
    let dish = match spice {
        Some(Spice::Mild) => "Chicken Shingara ($6.99)",
        Some(Spice::Spicy) => "Chotpoti ($9.99)",
        Some(Spice::Medium) | None => "Beef Haleem ($9.99)",
    };
    format!("Try our {dish}")
}

/// Recommend from the raw radio value, treating unknown values as no answer.
#[must_use]
pub fn recommend_raw(spice: Option<&str>) -> String {
    recommend(spice.and_then(|s| s.parse().ok()))
}
