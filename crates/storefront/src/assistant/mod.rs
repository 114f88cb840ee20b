//! Chat assistant command interpreter.
//!
//! Free text is lowercased, trimmed and matched against a fixed, ordered
//! pattern table (see [`patterns`]). The result is an [`Action`] value; the
//! session layer performs it, so interpretation itself has no side effects.
//!
//! # Example
//!
//! ```
//! use tiffin_core::Section;
//! use tiffin_storefront::assistant::{Action, interpret};
//!
//! assert_eq!(interpret("  Menu "), Action::Navigate(Section::Menu));
//! assert_eq!(
//!     interpret("REDEEM Mango Shake"),
//!     Action::Redeem("mango shake".to_string())
//! );
//! ```

mod patterns;

use tiffin_core::Section;

pub use patterns::PATTERNS;

/// Reply to `help` / `commands`.
pub const HELP_TEXT: &str = "Commands: menu, search [term], add [item], cart, checkout, booking, \
     story, testimonials, faq, newsletter, location, temple, points, redeem [reward].";

/// Reply to anything unrecognised.
pub const FALLBACK_TEXT: &str = "I'm sorry, I didn't understand. Type 'help' for commands.";

/// What a chat line asks the site to do.
///
/// Arguments are the lowercased remainder after the keyword, trimmed at both
/// ends only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Help,
    Navigate(Section),
    Search(String),
    AddItem(String),
    Checkout,
    ShowPoints,
    Redeem(String),
    NotUnderstood,
}

/// Interpret one chat line. The first matching pattern wins.
#[must_use]
pub fn interpret(input: &str) -> Action {
    let line = input.trim().to_lowercase();
    PATTERNS
        .iter()
        .find_map(|pattern| pattern.apply(&line))
        .unwrap_or(Action::NotUnderstood)
}

/// Bot message announcing a scroll.
#[must_use]
pub fn navigating_message(section: Section) -> String {
    format!("Navigating to {section} section.")
}
