//! Navigation targets and chat participants.

use serde::{Deserialize, Serialize};

/// A named page section the assistant can scroll to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    Menu,
    Cart,
    Booking,
    Story,
    Testimonials,
    Faq,
    Newsletter,
    Location,
    Temple,
}

impl Section {
    /// Element id of the section on the page.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Menu => "menu",
            Self::Cart => "cart",
            Self::Booking => "booking",
            Self::Story => "story",
            Self::Testimonials => "testimonials",
            Self::Faq => "faq",
            Self::Newsletter => "newsletter",
            Self::Location => "location",
            Self::Temple => "temple",
        }
    }
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

impl std::str::FromStr for Section {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "menu" => Ok(Self::Menu),
            "cart" => Ok(Self::Cart),
            "booking" => Ok(Self::Booking),
            "story" => Ok(Self::Story),
            "testimonials" => Ok(Self::Testimonials),
            "faq" => Ok(Self::Faq),
            "newsletter" => Ok(Self::Newsletter),
            "location" => Ok(Self::Location),
            "temple" => Ok(Self::Temple),
            _ => Err(format!("invalid section: {s}")),
        }
    }
}

/// Who wrote a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sender {
    User,
    Bot,
}

impl Sender {
    /// CSS class suffix used by the chat widget.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Bot => "bot",
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_section_roundtrip_through_id() {
        for section in [Section::Menu, Section::Faq, Section::Temple] {
            assert_eq!(section.id().parse::<Section>().unwrap(), section);
        }
        assert!("find us".parse::<Section>().is_err());
    }

    #[test]
    fn test_display_matches_id() {
        assert_eq!(Section::Location.to_string(), "location");
        assert_eq!(Sender::Bot.as_str(), "bot");
    }
}
