//! Ordered pattern table for the assistant.

use tiffin_core::Section;

use super::Action;

/// How a pattern matches a normalised line.
#[derive(Debug, Clone, Copy)]
pub enum Matcher {
    /// The whole line equals one of the words.
    Exact(&'static [&'static str]),
    /// The line starts with the keyword followed by a space.
    Prefix(&'static str),
}

/// One row of the table: a matcher and the action it produces.
#[derive(Debug, Clone, Copy)]
pub struct Pattern {
    pub matcher: Matcher,
    build: fn(&str) -> Action,
}

impl Pattern {
    const fn exact(words: &'static [&'static str], build: fn(&str) -> Action) -> Self {
        Self {
            matcher: Matcher::Exact(words),
            build,
        }
    }

    const fn prefix(keyword: &'static str, build: fn(&str) -> Action) -> Self {
        Self {
            matcher: Matcher::Prefix(keyword),
            build,
        }
    }

    /// Apply to a lowercased, trimmed line.
    ///
    /// Prefix patterns strip the keyword and one space, then trim the
    /// remainder at both ends; an empty remainder does not match.
    #[must_use]
    pub fn apply(&self, line: &str) -> Option<Action> {
        match self.matcher {
            Matcher::Exact(words) => words.contains(&line).then(|| (self.build)(line)),
            Matcher::Prefix(keyword) => line
                .strip_prefix(keyword)
                .and_then(|rest| rest.strip_prefix(' '))
                .map(str::trim)
                .filter(|arg| !arg.is_empty())
                .map(self.build),
        }
    }
}

/// The command table, highest priority first.
pub static PATTERNS: &[Pattern] = &[
    Pattern::exact(&["help", "commands"], |_| Action::Help),
    Pattern::exact(&["menu"], |_| Action::Navigate(Section::Menu)),
    Pattern::prefix("search", |term| Action::Search(term.to_owned())),
    Pattern::prefix("add", |item| Action::AddItem(item.to_owned())),
    Pattern::exact(&["cart"], |_| Action::Navigate(Section::Cart)),
    Pattern::exact(&["checkout"], |_| Action::Checkout),
    Pattern::exact(&["booking", "book"], |_| Action::Navigate(Section::Booking)),
    Pattern::exact(&["points"], |_| Action::ShowPoints),
    Pattern::prefix("redeem", |reward| Action::Redeem(reward.to_owned())),
    Pattern::exact(&["story"], |_| Action::Navigate(Section::Story)),
    Pattern::exact(&["testimonials"], |_| {
        Action::Navigate(Section::Testimonials)
    }),
    Pattern::exact(&["faq"], |_| Action::Navigate(Section::Faq)),
    Pattern::exact(&["newsletter"], |_| Action::Navigate(Section::Newsletter)),
    Pattern::exact(&["location", "find us"], |_| {
        Action::Navigate(Section::Location)
    }),
    Pattern::exact(&["temple"], |_| Action::Navigate(Section::Temple)),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_requires_space_after_keyword() {
        let search = Pattern::prefix("search", |t| Action::Search(t.to_owned()));
        assert_eq!(search.apply("searchchicken"), None);
        assert_eq!(
            search.apply("search chicken"),
            Some(Action::Search("chicken".to_string()))
        );
    }

    #[test]
    fn test_table_order_puts_help_first() {
        assert!(matches!(
            PATTERNS.first().map(|p| p.matcher),
            Some(Matcher::Exact(["help", "commands"]))
        ));
    }
}
