//! Rendering capability the engines call into.
//!
//! The page owns the DOM; the engines only describe what changed. A browser
//! binding implements [`Renderer`] against real elements, tests record calls.

use tiffin_core::{CartLine, Price, Section, Sender};

/// Element id of the checkout modal.
pub const CHECKOUT_MODAL: &str = "checkout-modal";

/// Element id of the chat widget.
pub const ASSISTANT_WIDGET: &str = "assistant";

/// Cart display data, one preformatted string per line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartView {
    /// `"<name>: $<price>"` per line, in insertion order.
    pub lines: Vec<String>,
    /// Total formatted to two decimals, without currency symbol.
    pub total: String,
}

impl CartView {
    /// Build the view for a list of lines and their total.
    #[must_use]
    pub fn new(lines: &[CartLine], total: Price) -> Self {
        Self {
            lines: lines.iter().map(ToString::to_string).collect(),
            total: total.to_fixed(),
        }
    }

    /// Create an empty cart view.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            lines: Vec::new(),
            total: "0.00".to_string(),
        }
    }

    /// Lines followed by the bold total row, as shown in the checkout modal.
    #[must_use]
    pub fn order_summary(&self) -> Vec<String> {
        let mut summary = self.lines.clone();
        summary.push(format!("Total: ${}", self.total));
        summary
    }
}

/// Side effects the engines ask the page to perform.
pub trait Renderer {
    /// Redraw the cart list and total.
    fn render_cart(&mut self, view: &CartView);

    /// Redraw the loyalty balance.
    fn render_loyalty(&mut self, points: u64);

    /// Append a chat bubble.
    fn render_message(&mut self, sender: Sender, text: &str);

    /// Fill the checkout modal with the order summary.
    fn render_order_summary(&mut self, summary: &[String]);

    /// Show or hide an element by id.
    fn set_visibility(&mut self, element_id: &str, visible: bool);

    /// Smooth-scroll to a section.
    fn scroll_to_section(&mut self, section: Section);

    /// Show a blocking notice (the page's `alert`).
    fn alert(&mut self, text: &str);
}
