//! Site session state shared across UI event handlers.
//!
//! [`SiteState`] owns the cart, the loyalty ledger, the catalog and the two
//! injected collaborators (persistence and rendering). Every public method
//! handles one discrete UI event to completion and recovers its own errors.

use tiffin_core::{MenuItem, Price, RedemptionOption, Sender};

use crate::assistant::{self, Action, FALLBACK_TEXT, HELP_TEXT};
use crate::cart::{CartEngine, CartError};
use crate::catalog::{CatalogStore, DataSource, LoadError};
use crate::error::{self, Result, StorefrontError};
use crate::loyalty::{self, LoyaltyLedger};
use crate::newsletter;
use crate::render::{ASSISTANT_WIDGET, CHECKOUT_MODAL, Renderer};
use crate::search;
use crate::storage::KeyValueStore;

/// Outcome of a submitted checkout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckoutReceipt {
    pub total: Price,
    pub earned: u64,
    pub balance: u64,
}

impl CheckoutReceipt {
    /// Confirmation shown to the customer.
    #[must_use]
    pub fn message(&self) -> String {
        format!(
            "Thank you! Your order has been submitted. You earned {} points.",
            self.earned
        )
    }
}

/// State for one page view.
pub struct SiteState<S, R> {
    catalog: CatalogStore,
    cart: CartEngine,
    ledger: LoyaltyLedger,
    store: S,
    renderer: R,
    assistant_open: bool,
}

impl<S: KeyValueStore, R: Renderer> SiteState<S, R> {
    /// Create the session: the ledger is read from `store`, the balance is
    /// rendered and the chat widget starts hidden.
    pub fn new(catalog: CatalogStore, store: S, mut renderer: R) -> Self {
        let ledger = LoyaltyLedger::load(&store);
        renderer.render_loyalty(ledger.points());
        renderer.set_visibility(ASSISTANT_WIDGET, false);

        Self {
            catalog,
            cart: CartEngine::new(),
            ledger,
            store,
            renderer,
            assistant_open: false,
        }
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    #[must_use]
    pub const fn catalog(&self) -> &CatalogStore {
        &self.catalog
    }

    #[must_use]
    pub const fn cart(&self) -> &CartEngine {
        &self.cart
    }

    #[must_use]
    pub const fn points(&self) -> u64 {
        self.ledger.points()
    }

    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    pub const fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    #[must_use]
    pub const fn renderer(&self) -> &R {
        &self.renderer
    }

    pub const fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    /// Fetch menu and content. Failures leave the affected document empty.
    pub async fn load(&mut self, source: &impl DataSource) -> Vec<LoadError> {
        let errors = self.catalog.load(source).await;
        for err in &errors {
            sentry::capture_error(err);
        }
        errors
    }

    // -------------------------------------------------------------------------
    // Cart
    // -------------------------------------------------------------------------

    /// "Add to Cart" button: name and raw price from the button's data.
    ///
    /// # Errors
    ///
    /// Returns [`StorefrontError::Cart`] for an invalid price; the cart is
    /// unchanged.
    pub fn add_to_cart(&mut self, name: &str, raw_price: &str) -> Result<()> {
        let result = self.cart.add_raw(name, raw_price);
        self.after_add(name, result)
    }

    /// Add a catalog item at its listed price.
    ///
    /// # Errors
    ///
    /// Returns [`StorefrontError::Cart`] if the cart total would overflow;
    /// the cart is unchanged.
    pub fn add_item(&mut self, item: &MenuItem) -> Result<()> {
        let result = self.cart.add(&item.name, item.price);
        self.after_add(&item.name, result)
    }

    fn after_add(
        &mut self,
        name: &str,
        result: std::result::Result<(), CartError>,
    ) -> Result<()> {
        if let Err(e) = result {
            let err = StorefrontError::from(e);
            error::report(&err);
            return Err(err);
        }
        error::add_breadcrumb("cart", "Added item", Some(&[("name", name)]));
        self.render_cart();
        Ok(())
    }

    /// Empty the cart.
    pub fn clear_cart(&mut self) {
        self.cart.clear();
        self.render_cart();
    }

    fn render_cart(&mut self) {
        let view = self.cart.view();
        self.renderer.render_cart(&view);
    }

    // -------------------------------------------------------------------------
    // Search
    // -------------------------------------------------------------------------

    /// Show only the menu cards matching `query`.
    pub fn search(&mut self, query: &str) {
        for (element_id, visible) in search::visibility(self.catalog.catalog(), query) {
            self.renderer.set_visibility(&element_id, visible);
        }
    }

    // -------------------------------------------------------------------------
    // Checkout
    // -------------------------------------------------------------------------

    /// Fill the order summary and show the checkout modal.
    pub fn open_checkout(&mut self) {
        let summary = self.cart.view().order_summary();
        self.renderer.render_order_summary(&summary);
        self.renderer.set_visibility(CHECKOUT_MODAL, true);
    }

    /// Hide the checkout modal.
    pub fn close_checkout(&mut self) {
        self.renderer.set_visibility(CHECKOUT_MODAL, false);
    }

    /// Submit the checkout form: award points, clear the cart, close the
    /// modal.
    ///
    /// # Errors
    ///
    /// Returns [`StorefrontError::Loyalty`] if the new balance could not be
    /// persisted; the cart and balance are then unchanged.
    pub fn submit_checkout(&mut self) -> Result<CheckoutReceipt> {
        let total = self.cart.total();
        let balance = match self.ledger.earn(total, &mut self.store) {
            Ok(balance) => balance,
            Err(e) => {
                let err = StorefrontError::from(e);
                error::report(&err);
                self.renderer.alert(&err.user_message());
                return Err(err);
            }
        };

        let receipt = CheckoutReceipt {
            total,
            earned: loyalty::points_for(total),
            balance,
        };
        let total_text = total.to_fixed();
        error::add_breadcrumb(
            "checkout",
            "Order submitted",
            Some(&[("total", total_text.as_str())]),
        );
        tracing::info!(total = %total, earned = receipt.earned, "Order submitted");

        self.renderer.render_loyalty(receipt.balance);
        self.renderer.alert(&receipt.message());
        self.cart.clear();
        self.render_cart();
        self.close_checkout();
        Ok(receipt)
    }

    // -------------------------------------------------------------------------
    // Loyalty
    // -------------------------------------------------------------------------

    /// Labels for the rewards panel.
    #[must_use]
    pub fn reward_offers(&self) -> Vec<String> {
        RedemptionOption::ALL
            .iter()
            .map(RedemptionOption::label)
            .collect()
    }

    /// Redeem a reward: debit the ledger and add the reward line, both or
    /// neither. Returns the new balance.
    ///
    /// # Errors
    ///
    /// - [`crate::loyalty::LoyaltyError::InsufficientPoints`] when the balance
    ///   is too low.
    /// - [`crate::loyalty::LoyaltyError::Storage`] when the debit could not be
    ///   persisted.
    ///
    /// In both cases neither the ledger nor the cart changes.
    pub fn redeem(&mut self, option: &RedemptionOption) -> Result<u64> {
        let balance = match self.ledger.redeem(option, &mut self.store) {
            Ok(balance) => balance,
            Err(e) => {
                let err = StorefrontError::from(e);
                error::report(&err);
                return Err(err);
            }
        };
        // The debit is committed; the reward line must follow
        self.cart.add_reward(option);
        error::add_breadcrumb("loyalty", "Redeemed reward", Some(&[("reward", option.name)]));

        self.renderer.render_loyalty(balance);
        self.render_cart();
        Ok(balance)
    }

    /// Reward button on the offers panel; the outcome is shown as an alert.
    ///
    /// # Errors
    ///
    /// Same as [`Self::redeem`].
    pub fn redeem_offer(&mut self, option: &RedemptionOption) -> Result<u64> {
        let result = self.redeem(option);
        let text = match &result {
            Ok(_) => format!(
                "You have redeemed a {}! It has been added to your cart.",
                option.name
            ),
            Err(err) => err.user_message(),
        };
        self.renderer.alert(&text);
        result
    }

    // -------------------------------------------------------------------------
    // Newsletter
    // -------------------------------------------------------------------------

    /// Newsletter form submitted. Blank input is ignored; otherwise the
    /// confirmation or the validation message is alerted and returned.
    pub fn submit_newsletter(&mut self, email: &str) -> Option<String> {
        let text = match newsletter::confirmation(email) {
            Ok(text) => text,
            Err(err) => {
                tracing::debug!(error = %err, "Newsletter form rejected");
                err.user_message()?.to_owned()
            }
        };
        self.renderer.alert(&text);
        Some(text)
    }

    // -------------------------------------------------------------------------
    // Assistant
    // -------------------------------------------------------------------------

    /// Show or hide the chat widget. Returns whether it is now open.
    pub fn toggle_assistant(&mut self) -> bool {
        self.assistant_open = !self.assistant_open;
        self.renderer
            .set_visibility(ASSISTANT_WIDGET, self.assistant_open);
        self.assistant_open
    }

    /// Enter pressed in the chat input. Blank input is ignored; otherwise the
    /// line is echoed, interpreted and answered. Returns the bot reply.
    pub fn handle_chat(&mut self, text: &str) -> Option<String> {
        if text.trim().is_empty() {
            return None;
        }
        self.renderer.render_message(Sender::User, text);
        let reply = self.dispatch(assistant::interpret(text));
        self.renderer.render_message(Sender::Bot, &reply);
        Some(reply)
    }

    /// Perform an interpreted action and return the bot reply.
    pub fn dispatch(&mut self, action: Action) -> String {
        match action {
            Action::Help => HELP_TEXT.to_string(),
            Action::Navigate(section) => {
                self.renderer.scroll_to_section(section);
                assistant::navigating_message(section)
            }
            Action::Search(term) => {
                self.search(&term);
                format!("Searching for “{term}”.")
            }
            Action::AddItem(name) => {
                if let Some(item) = self.catalog.catalog().find_item(&name).cloned() {
                    match self.add_item(&item) {
                        Ok(()) => format!("{} added to cart.", item.name),
                        Err(err) => err.user_message(),
                    }
                } else {
                    let err = StorefrontError::ItemNotFound(name);
                    error::report(&err);
                    err.user_message()
                }
            }
            Action::Checkout => {
                if self.cart.is_empty() {
                    "Your cart is empty.".to_string()
                } else {
                    self.open_checkout();
                    "Opening checkout…".to_string()
                }
            }
            Action::ShowPoints => format!("You have {} points.", self.ledger.points()),
            Action::Redeem(name) => match RedemptionOption::find(&name) {
                Some(option) => match self.redeem(option) {
                    Ok(_) => format!(
                        "Redeemed {}! It has been added to your cart.",
                        option.name
                    ),
                    Err(err) => err.user_message(),
                },
                None => "Reward not found.".to_string(),
            },
            Action::NotUnderstood => FALLBACK_TEXT.to_string(),
        }
    }
}
