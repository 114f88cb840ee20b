//! Loyalty ledger.
//!
//! One persisted, non-negative point balance. Points are earned at checkout
//! (10 per dollar, rounded) and spent on [`RedemptionOption`]s. Every
//! mutation is written through to the [`KeyValueStore`] before it becomes
//! visible; a failed write leaves the in-memory balance untouched.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use thiserror::Error;
use tiffin_core::{Price, RedemptionOption};

use crate::storage::{KeyValueStore, LOYALTY_POINTS_KEY, StorageError};

/// Points awarded per currency unit spent.
pub const POINTS_PER_DOLLAR: u32 = 10;

/// Loyalty errors.
#[derive(Debug, Clone, Error)]
pub enum LoyaltyError {
    #[error("insufficient points: reward costs {cost}, balance is {available}")]
    InsufficientPoints { cost: u64, available: u64 },
    #[error("failed to persist balance: {0}")]
    Storage(#[from] StorageError),
}

/// Points awarded for a purchase: `round(amount * 10)`, half away from zero.
/// Amounts too large to score saturate at `u64::MAX`.
#[must_use]
pub fn points_for(amount: Price) -> u64 {
    amount
        .amount()
        .checked_mul(Decimal::from(POINTS_PER_DOLLAR))
        .and_then(|points| {
            points
                .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
                .to_u64()
        })
        .unwrap_or(u64::MAX)
}

/// The persisted point balance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoyaltyLedger {
    points: u64,
}

impl LoyaltyLedger {
    /// Read the balance from the store.
    ///
    /// A missing or unparsable value (including a negative one) yields zero.
    pub fn load(store: &impl KeyValueStore) -> Self {
        let points = match store.get(LOYALTY_POINTS_KEY) {
            Ok(Some(raw)) => raw.trim().parse::<u64>().unwrap_or_else(|e| {
                tracing::warn!(value = %raw, error = %e, "Unparsable loyalty balance, resetting to 0");
                0
            }),
            Ok(None) => 0,
            Err(e) => {
                tracing::error!(error = %e, "Failed to read loyalty balance");
                0
            }
        };
        Self { points }
    }

    /// Current balance.
    #[must_use]
    pub const fn points(&self) -> u64 {
        self.points
    }

    /// Credit points for a purchase and persist the new balance.
    ///
    /// Returns the new balance; [`points_for`] gives the amount credited.
    ///
    /// # Errors
    ///
    /// Returns [`LoyaltyError::Storage`] if the balance could not be
    /// persisted; the balance is then unchanged.
    pub fn earn(
        &mut self,
        amount_spent: Price,
        store: &mut impl KeyValueStore,
    ) -> Result<u64, LoyaltyError> {
        let earned = points_for(amount_spent);
        let next = self.points.saturating_add(earned);
        self.commit(next, store)?;
        tracing::info!(earned, balance = next, "Loyalty points earned");
        Ok(next)
    }

    /// Debit a reward's cost and persist the new balance.
    ///
    /// Returns the new balance.
    ///
    /// # Errors
    ///
    /// - [`LoyaltyError::InsufficientPoints`] if the balance is below the
    ///   cost; nothing is written.
    /// - [`LoyaltyError::Storage`] if the write failed; the balance is
    ///   unchanged.
    pub fn redeem(
        &mut self,
        option: &RedemptionOption,
        store: &mut impl KeyValueStore,
    ) -> Result<u64, LoyaltyError> {
        let next = self
            .points
            .checked_sub(option.cost)
            .ok_or(LoyaltyError::InsufficientPoints {
                cost: option.cost,
                available: self.points,
            })?;
        self.commit(next, store)?;
        tracing::info!(reward = option.name, balance = next, "Reward redeemed");
        Ok(next)
    }

    fn commit(&mut self, next: u64, store: &mut impl KeyValueStore) -> Result<(), LoyaltyError> {
        store.set(LOYALTY_POINTS_KEY, &next.to_string())?;
        self.points = next;
        Ok(())
    }
}
