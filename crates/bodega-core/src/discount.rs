//! # Discount Policies
//!
//! Pluggable pricing adjustment applied to the cart at checkout.
//!
//! ## Policy Set
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                          Discount                                   │
//! │                                                                     │
//! │  None ───────────────── subtotals stay price × quantity             │
//! │                                                                     │
//! │  Percentage(p) ──────── amount = (Σ price × quantity) × p / 100     │
//! │                         subtracted from EVERY line's subtotal       │
//! │                         (aggregate, not apportioned)                │
//! │                                                                     │
//! │  BuyOneGetOneFree ───── per line with quantity >= 2:                │
//! │                         subtract price × (quantity / 2)             │
//! │                         (every second unit free, odd one pays)      │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Purity
//! Application never mutates the cart: [`Discount::adjusted_subtotals`]
//! returns a fresh vector of per-line subtotals, parallel to the input
//! lines. The cart stores the policy and prices exactly once, at checkout,
//! so selecting a policy twice never compounds.

use serde::{Deserialize, Serialize};

use crate::cart::LineItem;
use crate::error::{CoreError, CoreResult};
use crate::money::Money;

// =============================================================================
// Percentage
// =============================================================================

/// A discount percentage, guaranteed to be within 0-100.
///
/// The inner value is private; [`Percentage::new`] is the only way to build
/// one, so an out-of-range rate cannot reach the pricing math.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Percentage(u32);

impl Percentage {
    /// Creates a percentage, rejecting values above 100.
    pub fn new(pct: u32) -> CoreResult<Self> {
        if pct > 100 {
            return Err(CoreError::InvalidDiscount { percentage: pct });
        }
        Ok(Percentage(pct))
    }

    /// Returns the percentage as an integer in 0-100.
    #[inline]
    pub const fn value(&self) -> u32 {
        self.0
    }
}

// =============================================================================
// Discount
// =============================================================================

/// The active pricing policy for a cart. Exactly one is in effect at a time;
/// a fresh cart starts with [`Discount::None`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Discount {
    /// No adjustment.
    #[default]
    None,

    /// Percentage off, computed over the whole cart.
    Percentage(Percentage),

    /// Every second unit of a line is free.
    BuyOneGetOneFree,
}

impl Discount {
    /// Creates a percentage discount, rejecting percentages above 100.
    ///
    /// ## Example
    /// ```rust
    /// use bodega_core::Discount;
    ///
    /// assert!(Discount::percentage(10).is_ok());
    /// assert!(Discount::percentage(101).is_err());
    /// ```
    pub fn percentage(pct: u32) -> CoreResult<Self> {
        Ok(Discount::Percentage(Percentage::new(pct)?))
    }

    /// Computes the discounted subtotal for each line.
    ///
    /// Returns one `Money` per input line, in the same order. The lines
    /// themselves are never modified.
    ///
    /// ## Percentage Semantics
    /// The aggregate discount amount is subtracted from every line, not
    /// apportioned across them. A line cheaper than the aggregate amount
    /// goes negative; `Money` is signed and the arithmetic is preserved
    /// as-is rather than clamped.
    pub fn adjusted_subtotals(&self, items: &[LineItem]) -> Vec<Money> {
        match self {
            Discount::None => items.iter().map(LineItem::base_subtotal).collect(),

            Discount::Percentage(pct) => {
                let total: Money = items.iter().map(LineItem::base_subtotal).sum();
                let amount = total.percentage(pct.value());
                items
                    .iter()
                    .map(|item| item.base_subtotal() - amount)
                    .collect()
            }

            Discount::BuyOneGetOneFree => items
                .iter()
                .map(|item| {
                    let base = item.base_subtotal();
                    if item.quantity() >= 2 {
                        base - item.unit_price().multiply_quantity(item.quantity() / 2)
                    } else {
                        base
                    }
                })
                .collect(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
