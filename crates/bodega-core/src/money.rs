//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                         │
//! │                                                                     │
//! │  In floating point:                                                 │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                       │
//! │                                                                     │
//! │  OUR SOLUTION: Integer Minor Units                                  │
//! │    Every amount is a whole number of the currency's smallest        │
//! │    unit. Addition, subtraction, and quantity multiplication are     │
//! │    exact; percentage math is widened to i128 before dividing.       │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use bodega_core::money::Money;
//!
//! // Create from minor units (the only constructor)
//! let price = Money::from_minor(10000);
//!
//! // Arithmetic operations
//! let doubled = price * 2;                       // 20000
//! let total = price + Money::from_minor(500);    // 10500
//!
//! // NEVER do this:
//! // let bad = Money::from_float(100.00); // NO SUCH METHOD EXISTS!
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit.
///
/// ## Design Decisions
/// - **i64 (signed)**: Discount adjustments may drive a line subtotal
///   negative; the type does not hide that
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Currency-agnostic**: The console config decides symbol and decimal
///   places; this type only knows the integer amount
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from minor units (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use bodega_core::money::Money;
    ///
    /// let price = Money::from_minor(500);
    /// assert_eq!(price.minor(), 500);
    /// ```
    #[inline]
    pub const fn from_minor(minor: i64) -> Self {
        Money(minor)
    }

    /// Returns the value in minor units.
    #[inline]
    pub const fn minor(&self) -> i64 {
        self.0
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Returns the absolute value.
    #[inline]
    pub const fn abs(&self) -> Self {
        Money(self.0.abs())
    }

    /// Multiplies money by a quantity.
    ///
    /// ## Example
    /// ```rust
    /// use bodega_core::money::Money;
    ///
    /// let unit_price = Money::from_minor(200);
    /// let line_total = unit_price.multiply_quantity(3);
    /// assert_eq!(line_total.minor(), 600);
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * qty)
    }

    /// Returns the given percentage of this amount, truncated toward zero.
    ///
    /// ## Implementation
    /// Integer math widened to i128 to prevent overflow on large amounts:
    /// `amount * pct / 100`. Truncating division matches the cart's discount
    /// arithmetic, which is defined on whole minor units.
    ///
    /// ## Example
    /// ```rust
    /// use bodega_core::money::Money;
    ///
    /// let total = Money::from_minor(1500);
    /// assert_eq!(total.percentage(10).minor(), 150);
    /// ```
    pub fn percentage(&self, pct: u32) -> Money {
        let amount = (self.0 as i128 * pct as i128) / 100;
        Money::from_minor(amount as i64)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows the raw minor-unit amount.
///
/// ## Note
/// This is for debugging and logs. User-facing currency formatting (symbol,
/// decimal places) is the console's responsibility.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

/// Addition of two Money values.
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

/// Addition assignment (+=).
impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

/// Subtraction of two Money values.
impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

/// Subtraction assignment (-=).
impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Multiplication by i64 (for quantity calculations).
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

/// Summation of Money iterators (for totals).
impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_minor() {
        let money = Money::from_minor(10000);
        assert_eq!(money.minor(), 10000);
    }

    #[test]
    fn test_display_is_raw_amount() {
        assert_eq!(format!("{}", Money::from_minor(500)), "500");
        assert_eq!(format!("{}", Money::from_minor(-150)), "-150");
        assert_eq!(format!("{}", Money::from_minor(0)), "0");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_minor(1000);
        let b = Money::from_minor(500);

        assert_eq!((a + b).minor(), 1500);
        assert_eq!((a - b).minor(), 500);
        let result: Money = a * 3;
        assert_eq!(result.minor(), 3000);

        let mut acc = Money::zero();
        acc += a;
        acc -= b;
        assert_eq!(acc.minor(), 500);
    }

    #[test]
    fn test_sum() {
        let total: Money = [100, 200, 300].map(Money::from_minor).into_iter().sum();
        assert_eq!(total.minor(), 600);
    }

    #[test]
    fn test_percentage_exact() {
        // 10% of 1500 = 150, exactly
        assert_eq!(Money::from_minor(1500).percentage(10).minor(), 150);
        // 0% and 100% edges
        assert_eq!(Money::from_minor(1500).percentage(0).minor(), 0);
        assert_eq!(Money::from_minor(1500).percentage(100).minor(), 1500);
    }

    #[test]
    fn test_percentage_truncates() {
        // 10% of 105 = 10.5 → truncated to 10
        assert_eq!(Money::from_minor(105).percentage(10).minor(), 10);
    }

    #[test]
    fn test_percentage_large_amount_does_not_overflow() {
        let large = Money::from_minor(i64::MAX / 2);
        assert_eq!(large.percentage(100), large);
    }

    #[test]
    fn test_zero_and_checks() {
        let zero = Money::zero();
        assert!(zero.is_zero());
        assert!(!zero.is_positive());
        assert!(!zero.is_negative());

        let positive = Money::from_minor(100);
        assert!(positive.is_positive());

        let negative = Money::from_minor(-100);
        assert!(negative.is_negative());
        assert_eq!(negative.abs().minor(), 100);
    }

    #[test]
    fn test_multiply_quantity() {
        let unit_price = Money::from_minor(200);
        let line_total = unit_price.multiply_quantity(3);
        assert_eq!(line_total.minor(), 600);
    }
}
