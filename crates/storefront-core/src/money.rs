//! # Money Module
//!
//! `Money` holds prices and order totals as a whole number of cents.
//! `DiscountRate` holds a percent-off promotion in basis points.
//!
//! ## Rounding
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Promotions produce fractions of a cent:                                │
//! │                                                                         │
//! │    second-half-price on $0.99 × 2   = 99 × 3 / 2 = 148.5 cents          │
//! │    30% off $0.05                    = 5 − 1.5    =   3.5 cents          │
//! │                                                                         │
//! │  Every such result is rounded half-up, once, at the point where the     │
//! │  fraction appears:                                                      │
//! │                                                                         │
//! │    (amount × numerator + denominator / 2) / denominator                 │
//! │                                                                         │
//! │    148.5 → 149        1.5 (discount) → 2  ⇒  5 − 2 = 3                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use storefront_core::money::Money;
//!
//! let macbook = Money::from_dollars(1450);
//! let shipping = Money::from_cents(1000);
//!
//! let two = macbook.checked_multiply_quantity(2);
//! let total = two.and_then(|m| m.checked_add(shipping));
//! assert_eq!(total.map(|m| m.to_string()).as_deref(), Some("$2910.00"));
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign};

// =============================================================================
// Money Type
// =============================================================================

/// An amount of money in cents.
///
/// Signed so that intermediate arithmetic never has to special-case
/// underflow. Negative prices are rejected by validation, not by the type.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub struct Money(i64);

impl Money {
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Whole dollars, e.g. catalog prices written as `1450`.
    ///
    /// ```rust
    /// use storefront_core::money::Money;
    ///
    /// assert_eq!(Money::from_dollars(1450).cents(), 145_000);
    /// ```
    #[inline]
    pub const fn from_dollars(dollars: i64) -> Self {
        Money(dollars * 100)
    }

    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Whole-dollar part, truncated toward zero.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Cents past the whole dollar, 0 to 99 regardless of sign.
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Unit price times a number of units. `None` on overflow.
    #[inline]
    pub const fn checked_multiply_quantity(&self, qty: i64) -> Option<Money> {
        match self.0.checked_mul(qty) {
            Some(cents) => Some(Money(cents)),
            None => None,
        }
    }

    /// `None` on overflow.
    #[inline]
    pub const fn checked_add(&self, other: Money) -> Option<Money> {
        match self.0.checked_add(other.0) {
            Some(cents) => Some(Money(cents)),
            None => None,
        }
    }

    /// `self × numerator / denominator`, rounded half-up to the cent.
    ///
    /// Computed in i128, so `numerator` may be large without overflowing
    /// before the division. `None` if the result does not fit, or if
    /// `denominator` is not positive.
    ///
    /// ```rust
    /// use storefront_core::money::Money;
    ///
    /// // Two $0.99 units at second-half-price: 148.5 cents
    /// assert_eq!(Money::from_cents(99).multiply_ratio(3, 2).map(|m| m.cents()), Some(149));
    /// assert_eq!(Money::from_cents(i64::MAX).multiply_ratio(3, 2), None);
    /// ```
    pub fn multiply_ratio(&self, numerator: i64, denominator: i64) -> Option<Money> {
        if denominator <= 0 {
            return None;
        }
        let scaled = i128::from(self.0) * i128::from(numerator);
        let half = i128::from(denominator) / 2;
        i64::try_from((scaled + half) / i128::from(denominator))
            .ok()
            .map(Money)
    }

    /// The price left after taking `rate` off.
    ///
    /// The amount taken off is rounded half-up, then subtracted. Rates
    /// above 100% are treated as 100%, so the result never exceeds `self`
    /// in magnitude.
    ///
    /// ```rust
    /// use storefront_core::money::{DiscountRate, Money};
    ///
    /// let license = Money::from_dollars(125);
    /// let sale = license.apply_discount(DiscountRate::from_bps(3000));
    /// assert_eq!(sale.to_string(), "$87.50");
    /// ```
    pub fn apply_discount(&self, rate: DiscountRate) -> Money {
        let bps = i128::from(rate.bps().min(DiscountRate::MAX_BPS));
        let max = i128::from(DiscountRate::MAX_BPS);
        let off = (i128::from(self.0) * bps + max / 2) / max;
        // |off| <= |self|, so the difference fits
        Money((i128::from(self.0) - off) as i64)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Renders `$D.CC`, with a leading minus for negative amounts.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_negative() {
            f.write_str("-")?;
        }
        write!(f, "${}.{:02}", self.dollars().abs(), self.cents_part())
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

// =============================================================================
// Discount Rate
// =============================================================================

/// A percent-off rate in basis points: 1 bp = 0.01%, so 3000 bps is 30%.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct DiscountRate(u32);

impl DiscountRate {
    /// 100% off.
    pub const MAX_BPS: u32 = 10_000;

    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        DiscountRate(bps)
    }

    /// `30.0` becomes 3000 bps. Negative inputs saturate to zero.
    pub fn from_percentage(pct: f64) -> Self {
        DiscountRate((pct * 100.0).round().max(0.0) as u32)
    }

    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Display only; pricing uses [`DiscountRate::bps`].
    #[inline]
    pub fn percentage(&self) -> f64 {
        self.0 as f64 / 100.0
    }
}

impl fmt::Display for DiscountRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.percentage())
    }
}
