//! # Promotions
//!
//! Stateless pricing strategies that turn a unit price and a quantity into a
//! line total.
//!
//! ## Strategies
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  PromotionKind          Formula (unit price p, quantity q)             │
//! │  ─────────────          ──────────────────────────────────             │
//! │  SecondHalfPrice        p × (q mod 2) + p × 1.5 × (q div 2)            │
//! │  ThirdOneFree           p × (q mod 3) + p × 2 × (q div 3)              │
//! │  PercentOff(r)          p × (1 − r)           (q is not used)          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A promotion never looks at or changes product state. Products share one
//! promotion through an `Arc<Promotion>`.

use std::fmt;

use crate::error::{CoreError, CoreResult};
use crate::money::{DiscountRate, Money};
use crate::validation::validate_discount_rate;

/// The pricing rule behind a promotion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromotionKind {
    /// Every second unit costs half price.
    SecondHalfPrice,
    /// Every third unit is free.
    ThirdOneFree,
    /// A flat percentage off the unit price.
    ///
    /// The result is a single discounted unit price; the quantity is not
    /// multiplied in.
    PercentOff(DiscountRate),
}

impl PromotionKind {
    /// Computes the discounted total for `quantity` units at `unit_price`.
    ///
    /// Callers guarantee `quantity > 0` and a non-negative price. Fails
    /// only when the total does not fit in `Money`.
    pub fn apply(&self, unit_price: Money, quantity: i64) -> CoreResult<Money> {
        self.total(unit_price, quantity)
            .ok_or_else(|| CoreError::AmountOverflow {
                context: format!("{} x {}", unit_price, quantity),
            })
    }

    fn total(&self, unit_price: Money, quantity: i64) -> Option<Money> {
        match self {
            PromotionKind::SecondHalfPrice => {
                // p × 1.5 × pairs == p × pairs + round(p × pairs / 2)
                let pairs = quantity / 2;
                let single = quantity % 2;
                let full = unit_price.checked_multiply_quantity(pairs + single)?;
                let half = unit_price.multiply_ratio(pairs, 2)?;
                full.checked_add(half)
            }
            PromotionKind::ThirdOneFree => {
                let groups = quantity / 3;
                let remainder = quantity % 3;
                // groups * 2 + remainder <= quantity, no overflow
                unit_price.checked_multiply_quantity(groups * 2 + remainder)
            }
            PromotionKind::PercentOff(rate) => Some(unit_price.apply_discount(*rate)),
        }
    }
}

/// A named discount policy that can be attached to products.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Promotion {
    name: String,
    kind: PromotionKind,
}

impl Promotion {
    /// Creates a promotion from a display name and a pricing rule.
    pub fn new(name: impl Into<String>, kind: PromotionKind) -> Self {
        Promotion {
            name: name.into(),
            kind,
        }
    }

    /// "Buy one, get the second at half price."
    pub fn second_half_price(name: impl Into<String>) -> Self {
        Promotion::new(name, PromotionKind::SecondHalfPrice)
    }

    /// "Buy two, get the third free."
    pub fn third_one_free(name: impl Into<String>) -> Self {
        Promotion::new(name, PromotionKind::ThirdOneFree)
    }

    /// A percentage discount. Fails if the rate is above 100%.
    ///
    /// ## Example
    /// ```rust
    /// use storefront_core::money::{DiscountRate, Money};
    /// use storefront_core::promotion::Promotion;
    ///
    /// let promo = Promotion::percent_off("30% off!", DiscountRate::from_percentage(30.0)).unwrap();
    /// assert_eq!(promo.apply(Money::from_dollars(100), 5), Ok(Money::from_dollars(70)));
    /// ```
    pub fn percent_off(name: impl Into<String>, rate: DiscountRate) -> CoreResult<Self> {
        validate_discount_rate(rate)?;
        Ok(Promotion::new(name, PromotionKind::PercentOff(rate)))
    }

    /// Display name shown next to the product.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> PromotionKind {
        self.kind
    }

    /// Computes the discounted total for `quantity` units at `unit_price`.
    #[inline]
    pub fn apply(&self, unit_price: Money, quantity: i64) -> CoreResult<Money> {
        self.kind.apply(unit_price, quantity)
    }
}

impl fmt::Display for Promotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
