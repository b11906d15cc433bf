//! # Products
//!
//! A catalog entry with a price, a stock level, an activation flag and an
//! optional promotion.
//!
//! ## Variants
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  ProductKind        Stock             purchase(requested)               │
//! │  ───────────        ─────             ───────────────────               │
//! │  Standard           tracked           sells `requested` units           │
//! │  Unlimited          always 0          sells `requested`, no stock check │
//! │  Capped { max }     tracked           sells exactly `max`, ignores      │
//! │                                       `requested`, no promotion         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Activation
//! Stock reaching zero deactivates the product. Restocking does not
//! reactivate it; `activate()` has to be called explicitly.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::promotion::Promotion;
use crate::validation::{
    validate_maximum, validate_price, validate_product_name, validate_purchase_quantity,
    validate_stock_quantity,
};

// =============================================================================
// Product Id
// =============================================================================

/// Identity of a product inside a store.
///
/// Names are display data and may repeat; the id is what `Store` looks
/// products up by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProductId(Uuid);

impl ProductId {
    /// Generate a new unique ID.
    pub fn generate() -> Self {
        ProductId(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// Product Kind
// =============================================================================

/// The behavioral shape of a product.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductKind {
    /// Finite tracked stock.
    Standard,
    /// Not stocked (licenses, services). Backing quantity stays at zero.
    Unlimited,
    /// Finite tracked stock, and every purchase transacts exactly `maximum`.
    Capped { maximum: i64 },
}

impl ProductKind {
    /// Whether purchases check and decrement the stock level.
    #[inline]
    pub const fn tracks_stock(&self) -> bool {
        !matches!(self, ProductKind::Unlimited)
    }
}

// =============================================================================
// Product
// =============================================================================

/// A product available for sale.
#[derive(Debug, Clone)]
pub struct Product {
    id: ProductId,
    name: String,
    price: Money,
    quantity: i64,
    active: bool,
    promotion: Option<Arc<Promotion>>,
    kind: ProductKind,
}

impl Product {
    /// Creates an active standard product.
    ///
    /// ## Example
    /// ```rust
    /// use storefront_core::money::Money;
    /// use storefront_core::product::Product;
    ///
    /// let widget = Product::new("Widget", Money::from_dollars(10), 5).unwrap();
    /// assert_eq!(widget.quantity(), 5);
    /// assert!(widget.is_active());
    ///
    /// assert!(Product::new("", Money::from_dollars(10), 5).is_err());
    /// assert!(Product::new("Widget", Money::from_cents(-1), 5).is_err());
    /// assert!(Product::new("Widget", Money::from_dollars(10), -1).is_err());
    /// ```
    pub fn new(name: impl Into<String>, price: Money, quantity: i64) -> CoreResult<Self> {
        Product::with_active(name, price, quantity, true)
    }

    /// Creates a standard product with an explicit activation flag.
    pub fn with_active(
        name: impl Into<String>,
        price: Money,
        quantity: i64,
        active: bool,
    ) -> CoreResult<Self> {
        Product::build(name.into(), price, quantity, active, ProductKind::Standard)
    }

    /// Creates an active product that is never out of stock.
    pub fn unlimited(name: impl Into<String>, price: Money) -> CoreResult<Self> {
        Product::unlimited_with_active(name, price, true)
    }

    pub fn unlimited_with_active(
        name: impl Into<String>,
        price: Money,
        active: bool,
    ) -> CoreResult<Self> {
        Product::build(name.into(), price, 0, active, ProductKind::Unlimited)
    }

    /// Creates an active product sold exactly `maximum` units at a time.
    pub fn capped(
        name: impl Into<String>,
        price: Money,
        quantity: i64,
        maximum: i64,
    ) -> CoreResult<Self> {
        Product::capped_with_active(name, price, quantity, maximum, true)
    }

    pub fn capped_with_active(
        name: impl Into<String>,
        price: Money,
        quantity: i64,
        maximum: i64,
        active: bool,
    ) -> CoreResult<Self> {
        validate_maximum(maximum)?;
        Product::build(
            name.into(),
            price,
            quantity,
            active,
            ProductKind::Capped { maximum },
        )
    }

    fn build(
        name: String,
        price: Money,
        quantity: i64,
        active: bool,
        kind: ProductKind,
    ) -> CoreResult<Self> {
        validate_product_name(&name)?;
        validate_price(price)?;
        validate_stock_quantity(quantity)?;

        Ok(Product {
            id: ProductId::generate(),
            name,
            price,
            quantity,
            active,
            promotion: None,
            kind,
        })
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    #[inline]
    pub fn id(&self) -> ProductId {
        self.id
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn price(&self) -> Money {
        self.price
    }

    /// Current stock level. Always 0 for unlimited products.
    #[inline]
    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    #[inline]
    pub fn kind(&self) -> ProductKind {
        self.kind
    }

    /// Per-order cap, for capped products.
    pub fn maximum(&self) -> Option<i64> {
        match self.kind {
            ProductKind::Capped { maximum } => Some(maximum),
            _ => None,
        }
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn promotion(&self) -> Option<&Promotion> {
        self.promotion.as_deref()
    }

    // -------------------------------------------------------------------------
    // Mutation
    // -------------------------------------------------------------------------

    /// Sets the stock level.
    ///
    /// ## Rules
    /// - Negative quantities are rejected
    /// - Zero deactivates the product
    /// - A positive quantity leaves the activation flag alone
    /// - Unlimited products have no stock to set
    pub fn set_quantity(&mut self, quantity: i64) -> CoreResult<()> {
        if !self.kind.tracks_stock() {
            return Err(CoreError::StockNotTracked {
                product: self.name.clone(),
            });
        }
        validate_stock_quantity(quantity)?;

        self.quantity = quantity;
        if self.quantity == 0 {
            debug!(product = %self.name, "Stock exhausted, deactivating");
            self.active = false;
        }
        Ok(())
    }

    /// Changes the unit price. Negative prices are rejected.
    pub fn set_price(&mut self, price: Money) -> CoreResult<()> {
        validate_price(price)?;
        self.price = price;
        Ok(())
    }

    pub fn activate(&mut self) {
        self.active = true;
    }

    pub fn deactivate(&mut self) {
        self.active = false;
    }

    /// Attaches a shared promotion, replacing any previous one.
    pub fn set_promotion(&mut self, promotion: Arc<Promotion>) {
        self.promotion = Some(promotion);
    }

    pub fn clear_promotion(&mut self) {
        self.promotion = None;
    }

    // -------------------------------------------------------------------------
    // Purchase
    // -------------------------------------------------------------------------

    /// Prices a purchase and takes the units out of stock.
    ///
    /// ## Flow
    /// ```text
    /// purchase(requested)
    ///      │
    ///      ├── Standard:  requested > 0? requested <= stock? → promo or price × requested
    ///      ├── Unlimited: requested > 0?                     → promo or price × requested
    ///      └── Capped:    maximum <= stock?                  → price × maximum
    ///      │
    ///      ▼
    /// stock -= transacted  (tracked kinds only, zero deactivates)
    /// ```
    ///
    /// On failure nothing is changed. A total too large for `Money` fails
    /// with `CoreError::AmountOverflow`.
    pub fn purchase(&mut self, requested: i64) -> CoreResult<Money> {
        let (transacted, total) = self.price_purchase(requested)?;

        if self.kind.tracks_stock() {
            self.set_quantity(self.quantity - transacted)?;
        }

        debug!(
            product = %self.name,
            requested,
            transacted,
            total = %total,
            "Purchased"
        );
        Ok(total)
    }

    /// What [`Product::purchase`] would charge, without touching stock.
    ///
    /// Fails exactly when `purchase` would.
    pub fn quote(&self, requested: i64) -> CoreResult<Money> {
        self.price_purchase(requested).map(|(_, total)| total)
    }

    /// Returns `(units transacted, line total)`.
    fn price_purchase(&self, requested: i64) -> CoreResult<(i64, Money)> {
        match self.kind {
            ProductKind::Standard => {
                validate_purchase_quantity(requested)?;
                self.ensure_stock(requested)?;
                Ok((requested, self.line_total(requested)?))
            }
            ProductKind::Unlimited => {
                validate_purchase_quantity(requested)?;
                Ok((requested, self.line_total(requested)?))
            }
            ProductKind::Capped { maximum } => {
                self.ensure_stock(maximum)?;
                Ok((maximum, self.units_total(maximum)?))
            }
        }
    }

    fn ensure_stock(&self, needed: i64) -> CoreResult<()> {
        if needed > self.quantity {
            return Err(CoreError::InsufficientStock {
                product: self.name.clone(),
                available: self.quantity,
                requested: needed,
            });
        }
        Ok(())
    }

    fn line_total(&self, quantity: i64) -> CoreResult<Money> {
        match &self.promotion {
            Some(promotion) => promotion.apply(self.price, quantity),
            None => self.units_total(quantity),
        }
    }

    fn units_total(&self, quantity: i64) -> CoreResult<Money> {
        self.price
            .checked_multiply_quantity(quantity)
            .ok_or_else(|| CoreError::AmountOverflow {
                context: format!("{} x {}", self.name, quantity),
            })
    }

    // -------------------------------------------------------------------------
    // Display
    // -------------------------------------------------------------------------

    /// Renders the product the way the store menu lists it.
    ///
    /// ## Example
    /// ```rust
    /// use storefront_core::money::Money;
    /// use storefront_core::product::Product;
    ///
    /// let pixel = Product::new("Google Pixel 7", Money::from_dollars(500), 250).unwrap();
    /// assert_eq!(pixel.describe(), "Google Pixel 7, Price: $500.00, Quantity: 250");
    /// ```
    pub fn describe(&self) -> String {
        let mut text = format!("{}, Price: {}", self.name, self.price);
        match self.kind {
            ProductKind::Standard => {
                text.push_str(&format!(", Quantity: {}", self.quantity));
            }
            ProductKind::Unlimited => {}
            ProductKind::Capped { maximum } => {
                text.push_str(&format!(
                    ", Quantity: {}, Maximum: {} per order",
                    self.quantity, maximum
                ));
            }
        }
        if let Some(promotion) = &self.promotion {
            text.push_str(&format!(", Promotion: {}", promotion));
        }
        text
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}
