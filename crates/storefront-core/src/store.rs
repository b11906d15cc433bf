//! # Store
//!
//! An ordered collection of products plus the checkout routine.
//!
//! ## Checkout Modes
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  lines: [(Widget, 3), (Gadget, 99), (Cable, 1)]                        │
//! │                                                                         │
//! │  checkout()          Widget ✓ committed                                │
//! │  (fail-fast)         Gadget ✗ InsufficientStock → returned             │
//! │                      Cable  – never attempted                          │
//! │                      Widget stays decremented                          │
//! │                                                                         │
//! │  checkout_atomic()   Runs the same lines on a scratch copy.            │
//! │  (all-or-nothing)    Gadget ✗ → scratch dropped, store unchanged       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The store has no internal locking. Every mutating call takes `&mut self`.

use std::ops::Add;

use tracing::{debug, info, warn};

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::product::{Product, ProductId};

/// One line of an order: which product, and how many units were asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderLine {
    pub product: ProductId,
    pub quantity: i64,
}

impl OrderLine {
    pub fn new(product: ProductId, quantity: i64) -> Self {
        OrderLine { product, quantity }
    }
}

/// A retail store owning its catalog.
///
/// ## Invariants
/// - Insertion order is display order
/// - Duplicate names are allowed; products are identified by `ProductId`
#[derive(Debug, Clone, Default)]
pub struct Store {
    products: Vec<Product>,
}

impl Store {
    /// Creates a store from an initial product list.
    pub fn new(products: Vec<Product>) -> Self {
        Store { products }
    }

    pub fn empty() -> Self {
        Store::default()
    }

    // -------------------------------------------------------------------------
    // Membership
    // -------------------------------------------------------------------------

    /// Appends a product and returns its id.
    pub fn add_product(&mut self, product: Product) -> ProductId {
        let id = product.id();
        debug!(product = %product.name(), %id, "Adding product");
        self.products.push(product);
        id
    }

    /// Removes a product by id and hands it back.
    pub fn remove_product(&mut self, id: ProductId) -> CoreResult<Product> {
        let index = self
            .products
            .iter()
            .position(|p| p.id() == id)
            .ok_or_else(|| CoreError::ProductNotFound(id.to_string()))?;

        let product = self.products.remove(index);
        debug!(product = %product.name(), %id, "Removed product");
        Ok(product)
    }

    pub fn product(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id() == id)
    }

    pub fn product_mut(&mut self, id: ProductId) -> Option<&mut Product> {
        self.products.iter_mut().find(|p| p.id() == id)
    }

    /// All products, active or not, in insertion order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Whether an *active* product with this name is listed.
    pub fn contains(&self, name: &str) -> bool {
        self.products
            .iter()
            .any(|p| p.is_active() && p.name() == name)
    }

    // -------------------------------------------------------------------------
    // Queries
    // -------------------------------------------------------------------------

    /// Sum of stock over every product, including inactive ones.
    pub fn total_quantity(&self) -> i64 {
        self.products.iter().map(Product::quantity).sum()
    }

    /// Active products in insertion order.
    pub fn list_active_products(&self) -> Vec<&Product> {
        self.products.iter().filter(|p| p.is_active()).collect()
    }

    // -------------------------------------------------------------------------
    // Checkout
    // -------------------------------------------------------------------------

    /// Purchases every line in order and returns the summed total.
    ///
    /// Stops at the first failing line and returns its error. Lines before
    /// it stay committed.
    pub fn checkout(&mut self, lines: &[OrderLine]) -> CoreResult<Money> {
        let total = purchase_lines(&mut self.products, lines)?;
        info!(lines = lines.len(), total = %total, "Order completed");
        Ok(total)
    }

    /// Like [`Store::checkout`], but either every line is committed or none is.
    pub fn checkout_atomic(&mut self, lines: &[OrderLine]) -> CoreResult<Money> {
        let mut scratch = self.products.clone();
        let total = purchase_lines(&mut scratch, lines)?;
        self.products = scratch;
        info!(lines = lines.len(), total = %total, "Order completed atomically");
        Ok(total)
    }
}

fn purchase_lines(products: &mut [Product], lines: &[OrderLine]) -> CoreResult<Money> {
    let mut total = Money::zero();

    for (index, line) in lines.iter().enumerate() {
        let Some(product) = products.iter_mut().find(|p| p.id() == line.product) else {
            let err = CoreError::ProductNotFound(line.product.to_string());
            warn!(line = index, error = %err, "Order line failed");
            return Err(err);
        };

        // Price and check the running total before any stock moves
        let priced = product.quote(line.quantity).and_then(|line_total| {
            total
                .checked_add(line_total)
                .ok_or_else(|| CoreError::AmountOverflow {
                    context: format!("order total after line {}", index + 1),
                })
        });

        match priced.and_then(|next| product.purchase(line.quantity).map(|_| next)) {
            Ok(next) => total = next,
            Err(e) => {
                warn!(line = index, product = %product.name(), error = %e, "Order line failed");
                return Err(e);
            }
        }
    }

    Ok(total)
}

/// Merges two stores: `self`'s products followed by `other`'s.
///
/// Product ids are assumed unique across both stores. If the same product
/// (or a clone of it) is in both, lookups, removal and checkout only see
/// the first copy.
impl Add for Store {
    type Output = Store;

    fn add(mut self, other: Store) -> Store {
        self.products.extend(other.products);
        self
    }
}
