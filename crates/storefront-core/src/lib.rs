//! # storefront-core: Pure Business Logic for the Storefront
//!
//! This crate is the **heart** of the storefront. It holds the catalog,
//! pricing and checkout rules with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Storefront Architecture                          │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    storefront-cli                               │   │
//! │  │    Menu ──► List products ──► Order entry ──► Checkout          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ function calls                         │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ storefront-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │ promotion │  │  product  │  │   store   │  │  catalog  │  │   │
//! │  │   │ pricing   │  │  stock    │  │  checkout │  │  config   │  │   │
//! │  │   │ rules     │  │  variants │  │  queries  │  │  → Store  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • SYNCHRONOUS              │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Money type with integer arithmetic, discount rates
//! - [`error`] - Domain error types
//! - [`validation`] - Argument validation
//! - [`promotion`] - Pricing strategies
//! - [`product`] - Products and their variants
//! - [`store`] - Store, order lines, checkout
//! - [`catalog`] - Serializable catalog description
//!
//! ## Example Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use storefront_core::{Money, OrderLine, Product, Promotion, Store};
//!
//! let mut widget = Product::new("Widget", Money::from_dollars(10), 5)?;
//! widget.set_promotion(Arc::new(Promotion::second_half_price("Second Half price!")));
//! let id = widget.id();
//!
//! let mut store = Store::new(vec![widget]);
//! let total = store.checkout(&[OrderLine::new(id, 2)])?;
//!
//! assert_eq!(total, Money::from_dollars(15));
//! assert_eq!(store.total_quantity(), 3);
//! # Ok::<(), storefront_core::CoreError>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod error;
pub mod money;
pub mod product;
pub mod promotion;
pub mod store;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use catalog::{CatalogConfig, ProductSpec, PromotionAttachment, PromotionSpec};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::{DiscountRate, Money};
pub use product::{Product, ProductId, ProductKind};
pub use promotion::{Promotion, PromotionKind};
pub use store::{OrderLine, Store};

// =============================================================================
// Constants
// =============================================================================

/// Store name used when none is configured.
pub const DEFAULT_STORE_NAME: &str = "Best Buy";

/// Per-order cap for capped products when a catalog entry omits `maximum`.
pub const DEFAULT_CAPPED_MAXIMUM: i64 = 1;
