//! # Catalog Configuration
//!
//! A plain-data description of a store: products, promotions, and which
//! promotion is attached to which product. The application loads one of
//! these (or uses [`CatalogConfig::demo`]) and passes it to
//! [`CatalogConfig::build`].
//!
//! ## JSON Shape
//! ```json
//! {
//!   "products": [
//!     { "kind": "standard",  "name": "Google Pixel 7", "price_cents": 50000, "quantity": 250 },
//!     { "kind": "unlimited", "name": "Windows License", "price_cents": 12500 },
//!     { "kind": "capped",    "name": "Shipping", "price_cents": 1000, "quantity": 250, "maximum": 1 }
//!   ],
//!   "promotions": [
//!     { "kind": "percent_off", "name": "30% off!", "percent": 30 }
//!   ],
//!   "attachments": [ { "product": 1, "promotion": 0 } ]
//! }
//! ```

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::{CoreResult, ValidationError};
use crate::money::{DiscountRate, Money};
use crate::product::Product;
use crate::promotion::Promotion;
use crate::store::Store;
use crate::DEFAULT_CAPPED_MAXIMUM;

fn default_active() -> bool {
    true
}

fn default_maximum() -> i64 {
    DEFAULT_CAPPED_MAXIMUM
}

/// One product entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ProductSpec {
    Standard {
        name: String,
        price_cents: i64,
        quantity: i64,
        #[serde(default = "default_active")]
        active: bool,
    },
    Unlimited {
        name: String,
        price_cents: i64,
        #[serde(default = "default_active")]
        active: bool,
    },
    Capped {
        name: String,
        price_cents: i64,
        quantity: i64,
        #[serde(default = "default_maximum")]
        maximum: i64,
        #[serde(default = "default_active")]
        active: bool,
    },
}

impl ProductSpec {
    fn build(&self) -> CoreResult<Product> {
        match self {
            ProductSpec::Standard {
                name,
                price_cents,
                quantity,
                active,
            } => Product::with_active(
                name.as_str(),
                Money::from_cents(*price_cents),
                *quantity,
                *active,
            ),
            ProductSpec::Unlimited {
                name,
                price_cents,
                active,
            } => Product::unlimited_with_active(
                name.as_str(),
                Money::from_cents(*price_cents),
                *active,
            ),
            ProductSpec::Capped {
                name,
                price_cents,
                quantity,
                maximum,
                active,
            } => Product::capped_with_active(
                name.as_str(),
                Money::from_cents(*price_cents),
                *quantity,
                *maximum,
                *active,
            ),
        }
    }
}

/// One promotion entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PromotionSpec {
    SecondHalfPrice { name: String },
    ThirdOneFree { name: String },
    /// `percent` is a percentage, 0 to 100.
    PercentOff { name: String, percent: f64 },
}

impl PromotionSpec {
    fn build(&self) -> CoreResult<Promotion> {
        match self {
            PromotionSpec::SecondHalfPrice { name } => Ok(Promotion::second_half_price(name.as_str())),
            PromotionSpec::ThirdOneFree { name } => Ok(Promotion::third_one_free(name.as_str())),
            PromotionSpec::PercentOff { name, percent } => {
                if !(0.0..=100.0).contains(percent) {
                    return Err(ValidationError::OutOfRange {
                        field: "percent".to_string(),
                        min: 0,
                        max: 100,
                    }
                    .into());
                }
                Promotion::percent_off(name.as_str(), DiscountRate::from_percentage(*percent))
            }
        }
    }
}

/// Links `products[product]` to `promotions[promotion]` (zero-based).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromotionAttachment {
    pub product: usize,
    pub promotion: usize,
}

/// Everything needed to open a store.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CatalogConfig {
    #[serde(default)]
    pub products: Vec<ProductSpec>,
    #[serde(default)]
    pub promotions: Vec<PromotionSpec>,
    #[serde(default)]
    pub attachments: Vec<PromotionAttachment>,
}

impl CatalogConfig {
    /// Parses the JSON representation.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Builds the store.
    ///
    /// ## Steps
    /// 1. Construct every product (validation errors are returned as-is)
    /// 2. Construct every promotion once, shared through `Arc`
    /// 3. Apply attachments (out-of-range indices are rejected)
    pub fn build(&self) -> CoreResult<Store> {
        let mut products = self
            .products
            .iter()
            .map(ProductSpec::build)
            .collect::<CoreResult<Vec<_>>>()?;

        let promotions = self
            .promotions
            .iter()
            .map(|spec| spec.build().map(Arc::new))
            .collect::<CoreResult<Vec<_>>>()?;

        for attachment in &self.attachments {
            let promotion = promotions
                .get(attachment.promotion)
                .ok_or_else(|| out_of_range("attachment promotion", promotions.len()))?;
            let product_count = products.len();
            let product = products
                .get_mut(attachment.product)
                .ok_or_else(|| out_of_range("attachment product", product_count))?;
            product.set_promotion(Arc::clone(promotion));
        }

        Ok(Store::new(products))
    }

    /// The demo catalog the CLI opens when no catalog file is given.
    pub fn demo() -> Self {
        CatalogConfig {
            products: vec![
                ProductSpec::Standard {
                    name: "MacBook Air M2".to_string(),
                    price_cents: 145_000,
                    quantity: 100,
                    active: true,
                },
                ProductSpec::Standard {
                    name: "Bose QuietComfort Earbuds".to_string(),
                    price_cents: 25_000,
                    quantity: 500,
                    active: true,
                },
                ProductSpec::Standard {
                    name: "Google Pixel 7".to_string(),
                    price_cents: 50_000,
                    quantity: 250,
                    active: true,
                },
                ProductSpec::Unlimited {
                    name: "Windows License".to_string(),
                    price_cents: 12_500,
                    active: true,
                },
                ProductSpec::Capped {
                    name: "Shipping".to_string(),
                    price_cents: 1_000,
                    quantity: 250,
                    maximum: 1,
                    active: true,
                },
            ],
            promotions: vec![
                PromotionSpec::SecondHalfPrice {
                    name: "Second Half price!".to_string(),
                },
                PromotionSpec::ThirdOneFree {
                    name: "Third One Free!".to_string(),
                },
                PromotionSpec::PercentOff {
                    name: "30% off!".to_string(),
                    percent: 30.0,
                },
            ],
            attachments: vec![
                PromotionAttachment {
                    product: 0,
                    promotion: 0,
                },
                PromotionAttachment {
                    product: 1,
                    promotion: 1,
                },
                PromotionAttachment {
                    product: 3,
                    promotion: 2,
                },
            ],
        }
    }
}

fn out_of_range(field: &str, len: usize) -> ValidationError {
    ValidationError::OutOfRange {
        field: field.to_string(),
        min: 0,
        max: len as i64 - 1,
    }
}
