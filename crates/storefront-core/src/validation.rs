//! # Validation Module
//!
//! Input validation for product and promotion arguments.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: CLI input parsing                                            │
//! │  └── Text → integer (non-numeric entries rejected)                    │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── Constructors (name, price, stock, cap)                            │
//! │  └── Mutation boundaries (set_quantity, purchase)                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::ValidationError;
use crate::money::{DiscountRate, Money};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validates a product name.
///
/// ## Rules
/// - Must not be empty (whitespace counts as content)
///
/// ## Example
/// ```rust
/// use storefront_core::validation::validate_product_name;
///
/// assert!(validate_product_name("MacBook Air M2").is_ok());
/// assert!(validate_product_name("").is_err());
/// assert!(validate_product_name("   ").is_ok());
/// ```
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    Ok(())
}

/// Validates a unit price.
///
/// ## Rules
/// - Must be non-negative (zero is allowed for free items)
pub fn validate_price(price: Money) -> ValidationResult<()> {
    if price.is_negative() {
        return Err(ValidationError::Negative {
            field: "price".to_string(),
        });
    }

    Ok(())
}

/// Validates a stock level (constructor argument or `set_quantity`).
///
/// ## Rules
/// - Must be non-negative; zero means "sold out"
pub fn validate_stock_quantity(quantity: i64) -> ValidationResult<()> {
    if quantity < 0 {
        return Err(ValidationError::Negative {
            field: "quantity".to_string(),
        });
    }

    Ok(())
}

/// Validates a requested purchase quantity.
///
/// ## Rules
/// - Must be positive (> 0)
///
/// ## User Workflow
/// ```text
/// Order line: Widget × 0
///      │
///      ▼
/// validate_purchase_quantity(0) ← THIS FUNCTION
///      │
///      └── qty <= 0? → Error: "quantity must be greater than zero"
/// ```
pub fn validate_purchase_quantity(quantity: i64) -> ValidationResult<()> {
    if quantity <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    Ok(())
}

/// Validates the per-order cap of a capped product.
pub fn validate_maximum(maximum: i64) -> ValidationResult<()> {
    if maximum <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "maximum".to_string(),
        });
    }

    Ok(())
}

/// Validates a discount rate.
///
/// ## Rules
/// - Must be between 0 and 10000 bps (0% to 100%)
pub fn validate_discount_rate(rate: DiscountRate) -> ValidationResult<()> {
    if rate.bps() > DiscountRate::MAX_BPS {
        return Err(ValidationError::OutOfRange {
            field: "percent".to_string(),
            min: 0,
            max: 100,
        });
    }

    Ok(())
}
