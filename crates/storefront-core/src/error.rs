//! # Error Types
//!
//! Everything the core can refuse to do, as typed values.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  ValidationError   an argument is malformed (empty name, negative       │
//! │        │           price, amount <= 0, percent > 100)                   │
//! │        ▼  #[from]                                                       │
//! │  CoreError         a store operation failed (unknown product, not       │
//! │        │           enough stock, stock not tracked, total overflow)     │
//! │        ▼  From                                                          │
//! │  CliError          storefront-cli, adds catalog and terminal failures   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The core never prints. Errors go back to the caller with `?`.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Failures of store and product operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// No product with this id is registered in the store.
    #[error("No product with id {0} in this store")]
    ProductNotFound(String),

    /// A purchase needs more units than are in stock. For capped products
    /// `requested` is the cap, not what the caller typed.
    #[error("Insufficient stock for {product}: available {available}, requested {requested}")]
    InsufficientStock {
        product: String,
        available: i64,
        requested: i64,
    },

    /// A line total or order total is larger than `Money` can hold.
    #[error("Amount too large: {context}")]
    AmountOverflow { context: String },

    /// The product does not track stock, so its quantity cannot be set.
    #[error("{product} does not track stock")]
    StockNotTracked { product: String },

    #[error("Invalid argument: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// A single bad argument, named by `field`.
///
/// Checked at construction and again at every setter.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Empty text.
    #[error("{field} must not be empty")]
    Required { field: String },

    #[error("{field} must be greater than zero")]
    MustBePositive { field: String },

    #[error("{field} cannot be negative")]
    Negative { field: String },

    #[error("{field} must be from {min} to {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Text that does not parse, e.g. "2.5" where a whole number is needed.
    #[error("{field} is not a whole number: {reason}")]
    InvalidFormat { field: String, reason: String },
}

/// Result of a core operation.
pub type CoreResult<T> = Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stock_messages_name_the_product() {
        let short = CoreError::InsufficientStock {
            product: "Google Pixel 7".to_string(),
            available: 2,
            requested: 3,
        };
        assert_eq!(
            short.to_string(),
            "Insufficient stock for Google Pixel 7: available 2, requested 3"
        );

        let untracked = CoreError::StockNotTracked {
            product: "Windows License".to_string(),
        };
        assert_eq!(untracked.to_string(), "Windows License does not track stock");
    }

    #[test]
    fn test_overflow_message() {
        let err = CoreError::AmountOverflow {
            context: "Windows License x 92233720368547758".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Amount too large: Windows License x 92233720368547758"
        );
    }

    #[test]
    fn test_wrapped_validation_message() {
        let err: CoreError = ValidationError::MustBePositive {
            field: "quantity".to_string(),
        }
        .into();
        assert!(matches!(err, CoreError::Validation(_)));
        assert_eq!(err.to_string(), "Invalid argument: quantity must be greater than zero");
    }

    #[test]
    fn test_range_and_format_messages() {
        let range = ValidationError::OutOfRange {
            field: "menu choice".to_string(),
            min: 1,
            max: 4,
        };
        assert_eq!(range.to_string(), "menu choice must be from 1 to 4");

        let format = ValidationError::InvalidFormat {
            field: "amount".to_string(),
            reason: "invalid digit found in string".to_string(),
        };
        assert_eq!(
            format.to_string(),
            "amount is not a whole number: invalid digit found in string"
        );
    }
}
