//! # Input Parsing
//!
//! Turns raw terminal lines into typed values. Nothing here touches the
//! store; the session decides what to do with the result.
//!
//! ## Order Entry
//! ```text
//! product ""   + amount ""   ──► OrderEntry::Finish
//! product "2"  + amount "3"  ──► OrderEntry::Line { index: 1, quantity: 3 }
//! product "x"  + amount "3"  ──► ValidationError::InvalidFormat
//! product "9"  (5 listed)    ──► ValidationError::OutOfRange
//! ```

use storefront_core::ValidationError;

/// A main menu selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    ListProducts,
    ShowTotal,
    MakeOrder,
    Quit,
}

impl MenuChoice {
    /// Menu entries in display order.
    pub const ALL: [MenuChoice; 4] = [
        MenuChoice::ListProducts,
        MenuChoice::ShowTotal,
        MenuChoice::MakeOrder,
        MenuChoice::Quit,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            MenuChoice::ListProducts => "List all products in store",
            MenuChoice::ShowTotal => "Show total amount in store",
            MenuChoice::MakeOrder => "Make an order",
            MenuChoice::Quit => "Quit",
        }
    }
}

/// One step of order entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderEntry {
    /// Both prompts were left empty.
    Finish,
    /// `index` is zero-based into the listing shown to the user.
    Line { index: usize, quantity: i64 },
}

fn parse_integer(text: &str, field: &str) -> Result<i64, ValidationError> {
    text.trim()
        .parse::<i64>()
        .map_err(|e| ValidationError::InvalidFormat {
            field: field.to_string(),
            reason: e.to_string(),
        })
}

/// Parses a menu number, 1 to 4.
pub fn parse_menu_choice(text: &str) -> Result<MenuChoice, ValidationError> {
    let number = parse_integer(text, "menu choice")?;
    usize::try_from(number)
        .ok()
        .and_then(|n| n.checked_sub(1))
        .and_then(|i| MenuChoice::ALL.get(i).copied())
        .ok_or_else(|| ValidationError::OutOfRange {
            field: "menu choice".to_string(),
            min: 1,
            max: MenuChoice::ALL.len() as i64,
        })
}

/// Parses a 1-based product number against a listing of `listed` entries.
/// Returns the zero-based index.
pub fn parse_product_number(text: &str, listed: usize) -> Result<usize, ValidationError> {
    let number = parse_integer(text, "product")?;
    usize::try_from(number)
        .ok()
        .filter(|n| (1..=listed).contains(n))
        .map(|n| n - 1)
        .ok_or_else(|| ValidationError::OutOfRange {
            field: "product".to_string(),
            min: 1,
            max: listed as i64,
        })
}

/// Parses an amount. Sign is not checked here; the store validates it.
pub fn parse_quantity(text: &str) -> Result<i64, ValidationError> {
    parse_integer(text, "amount")
}

/// Parses the answers to the two order-entry prompts.
pub fn parse_order_entry(
    product: &str,
    amount: &str,
    listed: usize,
) -> Result<OrderEntry, ValidationError> {
    if product.trim().is_empty() && amount.trim().is_empty() {
        return Ok(OrderEntry::Finish);
    }

    let index = parse_product_number(product, listed)?;
    let quantity = parse_quantity(amount)?;
    Ok(OrderEntry::Line { index, quantity })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_choices() {
        assert_eq!(parse_menu_choice("1"), Ok(MenuChoice::ListProducts));
        assert_eq!(parse_menu_choice(" 2 "), Ok(MenuChoice::ShowTotal));
        assert_eq!(parse_menu_choice("3"), Ok(MenuChoice::MakeOrder));
        assert_eq!(parse_menu_choice("4"), Ok(MenuChoice::Quit));
    }

    #[test]
    fn test_menu_choice_errors() {
        assert!(matches!(
            parse_menu_choice("five"),
            Err(ValidationError::InvalidFormat { .. })
        ));
        assert!(matches!(
            parse_menu_choice("0"),
            Err(ValidationError::OutOfRange { min: 1, max: 4, .. })
        ));
        assert!(parse_menu_choice("5").is_err());
        assert!(parse_menu_choice("-1").is_err());
        assert!(parse_menu_choice("").is_err());
    }

    #[test]
    fn test_product_number_bounds() {
        assert_eq!(parse_product_number("1", 3), Ok(0));
        assert_eq!(parse_product_number("3", 3), Ok(2));
        assert!(matches!(
            parse_product_number("4", 3),
            Err(ValidationError::OutOfRange { max: 3, .. })
        ));
        assert!(parse_product_number("0", 3).is_err());
        assert!(parse_product_number("1", 0).is_err());
    }

    #[test]
    fn test_quantity_accepts_any_integer() {
        assert_eq!(parse_quantity("12"), Ok(12));
        assert_eq!(parse_quantity("-2"), Ok(-2));
        assert!(matches!(
            parse_quantity("2.5"),
            Err(ValidationError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn test_order_entry() {
        assert_eq!(parse_order_entry("", "", 5), Ok(OrderEntry::Finish));
        assert_eq!(parse_order_entry("  ", "\t", 0), Ok(OrderEntry::Finish));
        assert_eq!(
            parse_order_entry("2", "3", 5),
            Ok(OrderEntry::Line {
                index: 1,
                quantity: 3
            })
        );
        // Only one field empty is an error, not a finish
        assert!(parse_order_entry("2", "", 5).is_err());
        assert!(parse_order_entry("", "3", 5).is_err());
    }

    #[test]
    fn test_menu_labels_in_order() {
        let labels: Vec<_> = MenuChoice::ALL.iter().map(MenuChoice::label).collect();
        assert_eq!(labels[0], "List all products in store");
        assert_eq!(labels[3], "Quit");
    }
}
