//! # Validation Module
//!
//! Input validation utilities for Quill.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                       Validation Layers                             │
//! │                                                                     │
//! │  Layer 1: Caller (form / seed binary)                              │
//! │  ├── Required-field checks (customer name, email, product name)    │
//! │  └── Price entry gate: is_numeric + non-negative                   │
//! │           │                                                         │
//! │           ▼                                                         │
//! │  Layer 2: Writers (quill-db)                                       │
//! │  └── Quantity must be positive before the invoice transaction      │
//! │           │                                                         │
//! │           ▼                                                         │
//! │  Layer 3: Database (SQLite)                                        │
//! │  ├── NOT NULL constraints                                          │
//! │  └── Foreign key constraints                                       │
//! │                                                                     │
//! │  Defense in depth: multiple layers catch different errors          │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use quill_core::validation::{is_numeric, validate_price_input};
//!
//! assert!(is_numeric("10.99"));
//!
//! // Gate product-price entry before calling the writer
//! let price = validate_price_input("10.99").unwrap();
//! assert_eq!(price, 10.99);
//! ```

use crate::error::{ValidationError, ValidationResult};

// =============================================================================
// Numeric Validator
// =============================================================================

/// Returns whether a string parses as a floating-point number.
///
/// Pure predicate with no side effects. It does NOT enforce sign; callers
/// that need non-negativity use [`validate_price_input`].
///
/// ## Example
/// ```rust
/// use quill_core::validation::is_numeric;
///
/// assert!(is_numeric("3.14"));
/// assert!(is_numeric("-2"));
/// assert!(!is_numeric("ten"));
/// assert!(!is_numeric(""));
/// ```
pub fn is_numeric(value: &str) -> bool {
    value.trim().parse::<f64>().is_ok()
}

// =============================================================================
// String Validators
// =============================================================================

/// Validates that a required text field is present and non-empty.
///
/// ## Example
/// ```rust
/// use quill_core::validation::validate_required;
///
/// assert!(validate_required("name", "Ada").is_ok());
/// assert!(validate_required("name", "   ").is_err());
/// ```
pub fn validate_required(field: &str, value: &str) -> ValidationResult<()> {
    if value.trim().is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates raw product-price input and returns the parsed price.
///
/// ## Rules
/// - Must parse as a floating-point number
/// - Must be non-negative (zero is allowed: free items)
///
/// This is the entry gate the product writer relies on; the writer itself
/// does not re-validate.
///
/// ## Example
/// ```rust
/// use quill_core::validation::validate_price_input;
///
/// assert_eq!(validate_price_input("10.99").unwrap(), 10.99);
/// assert!(validate_price_input("-1").is_err());
/// assert!(validate_price_input("free").is_err());
/// ```
pub fn validate_price_input(raw: &str) -> ValidationResult<f64> {
    let price = raw
        .trim()
        .parse::<f64>()
        .map_err(|_| ValidationError::NotNumeric {
            field: "price".to_string(),
            value: raw.to_string(),
        })?;

    validate_price(price)?;
    Ok(price)
}

/// Validates an already-parsed price.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - NaN is rejected (it is neither negative nor a usable price)
pub fn validate_price(price: f64) -> ValidationResult<()> {
    if price.is_nan() || price < 0.0 {
        return Err(ValidationError::MustBeNonNegative {
            field: "price".to_string(),
        });
    }

    Ok(())
}

/// Validates a line-item quantity.
///
/// ## Rules
/// - Must be positive (> 0)
///
/// Checked by the invoice writer before it opens the insert transaction,
/// so a bad quantity fails the whole invoice rather than persisting a
/// nonsensical line.
pub fn validate_quantity(quantity: i64) -> ValidationResult<()> {
    if quantity <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_numeric() {
        assert!(is_numeric("0"));
        assert!(is_numeric("10.99"));
        assert!(is_numeric("-2.5"));
        assert!(is_numeric(" 42 "));
        assert!(is_numeric("1e3"));

        assert!(!is_numeric(""));
        assert!(!is_numeric("ten"));
        assert!(!is_numeric("10,99"));
        assert!(!is_numeric("$5"));
    }

    #[test]
    fn test_validate_required() {
        assert!(validate_required("name", "Ada").is_ok());
        assert!(validate_required("name", "").is_err());
        assert!(validate_required("email", "   ").is_err());
    }

    #[test]
    fn test_validate_price_input() {
        assert_eq!(validate_price_input("10.99").unwrap(), 10.99);
        assert_eq!(validate_price_input("0").unwrap(), 0.0);
        assert_eq!(validate_price_input(" 2.50 ").unwrap(), 2.5);

        assert!(validate_price_input("-0.01").is_err());
        assert!(validate_price_input("abc").is_err());
        assert!(validate_price_input("").is_err());
    }

    #[test]
    fn test_validate_price_rejects_nan() {
        assert!(validate_price(f64::NAN).is_err());
        assert!(validate_price(0.0).is_ok());
        assert!(validate_price(19.99).is_ok());
        assert!(validate_price(-1.0).is_err());
    }

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity(1).is_ok());
        assert!(validate_quantity(999).is_ok());

        assert!(validate_quantity(0).is_err());
        assert!(validate_quantity(-3).is_err());
    }
}
