//! # Money Module
//!
//! Money formatting and line-amount math for invoice reports.
//!
//! ## Why f64 Here?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  NUMERIC SEMANTICS                                                  │
//! │                                                                     │
//! │  Product prices are stored as REAL and every report amount is      │
//! │  defined as                                                         │
//! │                                                                     │
//! │      amount = unit_price × quantity      (floating point)          │
//! │      total  = Σ amount over all lines    (floating point)          │
//! │                                                                     │
//! │  Switching to integer cents would change observable totals on      │
//! │  existing data, so the float semantics are kept and only the       │
//! │  RENDERING is fixed to two decimals.                               │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use quill_core::money::{line_amount, Usd};
//!
//! let amount = line_amount(3.50, 2);
//! assert_eq!(format!("{}", Usd(amount)), "$7.00");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Usd Display Wrapper
// =============================================================================

/// A monetary amount rendered as USD with exactly two decimal places.
///
/// Thin display wrapper over f64; the inner value is the amount in major
/// units (dollars). Negative amounts render as `$-0.50`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Usd(pub f64);

impl Usd {
    /// Returns the raw amount.
    #[inline]
    pub const fn amount(&self) -> f64 {
        self.0
    }
}

impl fmt::Display for Usd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${:.2}", self.0)
    }
}

// =============================================================================
// Line Amount
// =============================================================================

/// Computes the amount of one invoice line: unit price × quantity.
#[inline]
pub fn line_amount(unit_price: f64, quantity: i64) -> f64 {
    unit_price * quantity as f64
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_two_decimals() {
        assert_eq!(format!("{}", Usd(10.99)), "$10.99");
        assert_eq!(format!("{}", Usd(5.0)), "$5.00");
        assert_eq!(format!("{}", Usd(0.0)), "$0.00");
        assert_eq!(format!("{}", Usd(2.5)), "$2.50");
    }

    #[test]
    fn test_display_rounds_half_away() {
        // {:.2} rounds to nearest representable two-decimal rendering
        assert_eq!(format!("{}", Usd(1.005_000_1)), "$1.01");
        assert_eq!(format!("{}", Usd(1.004)), "$1.00");
    }

    #[test]
    fn test_display_negative() {
        assert_eq!(format!("{}", Usd(-0.5)), "$-0.50");
    }

    #[test]
    fn test_line_amount() {
        assert_eq!(line_amount(3.50, 2), 7.0);
        assert_eq!(line_amount(0.0, 100), 0.0);
        assert_eq!(line_amount(19.99, 0), 0.0);
    }
}
