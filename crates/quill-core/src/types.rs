//! # Domain Types
//!
//! Core domain types used throughout Quill.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                          Domain Types                               │
//! │                                                                     │
//! │  ┌────────────────┐   ┌────────────────┐   ┌────────────────┐      │
//! │  │    Customer    │   │    Product     │   │    Invoice     │      │
//! │  │  ────────────  │   │  ────────────  │   │  ────────────  │      │
//! │  │  customer_id   │   │  product_id    │   │  invoice_id    │      │
//! │  │  name          │   │  name          │   │  customer_id   │      │
//! │  │  email         │   │  price (f64)   │   │  date (TEXT)   │      │
//! │  └────────────────┘   └────────────────┘   └───────┬────────┘      │
//! │                                                    │               │
//! │  ┌────────────────┐   ┌────────────────┐           │               │
//! │  │  InvoiceItem   │◄──│    LineItem    │ ──────────┘               │
//! │  │  ────────────  │   │  ────────────  │  (input descriptor,      │
//! │  │  item_id       │   │  product_id    │   no identity yet)       │
//! │  │  invoice_id    │   │  quantity      │                           │
//! │  │  product_id    │   └────────────────┘                           │
//! │  │  quantity      │                                                │
//! │  └────────────────┘                                                │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity
//! Every persisted entity carries an integer id assigned by SQLite at
//! insert time (`INTEGER PRIMARY KEY AUTOINCREMENT`). Ids are never chosen
//! by callers. All four entities are insert-only: no update or delete
//! operation exists anywhere in the system.

use serde::{Deserialize, Serialize};

// =============================================================================
// Customer
// =============================================================================

/// A billable customer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Customer {
    /// Storage-assigned identity.
    pub customer_id: i64,

    /// Customer display name. Duplicates are allowed.
    pub name: String,

    /// Contact email. Stored as given, no format validation, duplicates
    /// allowed.
    pub email: String,
}

// =============================================================================
// Product
// =============================================================================

/// A product that can appear on invoice line items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Product {
    /// Storage-assigned identity.
    pub product_id: i64,

    /// Display name shown on the invoice report.
    pub name: String,

    /// Unit price. Non-negative by contract; callers gate entry through
    /// [`crate::validation::validate_price_input`]. Kept as f64 because
    /// report amounts are computed in floating point.
    pub price: f64,
}

// =============================================================================
// Invoice
// =============================================================================

/// An invoice issued to exactly one customer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Invoice {
    /// Storage-assigned identity.
    pub invoice_id: i64,

    /// The customer this invoice bills. Must resolve to an existing
    /// customer row (enforced by the foreign key).
    pub customer_id: i64,

    /// Issue date as caller-supplied text. No format is imposed.
    pub date: String,
}

// =============================================================================
// Invoice Item
// =============================================================================

/// A persisted line item: one (product, quantity) pairing on an invoice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct InvoiceItem {
    /// Storage-assigned identity.
    pub item_id: i64,

    /// Parent invoice.
    pub invoice_id: i64,

    /// Referenced product (foreign key).
    pub product_id: i64,

    /// Units of the product on this line. Positive by contract.
    pub quantity: i64,
}

// =============================================================================
// Line Item (input descriptor)
// =============================================================================

/// Input descriptor for one line item of an invoice being created.
///
/// This is what callers hand to `InvoiceRepository::create`: a structured
/// {product reference, quantity} pair. The storage layer assigns the item's
/// identity and parent invoice id during the insert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// Referenced product.
    pub product_id: i64,

    /// Units ordered. Validated as positive at write time.
    pub quantity: i64,
}

impl LineItem {
    /// Creates a new line item descriptor.
    #[inline]
    pub const fn new(product_id: i64, quantity: i64) -> Self {
        LineItem {
            product_id,
            quantity,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_item_new() {
        let item = LineItem::new(7, 3);
        assert_eq!(item.product_id, 7);
        assert_eq!(item.quantity, 3);
    }

    #[test]
    fn test_types_round_trip_through_json() {
        let customer = Customer {
            customer_id: 1,
            name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
        };

        let json = serde_json::to_string(&customer).unwrap();
        let back: Customer = serde_json::from_str(&json).unwrap();
        assert_eq!(back, customer);
    }
}
