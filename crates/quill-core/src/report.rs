//! # Invoice Report
//!
//! Pure construction and rendering of the invoice report.
//!
//! ## Data Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                       Report Pipeline                               │
//! │                                                                     │
//! │  quill-db: four-way INNER JOIN for one invoice                     │
//! │  (customers × invoices × invoice_items × products)                 │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  Vec<ReportRow>  ← one row per line item, ordered by item_id       │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  ReportOutcome::from_rows(invoice_id, rows)  ← THIS MODULE         │
//! │       │                                                             │
//! │       ├── no rows → NotFound { invoice_id }                        │
//! │       │                                                             │
//! │       └── rows → Found(InvoiceReport)                              │
//! │                  ├── header: customer + date from the first row    │
//! │                  ├── lines: amount = price × quantity per row      │
//! │                  └── totals: Σ quantity, Σ amount                  │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  render() → human-readable text                                    │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! All rows of one invoice share the same customer and date by
//! construction (an invoice has exactly one customer), so the header is
//! taken from the first row.

use serde::{Deserialize, Serialize};

use crate::money::{line_amount, Usd};

// =============================================================================
// Report Row
// =============================================================================

/// One joined row of the report query: line-item data plus the invoice
/// header columns it was joined with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct ReportRow {
    pub customer_name: String,
    pub customer_email: String,
    pub invoice_date: String,
    pub product_name: String,
    /// Unit price at report time (products are immutable, so this is also
    /// the price at invoice time).
    pub unit_price: f64,
    pub quantity: i64,
}

// =============================================================================
// Report Line
// =============================================================================

/// One rendered line of the report, with its computed amount.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportLine {
    pub product_name: String,
    pub quantity: i64,
    pub unit_price: f64,
    /// unit_price × quantity, computed in floating point.
    pub amount: f64,
}

// =============================================================================
// Invoice Report
// =============================================================================

/// A fully computed invoice report: header, lines, and totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceReport {
    pub invoice_id: i64,
    pub customer_name: String,
    pub customer_email: String,
    pub date: String,
    pub lines: Vec<ReportLine>,
    /// Sum of all line quantities (an integer count of units).
    pub total_quantity: i64,
    /// Sum of all line amounts.
    pub total_amount: f64,
}

// =============================================================================
// Report Outcome
// =============================================================================

/// The result of asking for an invoice report.
///
/// "Not found" is an outcome, not an error: asking for a report on an id
/// that has no joined rows is a perfectly well-formed request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ReportOutcome {
    /// The invoice exists and has at least one line item.
    Found(InvoiceReport),

    /// No joined rows for this id. Either the invoice does not exist, or
    /// it has zero line items (the inner join cannot tell the two apart).
    NotFound { invoice_id: i64 },
}

impl ReportOutcome {
    /// Builds the outcome from the joined rows of one invoice.
    ///
    /// Row order is preserved; the storage layer orders by item id so the
    /// rendered report is deterministic.
    pub fn from_rows(invoice_id: i64, rows: Vec<ReportRow>) -> Self {
        let Some(first) = rows.first() else {
            return ReportOutcome::NotFound { invoice_id };
        };

        let customer_name = first.customer_name.clone();
        let customer_email = first.customer_email.clone();
        let date = first.invoice_date.clone();

        let mut total_quantity = 0i64;
        let mut total_amount = 0f64;

        let lines: Vec<ReportLine> = rows
            .into_iter()
            .map(|row| {
                let amount = line_amount(row.unit_price, row.quantity);
                total_quantity += row.quantity;
                total_amount += amount;

                ReportLine {
                    product_name: row.product_name,
                    quantity: row.quantity,
                    unit_price: row.unit_price,
                    amount,
                }
            })
            .collect();

        ReportOutcome::Found(InvoiceReport {
            invoice_id,
            customer_name,
            customer_email,
            date,
            lines,
            total_quantity,
            total_amount,
        })
    }

    /// True if the report found the invoice.
    pub fn is_found(&self) -> bool {
        matches!(self, ReportOutcome::Found(_))
    }

    /// Renders the outcome as human-readable text.
    ///
    /// ## Layout
    /// ```text
    /// Invoice ID: 1
    /// Customer: Ada Lovelace (ada@example.com)
    /// Date: 2026-08-31
    ///
    /// Invoice Items:
    /// Widget - Quantity: 2 - Price: $3.50 - Amount: $7.00
    ///
    /// Total Quantity:2
    ///
    /// Total Amount: $7.00
    /// ```
    pub fn render(&self) -> String {
        match self {
            ReportOutcome::NotFound { invoice_id } => {
                format!("No invoice found with ID {invoice_id}")
            }

            ReportOutcome::Found(report) => {
                let mut out = String::new();

                out.push_str(&format!("Invoice ID: {}\n", report.invoice_id));
                out.push_str(&format!(
                    "Customer: {} ({})\n",
                    report.customer_name, report.customer_email
                ));
                out.push_str(&format!("Date: {}\n", report.date));
                out.push_str("\nInvoice Items:\n");

                for line in &report.lines {
                    out.push_str(&format!(
                        "{} - Quantity: {} - Price: {} - Amount: {}\n",
                        line.product_name,
                        line.quantity,
                        Usd(line.unit_price),
                        Usd(line.amount)
                    ));
                }

                out.push_str(&format!("\nTotal Quantity:{}\n", report.total_quantity));
                out.push_str(&format!("\nTotal Amount: {}", Usd(report.total_amount)));

                out
            }
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn row(product: &str, price: f64, quantity: i64) -> ReportRow {
        ReportRow {
            customer_name: "Ada Lovelace".to_string(),
            customer_email: "ada@example.com".to_string(),
            invoice_date: "2026-08-31".to_string(),
            product_name: product.to_string(),
            unit_price: price,
            quantity,
        }
    }

    #[test]
    fn test_empty_rows_is_not_found() {
        let outcome = ReportOutcome::from_rows(42, vec![]);
        assert_eq!(outcome, ReportOutcome::NotFound { invoice_id: 42 });
        assert!(!outcome.is_found());
        assert_eq!(outcome.render(), "No invoice found with ID 42");
    }

    #[test]
    fn test_totals_sum_over_all_rows() {
        // [{A, qty 2}, {B, qty 3}] → quantity 5, amount 2·price(A) + 3·price(B)
        let outcome =
            ReportOutcome::from_rows(1, vec![row("Widget", 3.50, 2), row("Gadget", 10.00, 3)]);

        let ReportOutcome::Found(report) = outcome else {
            panic!("expected Found");
        };

        assert_eq!(report.total_quantity, 5);
        assert!((report.total_amount - 37.0).abs() < 1e-9);
        assert_eq!(report.lines.len(), 2);
        assert_eq!(report.lines[0].amount, 7.0);
        assert_eq!(report.lines[1].amount, 30.0);
    }

    #[test]
    fn test_totals_are_additive_not_per_product() {
        // The same product on two lines counts twice
        let outcome =
            ReportOutcome::from_rows(1, vec![row("Widget", 2.00, 1), row("Widget", 2.00, 4)]);

        let ReportOutcome::Found(report) = outcome else {
            panic!("expected Found");
        };

        assert_eq!(report.total_quantity, 5);
        assert!((report.total_amount - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_header_taken_from_first_row() {
        let outcome = ReportOutcome::from_rows(9, vec![row("Widget", 1.0, 1)]);

        let ReportOutcome::Found(report) = outcome else {
            panic!("expected Found");
        };

        assert_eq!(report.invoice_id, 9);
        assert_eq!(report.customer_name, "Ada Lovelace");
        assert_eq!(report.customer_email, "ada@example.com");
        assert_eq!(report.date, "2026-08-31");
    }

    #[test]
    fn test_render_layout() {
        let outcome =
            ReportOutcome::from_rows(1, vec![row("Widget", 3.50, 2), row("Gadget", 10.00, 3)]);

        let expected = "\
Invoice ID: 1
Customer: Ada Lovelace (ada@example.com)
Date: 2026-08-31

Invoice Items:
Widget - Quantity: 2 - Price: $3.50 - Amount: $7.00
Gadget - Quantity: 3 - Price: $10.00 - Amount: $30.00

Total Quantity:5

Total Amount: $37.00";

        assert_eq!(outcome.render(), expected);
    }

    #[test]
    fn test_row_order_is_preserved() {
        let outcome =
            ReportOutcome::from_rows(1, vec![row("Second", 1.0, 1), row("First", 1.0, 1)]);

        let ReportOutcome::Found(report) = outcome else {
            panic!("expected Found");
        };

        // from_rows does not sort; the storage layer's ORDER BY decides
        assert_eq!(report.lines[0].product_name, "Second");
        assert_eq!(report.lines[1].product_name, "First");
    }
}
