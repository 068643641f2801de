//! # Invoice Repository
//!
//! Database operations for invoices and their line items, plus the report
//! query.
//!
//! ## Invoice Creation
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                  Transactional Invoice Creation                     │
//! │                                                                     │
//! │  create(customer_id, date, items)                                  │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  validate every quantity (> 0)  ← fails before any write           │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  BEGIN TRANSACTION                                                 │
//! │  ├── INSERT invoices (customer_id, date)                           │
//! │  ├── invoice_id = last_insert_rowid()                              │
//! │  ├── INSERT invoice_items (invoice_id, product_id, quantity) × N   │
//! │  └── COMMIT                                                        │
//! │       │                                                             │
//! │       └── any failure → ROLLBACK, no partial invoice remains       │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The invoice and its items commit as a single atomic unit: a foreign key
//! violation on the third item rolls back the invoice row and the first
//! two items.

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::DbResult;
use quill_core::validation::validate_quantity;
use quill_core::{Invoice, InvoiceItem, LineItem, ReportOutcome, ReportRow};

/// The four-way join producing one row per line item of one invoice.
///
/// Column aliases line up with `ReportRow` field names for FromRow
/// mapping. Ordered by item_id so report output is deterministic.
const REPORT_QUERY: &str = r#"
    SELECT customers.name       AS customer_name,
           customers.email      AS customer_email,
           invoices.date        AS invoice_date,
           products.name        AS product_name,
           products.price       AS unit_price,
           invoice_items.quantity AS quantity
    FROM invoices
    JOIN customers ON invoices.customer_id = customers.customer_id
    JOIN invoice_items ON invoices.invoice_id = invoice_items.invoice_id
    JOIN products ON invoice_items.product_id = products.product_id
    WHERE invoices.invoice_id = ?1
    ORDER BY invoice_items.item_id
"#;

/// Repository for invoice database operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = InvoiceRepository::new(pool);
///
/// let invoice = repo
///     .create(customer_id, "2026-08-31", &[LineItem::new(product_id, 2)])
///     .await?;
///
/// println!("{}", repo.report(invoice.invoice_id).await?.render());
/// ```
#[derive(Debug, Clone)]
pub struct InvoiceRepository {
    pool: SqlitePool,
}

impl InvoiceRepository {
    /// Creates a new InvoiceRepository.
    pub fn new(pool: SqlitePool) -> Self {
        InvoiceRepository { pool }
    }

    /// Creates an invoice with its line items as one atomic unit.
    ///
    /// ## Arguments
    /// * `customer_id` - Must resolve to an existing customer (foreign key)
    /// * `date` - Issue date text, stored as given
    /// * `items` - Line item descriptors; may be empty (an invoice with
    ///   zero items is not rejected)
    ///
    /// ## Guarantees
    /// - Quantities are validated (> 0) before any write is attempted
    /// - The inserted items are exactly the descriptors supplied, all
    ///   bound to the new invoice id
    /// - Any failure mid-sequence rolls back the entire invoice
    ///
    /// ## Returns
    /// The created invoice with its assigned id.
    pub async fn create(
        &self,
        customer_id: i64,
        date: &str,
        items: &[LineItem],
    ) -> DbResult<Invoice> {
        for item in items {
            validate_quantity(item.quantity)?;
        }

        debug!(customer_id, item_count = items.len(), "Creating invoice");

        let mut tx = self.pool.begin().await?;

        let result = sqlx::query("INSERT INTO invoices (customer_id, date) VALUES (?1, ?2)")
            .bind(customer_id)
            .bind(date)
            .execute(&mut *tx)
            .await?;

        let invoice_id = result.last_insert_rowid();

        for item in items {
            sqlx::query(
                "INSERT INTO invoice_items (invoice_id, product_id, quantity) VALUES (?1, ?2, ?3)",
            )
            .bind(invoice_id)
            .bind(item.product_id)
            .bind(item.quantity)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        debug!(invoice_id, "Invoice committed");

        Ok(Invoice {
            invoice_id,
            customer_id,
            date: date.to_string(),
        })
    }

    /// Gets an invoice by id.
    pub async fn get_by_id(&self, invoice_id: i64) -> DbResult<Option<Invoice>> {
        let invoice = sqlx::query_as::<_, Invoice>(
            r#"
            SELECT invoice_id, customer_id, date
            FROM invoices
            WHERE invoice_id = ?1
            "#,
        )
        .bind(invoice_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(invoice)
    }

    /// Gets all line items for an invoice, in item-id order.
    pub async fn get_items(&self, invoice_id: i64) -> DbResult<Vec<InvoiceItem>> {
        let items = sqlx::query_as::<_, InvoiceItem>(
            r#"
            SELECT item_id, invoice_id, product_id, quantity
            FROM invoice_items
            WHERE invoice_id = ?1
            ORDER BY item_id
            "#,
        )
        .bind(invoice_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(items)
    }

    /// Counts invoice rows.
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM invoices")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    /// Generates the report for one invoice.
    ///
    /// Runs the four-way inner join and folds the rows into a
    /// [`ReportOutcome`]. Zero joined rows yields `NotFound` - which also
    /// covers an existing invoice with zero line items, since the inner
    /// join on invoice_items cannot distinguish the two.
    pub async fn report(&self, invoice_id: i64) -> DbResult<ReportOutcome> {
        debug!(invoice_id, "Generating invoice report");

        let rows = sqlx::query_as::<_, ReportRow>(REPORT_QUERY)
            .bind(invoice_id)
            .fetch_all(&self.pool)
            .await?;

        Ok(ReportOutcome::from_rows(invoice_id, rows))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use crate::error::DbError;
    use crate::pool::{Database, DbConfig};
    use quill_core::{LineItem, ReportOutcome};

    /// Seeds one customer and two products, returning their ids.
    async fn seed(db: &Database) -> (i64, i64, i64) {
        let customer = db
            .customers()
            .add("Ada Lovelace", "ada@example.com")
            .await
            .unwrap();
        let widget = db.products().add("Widget", 3.50).await.unwrap();
        let gadget = db.products().add("Gadget", 10.00).await.unwrap();

        (customer.customer_id, widget.product_id, gadget.product_id)
    }

    #[tokio::test]
    async fn test_create_then_report_round_trips_every_line() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let (customer_id, widget_id, gadget_id) = seed(&db).await;

        let invoice = db
            .invoices()
            .create(
                customer_id,
                "2026-08-31",
                &[LineItem::new(widget_id, 2), LineItem::new(gadget_id, 3)],
            )
            .await
            .unwrap();

        let items = db.invoices().get_items(invoice.invoice_id).await.unwrap();
        assert_eq!(items.len(), 2);
        assert!(items.iter().all(|i| i.invoice_id == invoice.invoice_id));
        assert_eq!(items[0].product_id, widget_id);
        assert_eq!(items[0].quantity, 2);
        assert_eq!(items[1].product_id, gadget_id);
        assert_eq!(items[1].quantity, 3);

        let outcome = db.invoices().report(invoice.invoice_id).await.unwrap();
        let ReportOutcome::Found(report) = outcome else {
            panic!("expected Found");
        };

        // quantity 5, amount 2·3.50 + 3·10.00
        assert_eq!(report.total_quantity, 5);
        assert!((report.total_amount - 37.0).abs() < 1e-9);
        assert_eq!(report.lines.len(), 2);
        assert_eq!(report.customer_name, "Ada Lovelace");
        assert_eq!(report.date, "2026-08-31");
    }

    #[tokio::test]
    async fn test_report_on_missing_invoice_is_not_found_outcome() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();

        let outcome = db.invoices().report(42).await.unwrap();
        assert_eq!(outcome, ReportOutcome::NotFound { invoice_id: 42 });
        assert_eq!(outcome.render(), "No invoice found with ID 42");
    }

    #[tokio::test]
    async fn test_zero_items_accepted_but_reports_not_found() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let (customer_id, _, _) = seed(&db).await;

        let invoice = db
            .invoices()
            .create(customer_id, "2026-08-31", &[])
            .await
            .unwrap();

        // The invoice row exists...
        assert!(db
            .invoices()
            .get_by_id(invoice.invoice_id)
            .await
            .unwrap()
            .is_some());

        // ...but the inner join yields no rows
        let outcome = db.invoices().report(invoice.invoice_id).await.unwrap();
        assert!(!outcome.is_found());
    }

    #[tokio::test]
    async fn test_failing_item_rolls_back_whole_invoice() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let (customer_id, widget_id, _) = seed(&db).await;

        // Second item references a product that doesn't exist
        let err = db
            .invoices()
            .create(
                customer_id,
                "2026-08-31",
                &[LineItem::new(widget_id, 1), LineItem::new(9999, 1)],
            )
            .await
            .unwrap_err();

        assert!(matches!(err, DbError::ForeignKeyViolation { .. }));

        // No partial invoice and no orphaned first item remain
        assert_eq!(db.invoices().count().await.unwrap(), 0);
        let orphans: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM invoice_items")
            .fetch_one(db.pool())
            .await
            .unwrap();
        assert_eq!(orphans, 0);
    }

    #[tokio::test]
    async fn test_unknown_customer_is_rejected() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();

        let err = db
            .invoices()
            .create(77, "2026-08-31", &[])
            .await
            .unwrap_err();

        assert!(matches!(err, DbError::ForeignKeyViolation { .. }));
    }

    #[tokio::test]
    async fn test_non_positive_quantity_fails_before_any_write() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let (customer_id, widget_id, _) = seed(&db).await;

        for quantity in [0, -2] {
            let err = db
                .invoices()
                .create(
                    customer_id,
                    "2026-08-31",
                    &[LineItem::new(widget_id, quantity)],
                )
                .await
                .unwrap_err();

            assert!(matches!(err, DbError::Validation(_)));
        }

        assert_eq!(db.invoices().count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_report_lines_follow_item_id_order() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let (customer_id, widget_id, gadget_id) = seed(&db).await;

        let invoice = db
            .invoices()
            .create(
                customer_id,
                "2026-08-31",
                &[LineItem::new(gadget_id, 1), LineItem::new(widget_id, 1)],
            )
            .await
            .unwrap();

        let outcome = db.invoices().report(invoice.invoice_id).await.unwrap();
        let ReportOutcome::Found(report) = outcome else {
            panic!("expected Found");
        };

        // Insertion order == item_id order
        assert_eq!(report.lines[0].product_name, "Gadget");
        assert_eq!(report.lines[1].product_name, "Widget");
    }

    #[tokio::test]
    async fn test_same_product_on_two_lines_counts_twice() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let (customer_id, widget_id, _) = seed(&db).await;

        let invoice = db
            .invoices()
            .create(
                customer_id,
                "2026-08-31",
                &[LineItem::new(widget_id, 1), LineItem::new(widget_id, 4)],
            )
            .await
            .unwrap();

        let outcome = db.invoices().report(invoice.invoice_id).await.unwrap();
        let ReportOutcome::Found(report) = outcome else {
            panic!("expected Found");
        };

        assert_eq!(report.total_quantity, 5);
        assert!((report.total_amount - 17.5).abs() < 1e-9);
    }
}
