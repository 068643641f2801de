//! # Seed Data Generator
//!
//! Populates the database with demo data and prints one invoice report.
//!
//! ## Usage
//! ```bash
//! # Seed ./invoice.db (default)
//! cargo run -p quill-db --bin seed
//!
//! # Specify database path
//! cargo run -p quill-db --bin seed -- --db ./data/invoice.db
//! ```
//!
//! ## What It Creates
//! - Two customers
//! - Three products with realistic prices
//! - One invoice for the first customer, dated today, with three line
//!   items - then renders its report to stdout

use chrono::Utc;
use std::env;

use quill_core::validation::validate_price_input;
use quill_core::LineItem;
use quill_db::{Database, DbConfig, DbError, DEFAULT_DB_FILE};

/// Demo products as (name, price-as-entered) pairs. Prices go through the
/// same entry gate a form would use.
const PRODUCTS: &[(&str, &str)] = &[
    ("Widget", "3.50"),
    ("Gadget", "10.00"),
    ("Gizmo Deluxe", "24.99"),
];

#[tokio::main]
async fn main() -> Result<(), DbError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let db_path = parse_db_path().unwrap_or_else(|| DEFAULT_DB_FILE.to_string());

    let db = Database::new(DbConfig::new(&db_path)).await?;

    let ada = db
        .customers()
        .add("Ada Lovelace", "ada@example.com")
        .await?;
    db.customers()
        .add("Charles Babbage", "charles@example.com")
        .await?;

    let mut product_ids = Vec::new();
    for &(name, raw_price) in PRODUCTS {
        let price = validate_price_input(raw_price)?;
        let product = db.products().add(name, price).await?;
        product_ids.push(product.product_id);
    }

    let today = Utc::now().format("%Y-%m-%d").to_string();
    let items: Vec<LineItem> = product_ids
        .iter()
        .enumerate()
        .map(|(i, &product_id)| LineItem::new(product_id, (i + 1) as i64))
        .collect();

    let invoice = db.invoices().create(ada.customer_id, &today, &items).await?;

    let outcome = db.invoices().report(invoice.invoice_id).await?;
    println!("{}", outcome.render());

    db.close().await;
    Ok(())
}

/// Parses `--db <path>` from the command line, if present.
fn parse_db_path() -> Option<String> {
    let args: Vec<String> = env::args().collect();
    args.iter()
        .position(|a| a == "--db")
        .and_then(|i| args.get(i + 1))
        .cloned()
}
