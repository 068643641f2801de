//! # quill-db: Database Layer for Quill
//!
//! This crate provides database access for the Quill invoicing system.
//! It uses SQLite for local storage with sqlx for async operations.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                        Quill Data Flow                              │
//! │                                                                     │
//! │  Caller (create_invoice)                                           │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  ┌─────────────────────────────────────────────────────────────┐   │
//! │  │                   quill-db (THIS CRATE)                     │   │
//! │  │                                                             │   │
//! │  │   ┌─────────────┐   ┌───────────────┐   ┌──────────────┐  │   │
//! │  │   │  Database   │   │ Repositories  │   │  Migrations  │  │   │
//! │  │   │  (pool.rs)  │   │               │   │  (embedded)  │  │   │
//! │  │   │             │   │ CustomerRepo  │   │              │  │   │
//! │  │   │ SqlitePool  │◄──│ ProductRepo   │   │ 001_init.sql │  │   │
//! │  │   │ Management  │   │ InvoiceRepo   │   │              │  │   │
//! │  │   └─────────────┘   └───────────────┘   └──────────────┘  │   │
//! │  │                                                             │   │
//! │  └─────────────────────────────────────────────────────────────┘   │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  SQLite Database (./invoice.db)                                    │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection pool creation and configuration
//! - [`migrations`] - Embedded database migrations
//! - [`error`] - Database error types
//! - [`repository`] - Repository implementations (customer, product, invoice)
//!
//! ## Usage
//!
//! ```rust,ignore
//! use quill_db::{Database, DbConfig};
//! use quill_core::LineItem;
//!
//! // Create database with default config (runs migrations)
//! let db = Database::new(DbConfig::new("invoice.db")).await?;
//!
//! // Use repositories
//! let customer = db.customers().add("Ada Lovelace", "ada@example.com").await?;
//! let product = db.products().add("Widget", 3.50).await?;
//!
//! let invoice = db
//!     .invoices()
//!     .create(customer.customer_id, "2026-08-31", &[LineItem::new(product.product_id, 2)])
//!     .await?;
//!
//! println!("{}", db.invoices().report(invoice.invoice_id).await?.render());
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::DbError;
pub use pool::{Database, DbConfig};

// Repository re-exports for convenience
pub use repository::customer::CustomerRepository;
pub use repository::invoice::InvoiceRepository;
pub use repository::product::ProductRepository;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Default storage file name, relative to the working directory.
///
/// The system has no CLI flags or environment configuration; callers that
/// want a different location pass an explicit path to [`DbConfig::new`].
pub const DEFAULT_DB_FILE: &str = "invoice.db";
