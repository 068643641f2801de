//! # quill-core: Pure Invoicing Logic for Quill
//!
//! This crate is the **heart** of Quill. It contains the invoicing domain
//! logic as pure functions and types with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                       Quill Architecture                            │
//! │                                                                     │
//! │  ┌─────────────────────────────────────────────────────────────┐   │
//! │  │                 Caller (seed binary, future UI)             │   │
//! │  │    add_customer ─► add_product ─► create_invoice ─► report  │   │
//! │  └─────────────────────────────┬───────────────────────────────┘   │
//! │                                │                                    │
//! │  ┌─────────────────────────────▼───────────────────────────────┐   │
//! │  │              ★ quill-core (THIS CRATE) ★                    │   │
//! │  │                                                             │   │
//! │  │   ┌──────────┐ ┌──────────┐ ┌──────────┐ ┌────────────┐   │   │
//! │  │   │  types   │ │  money   │ │  report  │ │ validation │   │   │
//! │  │   │ Customer │ │   Usd    │ │ Outcome  │ │   rules    │   │   │
//! │  │   │ Invoice  │ │ amounts  │ │ totals   │ │   checks   │   │   │
//! │  │   └──────────┘ └──────────┘ └──────────┘ └────────────┘   │   │
//! │  │                                                             │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS       │   │
//! │  └─────────────────────────────┬───────────────────────────────┘   │
//! │                                │                                    │
//! │  ┌─────────────────────────────▼───────────────────────────────┐   │
//! │  │                  quill-db (Database Layer)                  │   │
//! │  │           SQLite queries, migrations, repositories          │   │
//! │  └─────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Customer, Product, Invoice, InvoiceItem)
//! - [`money`] - Two-decimal USD formatting and line-amount math
//! - [`report`] - Invoice report construction and text rendering
//! - [`validation`] - Input validation rules
//! - [`error`] - Validation error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use quill_core::report::{ReportOutcome, ReportRow};
//!
//! let rows = vec![ReportRow {
//!     customer_name: "Ada Lovelace".into(),
//!     customer_email: "ada@example.com".into(),
//!     invoice_date: "2026-08-31".into(),
//!     product_name: "Widget".into(),
//!     unit_price: 3.50,
//!     quantity: 2,
//! }];
//!
//! let outcome = ReportOutcome::from_rows(1, rows);
//! assert!(outcome.render().contains("Amount: $7.00"));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod report;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use quill_core::Customer` instead of
// `use quill_core::types::Customer`

pub use error::ValidationError;
pub use money::Usd;
pub use report::{InvoiceReport, ReportLine, ReportOutcome, ReportRow};
pub use types::*;
