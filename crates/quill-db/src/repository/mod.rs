//! # Repository Module
//!
//! Database repository implementations for Quill.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                  Repository Pattern Explained                       │
//! │                                                                     │
//! │  The Repository pattern abstracts database access behind a clean   │
//! │  API.                                                               │
//! │                                                                     │
//! │  Caller                                                             │
//! │       │                                                             │
//! │       │  db.invoices().create(customer_id, date, &items)           │
//! │       ▼                                                             │
//! │  InvoiceRepository                                                 │
//! │  ├── create(&self, customer_id, date, items)                       │
//! │  ├── get_by_id(&self, id)                                          │
//! │  ├── get_items(&self, invoice_id)                                  │
//! │  └── report(&self, invoice_id)                                     │
//! │       │                                                             │
//! │       │  SQL Query                                                  │
//! │       ▼                                                             │
//! │  SQLite Database                                                   │
//! │                                                                     │
//! │  Benefits:                                                          │
//! │  • Clean separation of concerns                                    │
//! │  • SQL is isolated in one place                                    │
//! │  • Each operation acquires and releases its own connection         │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`CustomerRepository`] - Customer inserts and lookups
//! - [`ProductRepository`] - Product inserts and lookups
//! - [`InvoiceRepository`] - Transactional invoice creation and reporting

pub mod customer;
pub mod invoice;
pub mod product;

pub use customer::CustomerRepository;
pub use invoice::InvoiceRepository;
pub use product::ProductRepository;
