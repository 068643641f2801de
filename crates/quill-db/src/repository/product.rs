//! # Product Repository
//!
//! Database operations for products.
//!
//! Products are insert-only and immutable after creation, so an invoice
//! line's unit price can always be read back from the product row.
//!
//! The writer does not re-validate price: callers gate entry through
//! `quill_core::validation::validate_price_input` (numeric + non-negative)
//! before calling [`ProductRepository::add`].

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::DbResult;
use quill_core::Product;

/// Repository for product database operations.
#[derive(Debug, Clone)]
pub struct ProductRepository {
    pool: SqlitePool,
}

impl ProductRepository {
    /// Creates a new ProductRepository.
    pub fn new(pool: SqlitePool) -> Self {
        ProductRepository { pool }
    }

    /// Appends one new product row; the storage layer assigns its id.
    ///
    /// ## Arguments
    /// * `name` - Display name (caller guarantees non-empty)
    /// * `price` - Unit price (caller guarantees numeric and non-negative)
    ///
    /// ## Returns
    /// The created product with its assigned id.
    pub async fn add(&self, name: &str, price: f64) -> DbResult<Product> {
        debug!(name = %name, price = %price, "Inserting product");

        let result = sqlx::query("INSERT INTO products (name, price) VALUES (?1, ?2)")
            .bind(name)
            .bind(price)
            .execute(&self.pool)
            .await?;

        Ok(Product {
            product_id: result.last_insert_rowid(),
            name: name.to_string(),
            price,
        })
    }

    /// Gets a product by id.
    pub async fn get_by_id(&self, product_id: i64) -> DbResult<Option<Product>> {
        let product = sqlx::query_as::<_, Product>(
            r#"
            SELECT product_id, name, price
            FROM products
            WHERE product_id = ?1
            "#,
        )
        .bind(product_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(product)
    }

    /// Lists all products, oldest first.
    pub async fn list(&self) -> DbResult<Vec<Product>> {
        let products = sqlx::query_as::<_, Product>(
            r#"
            SELECT product_id, name, price
            FROM products
            ORDER BY product_id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(products)
    }

    /// Counts product rows.
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
