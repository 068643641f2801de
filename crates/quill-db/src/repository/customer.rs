//! # Customer Repository
//!
//! Database operations for customers.
//!
//! Customers are insert-only: there is no update or delete. Duplicate
//! names and emails are allowed (no uniqueness constraint exists), and
//! email format is not validated here - required-field checks are the
//! caller's job via `quill_core::validation::validate_required`.

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::DbResult;
use quill_core::Customer;

/// Repository for customer database operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = CustomerRepository::new(pool);
///
/// let customer = repo.add("Ada Lovelace", "ada@example.com").await?;
/// let found = repo.get_by_id(customer.customer_id).await?;
/// ```
#[derive(Debug, Clone)]
pub struct CustomerRepository {
    pool: SqlitePool,
}

impl CustomerRepository {
    /// Creates a new CustomerRepository.
    pub fn new(pool: SqlitePool) -> Self {
        CustomerRepository { pool }
    }

    /// Appends one new customer row; the storage layer assigns its id.
    ///
    /// ## Arguments
    /// * `name` - Customer display name (caller guarantees non-empty)
    /// * `email` - Contact email (caller guarantees non-empty)
    ///
    /// ## Returns
    /// The created customer with its assigned id.
    pub async fn add(&self, name: &str, email: &str) -> DbResult<Customer> {
        debug!(name = %name, "Inserting customer");

        let result = sqlx::query("INSERT INTO customers (name, email) VALUES (?1, ?2)")
            .bind(name)
            .bind(email)
            .execute(&self.pool)
            .await?;

        Ok(Customer {
            customer_id: result.last_insert_rowid(),
            name: name.to_string(),
            email: email.to_string(),
        })
    }

    /// Gets a customer by id.
    pub async fn get_by_id(&self, customer_id: i64) -> DbResult<Option<Customer>> {
        let customer = sqlx::query_as::<_, Customer>(
            r#"
            SELECT customer_id, name, email
            FROM customers
            WHERE customer_id = ?1
            "#,
        )
        .bind(customer_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(customer)
    }

    /// Lists all customers, oldest first.
    pub async fn list(&self) -> DbResult<Vec<Customer>> {
        let customers = sqlx::query_as::<_, Customer>(
            r#"
            SELECT customer_id, name, email
            FROM customers
            ORDER BY customer_id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(customers)
    }

    /// Counts customer rows.
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM customers")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use crate::pool::{Database, DbConfig};

    #[tokio::test]
    async fn test_add_increments_count_and_round_trips() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let repo = db.customers();

        assert_eq!(repo.count().await.unwrap(), 0);

        let customer = repo.add("Ada Lovelace", "ada@example.com").await.unwrap();

        assert_eq!(repo.count().await.unwrap(), 1);
        assert_eq!(customer.name, "Ada Lovelace");
        assert_eq!(customer.email, "ada@example.com");

        let found = repo.get_by_id(customer.customer_id).await.unwrap();
        assert_eq!(found, Some(customer));
    }

    #[tokio::test]
    async fn test_duplicates_are_allowed() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let repo = db.customers();

        let first = repo.add("Ada Lovelace", "ada@example.com").await.unwrap();
        let second = repo.add("Ada Lovelace", "ada@example.com").await.unwrap();

        assert_ne!(first.customer_id, second.customer_id);
        assert_eq!(repo.count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_get_by_id_missing_is_none() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();

        let found = db.customers().get_by_id(999).await.unwrap();
        assert_eq!(found, None);
    }

    #[tokio::test]
    async fn test_list_is_ordered_by_id() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let repo = db.customers();

        repo.add("First", "first@example.com").await.unwrap();
        repo.add("Second", "second@example.com").await.unwrap();

        let all = repo.list().await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].name, "First");
        assert_eq!(all[1].name, "Second");
    }
}
