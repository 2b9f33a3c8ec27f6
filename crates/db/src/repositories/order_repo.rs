//! Repository for the `orders` table.

use sqlx::PgPool;
use wildpreserve_core::types::DbId;

use crate::models::order::{NewOrder, Order};

pub struct OrderRepo;

impl OrderRepo {
    /// Insert a new order, returning the created row.
    pub async fn create(pool: &PgPool, input: &NewOrder) -> Result<Order, sqlx::Error> {
        sqlx::query_as::<_, Order>("INSERT INTO orders (name) VALUES ($1) RETURNING id, name")
            .bind(&input.name)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Order>, sqlx::Error> {
        sqlx::query_as::<_, Order>("SELECT id, name FROM orders WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Exact-name lookup, used to deduplicate order creation.
    pub async fn find_by_name(pool: &PgPool, name: &str) -> Result<Option<Order>, sqlx::Error> {
        sqlx::query_as::<_, Order>("SELECT id, name FROM orders WHERE name = $1")
            .bind(name)
            .fetch_optional(pool)
            .await
    }

    /// List all orders, ordered by name ascending.
    pub async fn list(pool: &PgPool) -> Result<Vec<Order>, sqlx::Error> {
        sqlx::query_as::<_, Order>("SELECT id, name FROM orders ORDER BY name ASC")
            .fetch_all(pool)
            .await
    }

    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM orders")
            .fetch_one(pool)
            .await
    }

    /// Overwrite an order row, keeping its identity.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &NewOrder,
    ) -> Result<Option<Order>, sqlx::Error> {
        sqlx::query_as::<_, Order>("UPDATE orders SET name = $2 WHERE id = $1 RETURNING id, name")
            .bind(id)
            .bind(&input.name)
            .fetch_optional(pool)
            .await
    }

    /// Delete an order by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM orders WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
