//! Repository for the `classes` table.

use sqlx::PgPool;
use wildpreserve_core::types::DbId;

use crate::models::class::{Class, NewClass};

pub struct ClassRepo;

impl ClassRepo {
    /// Insert a new class, returning the created row.
    pub async fn create(pool: &PgPool, input: &NewClass) -> Result<Class, sqlx::Error> {
        sqlx::query_as::<_, Class>(
            "INSERT INTO classes (name) VALUES ($1) RETURNING id, name",
        )
        .bind(&input.name)
        .fetch_one(pool)
        .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Class>, sqlx::Error> {
        sqlx::query_as::<_, Class>("SELECT id, name FROM classes WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all classes, ordered by name ascending.
    pub async fn list(pool: &PgPool) -> Result<Vec<Class>, sqlx::Error> {
        sqlx::query_as::<_, Class>("SELECT id, name FROM classes ORDER BY name ASC")
            .fetch_all(pool)
            .await
    }

    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM classes")
            .fetch_one(pool)
            .await
    }

    /// Overwrite a class row, keeping its identity.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &NewClass,
    ) -> Result<Option<Class>, sqlx::Error> {
        sqlx::query_as::<_, Class>(
            "UPDATE classes SET name = $2 WHERE id = $1 RETURNING id, name",
        )
        .bind(id)
        .bind(&input.name)
        .fetch_optional(pool)
        .await
    }

    /// Delete a class by ID. Returns `true` if a row was removed.
    ///
    /// Callers are expected to check for dependent animals first; the
    /// foreign key constraint rejects the delete otherwise.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM classes WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
