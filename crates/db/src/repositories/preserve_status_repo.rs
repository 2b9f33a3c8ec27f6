//! Repository for the `preserve_statuses` table.

use sqlx::PgPool;
use wildpreserve_core::types::DbId;

use crate::models::preserve_status::{
    NewPreserveStatus, PreserveState, PreserveStatus, PreserveStatusWithAnimal,
};

const COLUMNS: &str = "id, animal_id, name, status, expected_back";

pub struct PreserveStatusRepo;

impl PreserveStatusRepo {
    /// Insert a new preserve status, returning the created row.
    ///
    /// If `expected_back` is `None`, the database default (now) applies.
    pub async fn create(
        pool: &PgPool,
        input: &NewPreserveStatus,
    ) -> Result<PreserveStatus, sqlx::Error> {
        let query = format!(
            "INSERT INTO preserve_statuses (animal_id, name, status, expected_back)
             VALUES ($1, $2, $3, COALESCE($4, now()))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, PreserveStatus>(&query)
            .bind(input.animal_id)
            .bind(&input.name)
            .bind(input.status)
            .bind(input.expected_back)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<PreserveStatus>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM preserve_statuses WHERE id = $1");
        sqlx::query_as::<_, PreserveStatus>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a preserve status with the animal reference resolved.
    pub async fn find_with_animal(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<PreserveStatusWithAnimal>, sqlx::Error> {
        sqlx::query_as::<_, PreserveStatusWithAnimal>(
            "SELECT p.id, p.animal_id, a.name AS animal_name, p.name, p.status, p.expected_back
             FROM preserve_statuses p
             JOIN animals a ON a.id = p.animal_id
             WHERE p.id = $1",
        )
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    /// List all preserve statuses with the animal name populated.
    pub async fn list_with_animal(
        pool: &PgPool,
    ) -> Result<Vec<PreserveStatusWithAnimal>, sqlx::Error> {
        sqlx::query_as::<_, PreserveStatusWithAnimal>(
            "SELECT p.id, p.animal_id, a.name AS animal_name, p.name, p.status, p.expected_back
             FROM preserve_statuses p
             JOIN animals a ON a.id = p.animal_id
             ORDER BY p.name ASC",
        )
        .fetch_all(pool)
        .await
    }

    /// Preserve statuses referencing a given animal. Dependents of an
    /// animal delete.
    pub async fn list_by_animal(
        pool: &PgPool,
        animal_id: DbId,
    ) -> Result<Vec<PreserveStatus>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM preserve_statuses WHERE animal_id = $1 ORDER BY name ASC"
        );
        sqlx::query_as::<_, PreserveStatus>(&query)
            .bind(animal_id)
            .fetch_all(pool)
            .await
    }

    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM preserve_statuses")
            .fetch_one(pool)
            .await
    }

    /// Count the records currently marked as inside the preserve.
    pub async fn count_in_preserve(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM preserve_statuses WHERE status = $1")
            .bind(PreserveState::InPreserve)
            .fetch_one(pool)
            .await
    }

    /// Overwrite a preserve status row, keeping its identity.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &NewPreserveStatus,
    ) -> Result<Option<PreserveStatus>, sqlx::Error> {
        let query = format!(
            "UPDATE preserve_statuses SET
                animal_id = $2,
                name = $3,
                status = $4,
                expected_back = COALESCE($5, expected_back)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, PreserveStatus>(&query)
            .bind(id)
            .bind(input.animal_id)
            .bind(&input.name)
            .bind(input.status)
            .bind(input.expected_back)
            .fetch_optional(pool)
            .await
    }

    /// Delete a preserve status by ID. Unconditional: preserve statuses
    /// have no dependents. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM preserve_statuses WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
