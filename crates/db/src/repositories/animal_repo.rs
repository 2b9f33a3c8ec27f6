//! Repository for the `animals` table and its `animal_orders` join table.

use sqlx::PgPool;
use wildpreserve_core::types::DbId;

use crate::models::animal::{Animal, AnimalDetail, AnimalListRow, AnimalName, NewAnimal};
use crate::models::class::Class;
use crate::models::order::Order;

const COLUMNS: &str = "id, name, binomial, description, img, class_id";

pub struct AnimalRepo;

impl AnimalRepo {
    /// Insert a new animal and its order references in one transaction,
    /// returning the created row.
    pub async fn create(pool: &PgPool, input: &NewAnimal) -> Result<Animal, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO animals (name, binomial, description, img, class_id)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        let animal = sqlx::query_as::<_, Animal>(&query)
            .bind(&input.name)
            .bind(&input.binomial)
            .bind(&input.description)
            .bind(&input.img)
            .bind(input.class_id)
            .fetch_one(&mut *tx)
            .await?;

        for order_id in &input.order_ids {
            sqlx::query("INSERT INTO animal_orders (animal_id, order_id) VALUES ($1, $2)")
                .bind(animal.id)
                .bind(order_id)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;
        Ok(animal)
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Animal>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM animals WHERE id = $1");
        sqlx::query_as::<_, Animal>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find an animal with its class and order references resolved.
    pub async fn find_with_refs(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<AnimalDetail>, sqlx::Error> {
        let Some(animal) = Self::find_by_id(pool, id).await? else {
            return Ok(None);
        };

        let class = sqlx::query_as::<_, Class>("SELECT id, name FROM classes WHERE id = $1")
            .bind(animal.class_id)
            .fetch_one(pool)
            .await?;

        let orders = sqlx::query_as::<_, Order>(
            "SELECT o.id, o.name FROM orders o
             JOIN animal_orders ao ON ao.order_id = o.id
             WHERE ao.animal_id = $1
             ORDER BY o.name ASC",
        )
        .bind(id)
        .fetch_all(pool)
        .await?;

        Ok(Some(AnimalDetail {
            animal,
            class,
            orders,
        }))
    }

    /// List all animals with the class name populated, ordered by animal
    /// name ascending.
    pub async fn list(pool: &PgPool) -> Result<Vec<AnimalListRow>, sqlx::Error> {
        sqlx::query_as::<_, AnimalListRow>(
            "SELECT a.id, a.name, a.binomial, c.name AS class_name
             FROM animals a
             JOIN classes c ON c.id = a.class_id
             ORDER BY a.name ASC",
        )
        .fetch_all(pool)
        .await
    }

    /// Minimal id/name projection for form selection lists.
    pub async fn list_names(pool: &PgPool) -> Result<Vec<AnimalName>, sqlx::Error> {
        sqlx::query_as::<_, AnimalName>("SELECT id, name FROM animals ORDER BY name ASC")
            .fetch_all(pool)
            .await
    }

    /// Animals referencing a given class. Dependents of a class delete.
    pub async fn list_by_class(pool: &PgPool, class_id: DbId) -> Result<Vec<Animal>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM animals WHERE class_id = $1 ORDER BY name ASC");
        sqlx::query_as::<_, Animal>(&query)
            .bind(class_id)
            .fetch_all(pool)
            .await
    }

    /// Animals referencing a given order. Dependents of an order delete.
    pub async fn list_by_order(pool: &PgPool, order_id: DbId) -> Result<Vec<Animal>, sqlx::Error> {
        sqlx::query_as::<_, Animal>(
            "SELECT a.id, a.name, a.binomial, a.description, a.img, a.class_id
             FROM animals a
             JOIN animal_orders ao ON ao.animal_id = a.id
             WHERE ao.order_id = $1
             ORDER BY a.name ASC",
        )
            .bind(order_id)
            .fetch_all(pool)
            .await
    }

    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM animals")
            .fetch_one(pool)
            .await
    }

    /// Overwrite an animal row and replace its order references, keeping
    /// its identity. Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &NewAnimal,
    ) -> Result<Option<Animal>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "UPDATE animals SET
                name = $2,
                binomial = $3,
                description = $4,
                img = $5,
                class_id = $6
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let animal = sqlx::query_as::<_, Animal>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.binomial)
            .bind(&input.description)
            .bind(&input.img)
            .bind(input.class_id)
            .fetch_optional(&mut *tx)
            .await?;

        let Some(animal) = animal else {
            return Ok(None);
        };

        sqlx::query("DELETE FROM animal_orders WHERE animal_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        for order_id in &input.order_ids {
            sqlx::query("INSERT INTO animal_orders (animal_id, order_id) VALUES ($1, $2)")
                .bind(id)
                .bind(order_id)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;
        Ok(Some(animal))
    }

    /// Delete an animal by ID. Join-table rows go with it via cascade.
    /// Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM animals WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
