//! Animal entity model and its populated read shapes.

use serde::Serialize;
use sqlx::FromRow;
use wildpreserve_core::types::DbId;

use crate::models::class::Class;
use crate::models::order::Order;

/// A row from the `animals` table. `class_id` is the foreign key as
/// stored; use [`AnimalDetail`] when the references need to be resolved.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Animal {
    pub id: DbId,
    pub name: String,
    pub binomial: String,
    pub description: String,
    pub img: String,
    pub class_id: DbId,
}

impl Animal {
    /// Detail page URL, derived from identity.
    pub fn url(&self) -> String {
        format!("/wildlife/animal/{}", self.id)
    }
}

/// An animal with its class and order references resolved at read time.
#[derive(Debug, Clone)]
pub struct AnimalDetail {
    pub animal: Animal,
    pub class: Class,
    pub orders: Vec<Order>,
}

/// Projection for the animal list page: the class reference is resolved
/// to its name in the query itself.
#[derive(Debug, Clone, FromRow)]
pub struct AnimalListRow {
    pub id: DbId,
    pub name: String,
    pub binomial: String,
    pub class_name: String,
}

impl AnimalListRow {
    pub fn url(&self) -> String {
        format!("/wildlife/animal/{}", self.id)
    }
}

/// Minimal projection for populating form selection lists.
#[derive(Debug, Clone, FromRow)]
pub struct AnimalName {
    pub id: DbId,
    pub name: String,
}

/// Validated input for creating or overwriting an animal.
#[derive(Debug, Clone)]
pub struct NewAnimal {
    pub name: String,
    pub binomial: String,
    pub description: String,
    pub img: String,
    pub class_id: DbId,
    pub order_ids: Vec<DbId>,
}
