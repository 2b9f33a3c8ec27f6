//! Order entity model (taxonomic order, e.g. Carnivora).

use serde::Serialize;
use sqlx::FromRow;
use wildpreserve_core::types::DbId;

/// A row from the `orders` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Order {
    pub id: DbId,
    pub name: String,
}

impl Order {
    /// Detail page URL, derived from identity.
    pub fn url(&self) -> String {
        format!("/wildlife/order/{}", self.id)
    }
}

/// Validated input for creating or overwriting an order.
#[derive(Debug, Clone)]
pub struct NewOrder {
    pub name: String,
}
