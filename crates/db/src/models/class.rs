//! Class entity model (taxonomic class, e.g. Mammalia).

use serde::Serialize;
use sqlx::FromRow;
use wildpreserve_core::types::DbId;

/// A row from the `classes` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Class {
    pub id: DbId,
    pub name: String,
}

impl Class {
    /// Detail page URL, derived from identity.
    pub fn url(&self) -> String {
        format!("/wildlife/class/{}", self.id)
    }
}

/// Validated input for creating or overwriting a class.
#[derive(Debug, Clone)]
pub struct NewClass {
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_is_derived_from_id() {
        let class = Class {
            id: 7,
            name: "Mammalia".to_string(),
        };
        assert_eq!(class.url(), "/wildlife/class/7");
    }
}
