//! Preserve status entity model: one named individual of an animal species
//! and whether it is currently inside the preserve.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use sqlx::FromRow;
use wildpreserve_core::types::{DbId, Timestamp};

/// Whether the individual is currently inside the preserve.
///
/// Stored as the `preserve_state` Postgres enum; the variant strings are
/// also what forms submit and pages display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, sqlx::Type)]
#[sqlx(type_name = "preserve_state")]
pub enum PreserveState {
    #[sqlx(rename = "Currently in preserve")]
    InPreserve,
    #[sqlx(rename = "Currently not in preserve")]
    NotInPreserve,
}

impl PreserveState {
    pub const ALL: [PreserveState; 2] = [PreserveState::InPreserve, PreserveState::NotInPreserve];

    pub fn as_str(&self) -> &'static str {
        match self {
            PreserveState::InPreserve => "Currently in preserve",
            PreserveState::NotInPreserve => "Currently not in preserve",
        }
    }
}

impl Default for PreserveState {
    fn default() -> Self {
        PreserveState::InPreserve
    }
}

impl fmt::Display for PreserveState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PreserveState {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Currently in preserve" => Ok(PreserveState::InPreserve),
            "Currently not in preserve" => Ok(PreserveState::NotInPreserve),
            _ => Err(()),
        }
    }
}

/// A row from the `preserve_statuses` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PreserveStatus {
    pub id: DbId,
    pub animal_id: DbId,
    pub name: String,
    pub status: PreserveState,
    pub expected_back: Timestamp,
}

impl PreserveStatus {
    /// Detail page URL, derived from identity.
    pub fn url(&self) -> String {
        format!("/wildlife/preservestatus/{}", self.id)
    }

    /// Human-readable return date, e.g. "Oct 3, 2024".
    pub fn expected_back_formatted(&self) -> String {
        self.expected_back.format("%b %-d, %Y").to_string()
    }
}

/// A preserve status with its animal reference resolved at read time.
#[derive(Debug, Clone, FromRow)]
pub struct PreserveStatusWithAnimal {
    pub id: DbId,
    pub animal_id: DbId,
    pub animal_name: String,
    pub name: String,
    pub status: PreserveState,
    pub expected_back: Timestamp,
}

impl PreserveStatusWithAnimal {
    pub fn url(&self) -> String {
        format!("/wildlife/preservestatus/{}", self.id)
    }

    pub fn expected_back_formatted(&self) -> String {
        self.expected_back.format("%b %-d, %Y").to_string()
    }
}

/// Validated input for creating or overwriting a preserve status.
///
/// `expected_back = None` lets the database default (now) apply.
#[derive(Debug, Clone)]
pub struct NewPreserveStatus {
    pub animal_id: DbId,
    pub name: String,
    pub status: PreserveState,
    pub expected_back: Option<Timestamp>,
}
