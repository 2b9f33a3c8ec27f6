//! Row models and insert DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` entity struct matching the database row, with a pure
//!   `url()` derivation for its detail page
//! - A `New*` DTO carrying validated, sanitized form input for inserts and
//!   full-row overwrites

pub mod animal;
pub mod class;
pub mod order;
pub mod preserve_status;

pub use animal::{Animal, AnimalDetail, AnimalListRow, AnimalName, NewAnimal};
pub use class::{Class, NewClass};
pub use order::{NewOrder, Order};
pub use preserve_status::{
    NewPreserveStatus, PreserveState, PreserveStatus, PreserveStatusWithAnimal,
};
