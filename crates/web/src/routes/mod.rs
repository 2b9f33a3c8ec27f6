pub mod health;
pub mod wildlife;
