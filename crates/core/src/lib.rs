//! Shared domain primitives for the wildlife preserve record manager.
//!
//! Keeps the pieces every other crate needs: ID/timestamp aliases, the
//! domain error enum, and the form sanitization helpers used by the web
//! layer's validation pipeline.

pub mod error;
pub mod forms;
pub mod types;
