//! Request handlers for the wildlife preserve pages.
//!
//! Each entity submodule provides the same contract: list, detail,
//! create (GET+POST), update (GET+POST), and delete (GET+POST). Handlers
//! delegate to the repositories in `wildpreserve_db`, run submissions
//! through the validation pipeline in [`crate::forms`], and render pages
//! via [`crate::views`]. Store errors map through [`crate::error::AppError`].

pub mod animal;
pub mod class;
pub mod home;
pub mod order;
pub mod preserve_status;
