//! One repository struct per entity. All methods take `&PgPool` and return
//! `Result<_, sqlx::Error>`; callers decide how failures surface.

pub mod animal_repo;
pub mod class_repo;
pub mod order_repo;
pub mod preserve_status_repo;

pub use animal_repo::AnimalRepo;
pub use class_repo::ClassRepo;
pub use order_repo::OrderRepo;
pub use preserve_status_repo::PreserveStatusRepo;
