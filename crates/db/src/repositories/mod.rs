//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&SqlitePool` as the first argument.

pub mod blog_repo;
pub mod user_repo;

pub use blog_repo::BlogRepo;
pub use user_repo::UserRepo;
