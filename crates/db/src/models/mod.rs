//! Row models and DTOs.
//!
//! Each submodule contains a `FromRow` entity struct matching the table row
//! plus the input DTOs its repository accepts.

pub mod blog;
pub mod user;
