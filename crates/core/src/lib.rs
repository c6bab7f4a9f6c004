//! Domain primitives shared by the Scribe services.
//!
//! This crate has no I/O and no internal dependencies so the repository
//! layer, the HTTP layer, and tests can all use it.

pub mod error;
pub mod ownership;
pub mod roles;
pub mod types;
