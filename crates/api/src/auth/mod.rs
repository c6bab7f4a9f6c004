//! Authentication primitives shared by both services.
//!
//! - [`password`] -- Argon2id password hashing and verification.
//! - [`jwt`] -- bearer token issuance and verification.
//!
//! The request gate built on these lives in [`crate::middleware::auth`].

pub mod jwt;
pub mod password;
