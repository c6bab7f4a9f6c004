//! Authentication and authorization middleware.
//!
//! - [`auth::require_auth`] -- verifies the bearer token and attaches claims.
//! - [`auth::AuthUser`] -- extracts the authenticated caller from those claims.
//! - [`rbac::RequireAdmin`] -- requires the `Admin` role.

pub mod auth;
pub mod rbac;
