//! Response bodies shared across handlers.

use scribe_core::types::DbId;
use serde::Serialize;

/// `{ "message": "..." }` acknowledgment for mutations.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

impl MessageResponse {
    pub fn new(message: &'static str) -> Self {
        Self { message }
    }
}

/// Acknowledgment for a created resource, carrying its generated id.
#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub message: &'static str,
    pub id: DbId,
}

/// `{ "token": "..." }` returned by a successful login.
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub token: String,
}
