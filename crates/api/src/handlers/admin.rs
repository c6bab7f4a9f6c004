use axum::Json;

use crate::middleware::rbac::RequireAdmin;
use crate::response::MessageResponse;

/// GET /admin -- reachable only with an `Admin` token.
pub async fn admin_only(RequireAdmin(user): RequireAdmin) -> Json<MessageResponse> {
    tracing::debug!(username = %user.username, "Admin area accessed");
    Json(MessageResponse::new("Welcome, Admin!"))
}
