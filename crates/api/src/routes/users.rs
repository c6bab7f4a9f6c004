//! Route definitions for the users service.
//!
//! ```text
//! POST /register     register (public)
//! POST /login        login (public)
//! GET  /profile      get_profile
//! PUT  /profile      update_profile
//! GET  /admin        admin_only (Admin role)
//! ```

use axum::middleware::from_fn_with_state;
use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{admin, profile, users};
use crate::middleware::auth::require_auth;
use crate::state::AppState;

pub fn router(state: AppState) -> Router<AppState> {
    let protected = Router::new()
        .route(
            "/profile",
            get(profile::get_profile).put(profile::update_profile),
        )
        .route("/admin", get(admin::admin_only))
        .route_layer(from_fn_with_state(state, require_auth));

    Router::new()
        .route("/register", post(users::register))
        .route("/login", post(users::login))
        .merge(protected)
}
