//! Route definitions for the blogs service.
//!
//! ```text
//! GET    /blogs          list_blogs (public)
//! POST   /blogs/create   create_blog
//! PUT    /blogs/update   update_blog
//! DELETE /blogs/delete   delete_blog (?id=)
//! ```

use axum::middleware::from_fn_with_state;
use axum::routing::{delete, get, post, put};
use axum::Router;

use crate::handlers::blogs;
use crate::middleware::auth::require_auth;
use crate::state::AppState;

pub fn router(state: AppState) -> Router<AppState> {
    let protected = Router::new()
        .route("/blogs/create", post(blogs::create_blog))
        .route("/blogs/update", put(blogs::update_blog))
        .route("/blogs/delete", delete(blogs::delete_blog))
        .route_layer(from_fn_with_state(state, require_auth));

    Router::new()
        .route("/blogs", get(blogs::list_blogs))
        .merge(protected)
}
