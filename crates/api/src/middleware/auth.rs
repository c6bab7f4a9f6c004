//! Bearer-token gate and the extractor that reads its result.

use axum::extract::{FromRequestParts, Request, State};
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use axum::middleware::Next;
use axum::response::Response;
use scribe_core::roles::Role;

use crate::auth::jwt::{verify_token, Claims};
use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Reject any request without a valid bearer token; otherwise attach the
/// verified [`Claims`] to the request extensions and continue.
///
/// Mount with `route_layer(from_fn_with_state(state, require_auth))` so the
/// handler and its extractors never run for rejected requests.
pub async fn require_auth(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> AppResult<Response> {
    let header = request
        .headers()
        .get(AUTHORIZATION)
        .ok_or_else(|| AppError::unauthorized("Authorization header required"))?
        .to_str()
        .map_err(|_| AppError::unauthorized("Invalid Authorization header"))?;

    let token = header.strip_prefix("Bearer ").ok_or_else(|| {
        AppError::unauthorized("Invalid Authorization format. Expected: Bearer <token>")
    })?;

    let claims = verify_token(token.trim(), &state.config.jwt).map_err(|e| {
        tracing::debug!(error = %e, "Rejected bearer token");
        AppError::unauthorized("Invalid or expired token")
    })?;

    request.extensions_mut().insert(claims);
    Ok(next.run(request).await)
}

/// The authenticated caller, read from the claims [`require_auth`] attached.
///
/// Use this as an extractor parameter in any handler behind `require_auth`:
///
/// ```ignore
/// async fn my_handler(user: AuthUser) -> AppResult<Json<()>> {
///     tracing::info!(username = %user.username, role = %user.role, "handling request");
///     Ok(Json(()))
/// }
/// ```
///
/// If the route was mounted without the middleware there are no claims and
/// the request is rejected with 401.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub username: String,
    pub role: Role,
}

impl From<Claims> for AuthUser {
    fn from(claims: Claims) -> Self {
        Self {
            username: claims.username,
            role: claims.role,
        }
    }
}

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Claims>()
            .cloned()
            .map(AuthUser::from)
            .ok_or_else(|| AppError::unauthorized("Authentication required"))
    }
}
