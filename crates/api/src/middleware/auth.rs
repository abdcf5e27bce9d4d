//! JWT-based admin authentication extractor for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use medsite_core::error::CoreError;
use medsite_core::types::DbId;
use medsite_db::repositories::SessionRepo;

use crate::auth::jwt::validate_token;
use crate::error::AppError;
use crate::state::AppState;

/// An authenticated admin, extracted from a Bearer token in the
/// `Authorization` header.
///
/// Besides the token's signature and expiry, the session it was issued for
/// must still be active, so logout takes effect immediately.
///
/// ```ignore
/// async fn delete_thing(admin: RequireAdmin) -> AppResult<StatusCode> {
///     tracing::info!(user_id = admin.user_id, "deleting");
///     Ok(StatusCode::NO_CONTENT)
/// }
/// ```
#[derive(Debug, Clone)]
pub struct RequireAdmin {
    /// The admin's database id (from `claims.sub`).
    pub user_id: DbId,
    /// The session the token belongs to (from `claims.sid`).
    pub session_id: DbId,
}

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| unauthorized("Missing Authorization header"))?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or_else(|| unauthorized("Invalid Authorization format. Expected: Bearer <token>"))?;

        let claims = validate_token(token, &state.config.jwt)
            .map_err(|_| unauthorized("Invalid or expired token"))?;

        if !SessionRepo::is_active(&state.pool, claims.sid).await? {
            return Err(unauthorized("Session has been revoked or has expired"));
        }

        Ok(RequireAdmin {
            user_id: claims.sub,
            session_id: claims.sid,
        })
    }
}

fn unauthorized(msg: &str) -> AppError {
    AppError::Core(CoreError::Unauthorized(msg.into()))
}
