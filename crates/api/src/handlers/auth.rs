//! Handlers for the `/auth` resource (login, refresh, logout).

use axum::extract::State;
use axum::http::header::USER_AGENT;
use axum::http::{HeaderMap, StatusCode};
use axum::Json;
use chrono::Utc;
use medsite_core::error::CoreError;
use medsite_core::types::DbId;
use medsite_db::models::admin::AdminUser;
use medsite_db::models::session::CreateSession;
use medsite_db::repositories::{AdminUserRepo, SessionRepo};
use serde::{Deserialize, Serialize};

use crate::auth::jwt::{generate_access_token, generate_refresh_token, hash_refresh_token};
use crate::auth::password::verify_password;
use crate::error::{AppError, AppResult};
use crate::middleware::auth::RequireAdmin;
use crate::state::AppState;

/// Longest user agent string stored with a session.
const MAX_USER_AGENT_LEN: usize = 512;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /auth/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Request body for `POST /auth/refresh`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshRequest {
    pub refresh_token: String,
}

/// Returned by login and refresh.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub access_token: String,
    pub refresh_token: String,
    /// Access token lifetime in seconds.
    pub expires_in: i64,
    pub user: AdminInfo,
}

#[derive(Debug, Serialize)]
pub struct AdminInfo {
    pub id: DbId,
    pub username: String,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/auth/login
///
/// Exchange username + password for an access token and a refresh token.
pub async fn login(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(input): Json<LoginRequest>,
) -> AppResult<Json<AuthResponse>> {
    let user = AdminUserRepo::find_by_username(&state.pool, input.username.trim())
        .await?
        .ok_or_else(invalid_credentials)?;

    let password_valid = verify_password(&input.password, &user.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;
    if !password_valid {
        tracing::warn!(username = %user.username, "Failed admin login");
        return Err(invalid_credentials());
    }

    ensure_active(&user)?;
    AdminUserRepo::record_successful_login(&state.pool, user.id).await?;

    let response = start_session(&state, &user, user_agent(&headers)).await?;
    tracing::info!(user_id = user.id, "Admin logged in");

    Ok(Json(response))
}

/// POST /api/auth/refresh
///
/// Rotate a refresh token: the presented session is revoked and a new one
/// issued.
pub async fn refresh(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(input): Json<RefreshRequest>,
) -> AppResult<Json<AuthResponse>> {
    let token_hash = hash_refresh_token(&input.refresh_token);

    // Revoking is the gate: of concurrent refreshes with one token, only
    // the request whose UPDATE wins gets a session back.
    let session = SessionRepo::redeem_refresh_token(&state.pool, &token_hash)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Invalid or expired refresh token".into(),
            ))
        })?;

    let user = AdminUserRepo::find_by_id(&state.pool, session.admin_user_id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::Unauthorized("Admin no longer exists".into())))?;
    ensure_active(&user)?;

    let response = start_session(&state, &user, user_agent(&headers)).await?;
    Ok(Json(response))
}

/// POST /api/auth/logout
///
/// Revoke the session the presented access token belongs to. Returns 204.
pub async fn logout(admin: RequireAdmin, State(state): State<AppState>) -> AppResult<StatusCode> {
    SessionRepo::revoke(&state.pool, admin.session_id).await?;
    tracing::info!(
        user_id = admin.user_id,
        session_id = admin.session_id,
        "Admin logged out"
    );
    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Persist a new session and issue tokens bound to it.
async fn start_session(
    state: &AppState,
    user: &AdminUser,
    user_agent: Option<String>,
) -> AppResult<AuthResponse> {
    let jwt = &state.config.jwt;
    let (refresh_plaintext, refresh_hash) = generate_refresh_token();

    let session = SessionRepo::create(
        &state.pool,
        &CreateSession {
            admin_user_id: user.id,
            refresh_token_hash: refresh_hash,
            expires_at: Utc::now() + chrono::Duration::days(jwt.refresh_token_expiry_days),
            user_agent,
        },
    )
    .await?;

    let access_token = generate_access_token(user.id, session.id, jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    Ok(AuthResponse {
        access_token,
        refresh_token: refresh_plaintext,
        expires_in: jwt.access_token_expiry_mins * 60,
        user: AdminInfo {
            id: user.id,
            username: user.username.clone(),
        },
    })
}

fn ensure_active(user: &AdminUser) -> AppResult<()> {
    if !user.is_active {
        return Err(AppError::Core(CoreError::Forbidden(
            "Account is deactivated".into(),
        )));
    }
    Ok(())
}

fn invalid_credentials() -> AppError {
    AppError::Core(CoreError::Unauthorized(
        "Invalid username or password".into(),
    ))
}

fn user_agent(headers: &HeaderMap) -> Option<String> {
    headers
        .get(USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .map(|s| s.chars().take(MAX_USER_AGENT_LEN).collect())
}
