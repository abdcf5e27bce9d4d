//! Startup seeding of the first admin account.

use medsite_db::models::admin::CreateAdminUser;
use medsite_db::repositories::AdminUserRepo;
use sqlx::PgPool;

use crate::auth::password::hash_password;
use crate::config::AdminCredentials;
use crate::error::{AppError, AppResult};

/// Create the admin account from `credentials` if no admin exists yet.
///
/// Returns `true` when an account was created. Existing accounts are never
/// modified, so changing `ADMIN_PASSWORD` after the first start has no
/// effect.
pub async fn ensure_admin(
    pool: &PgPool,
    credentials: Option<&AdminCredentials>,
) -> AppResult<bool> {
    if AdminUserRepo::count(pool).await? > 0 {
        return Ok(false);
    }

    let Some(credentials) = credentials else {
        tracing::warn!(
            "No admin account exists and ADMIN_USERNAME/ADMIN_PASSWORD are unset; \
             content cannot be edited"
        );
        return Ok(false);
    };

    let password_hash = hash_password(&credentials.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;
    let admin = AdminUserRepo::create(
        pool,
        &CreateAdminUser {
            username: credentials.username.clone(),
            password_hash,
        },
    )
    .await?;

    tracing::info!(user_id = admin.id, username = %admin.username, "Bootstrap admin created");
    Ok(true)
}
