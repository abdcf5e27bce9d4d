//! Handlers for singleton resources (site settings, about section, contact
//! details).
//!
//! A singleton is either Absent (never saved) or Present at the fixed id.
//! `POST` is an upsert: it inserts when Absent (201) and replaces the stored
//! fields when Present (200). `PUT` only patches an existing row.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use medsite_core::error::CoreError;
use medsite_core::types::{DbId, SINGLETON_ID};
use medsite_core::validation::{validate_create, validate_update};
use medsite_db::repositories::SingletonRepo;
use medsite_db::Resource;

use crate::error::{AppError, AppResult};
use crate::extract::{ApiPath, JsonBody};
use crate::middleware::auth::RequireAdmin;
use crate::state::AppState;

/// GET /api/{resource}
///
/// 404 while the singleton is Absent; clients substitute their defaults.
pub async fn fetch<R: Resource>(State(state): State<AppState>) -> AppResult<Json<R>> {
    SingletonRepo::<R>::fetch(&state.pool)
        .await?
        .map(Json)
        .ok_or_else(absent::<R>)
}

/// POST /api/{resource}
pub async fn save<R: Resource>(
    admin: RequireAdmin,
    State(state): State<AppState>,
    JsonBody(payload): JsonBody,
) -> AppResult<(StatusCode, Json<R>)> {
    let schema = R::schema();
    let values = validate_create(schema, &payload)?;
    let (row, inserted) = SingletonRepo::<R>::upsert(&state.pool, &values).await?;

    tracing::info!(
        entity = schema.entity,
        inserted,
        user_id = admin.user_id,
        "Singleton saved",
    );

    let status = if inserted {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };
    Ok((status, Json(row)))
}

/// PUT /api/{resource}
pub async fn update<R: Resource>(
    admin: RequireAdmin,
    State(state): State<AppState>,
    JsonBody(payload): JsonBody,
) -> AppResult<Json<R>> {
    patch::<R>(admin, &state, &payload).await
}

/// PUT /api/{resource}/{id}
///
/// Accepted for clients that address the singleton by id; any id other than
/// the fixed one is 404.
pub async fn update_by_id<R: Resource>(
    admin: RequireAdmin,
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
    JsonBody(payload): JsonBody,
) -> AppResult<Json<R>> {
    if id != SINGLETON_ID {
        return Err(AppError::Core(CoreError::NotFound {
            entity: R::schema().entity,
            id,
        }));
    }
    patch::<R>(admin, &state, &payload).await
}

async fn patch<R: Resource>(
    admin: RequireAdmin,
    state: &AppState,
    payload: &serde_json::Value,
) -> AppResult<Json<R>> {
    let schema = R::schema();
    let values = validate_update(schema, payload)?;
    let row = SingletonRepo::<R>::update(&state.pool, &values)
        .await?
        .ok_or_else(absent::<R>)?;

    tracing::info!(
        entity = schema.entity,
        fields = values.len(),
        user_id = admin.user_id,
        "Singleton updated",
    );

    Ok(Json(row))
}

fn absent<R: Resource>() -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: R::schema().entity,
        id: SINGLETON_ID,
    })
}
