//! Generic CRUD handlers for collection resources.
//!
//! Every handler is parameterized over the row model `R`; the model's schema
//! drives validation and the repository's SQL. Reads are public, writes
//! require an admin session.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use medsite_core::error::CoreError;
use medsite_core::types::DbId;
use medsite_core::validation::{validate_create, validate_update};
use medsite_db::repositories::ContentRepo;
use medsite_db::Resource;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::extract::{ApiPath, JsonBody};
use crate::middleware::auth::RequireAdmin;
use crate::state::AppState;

/// Body returned by a successful delete.
#[derive(Debug, Serialize)]
pub struct Deleted {
    pub deleted: bool,
    pub id: DbId,
}

/// GET /api/{resource}
pub async fn list<R: Resource>(State(state): State<AppState>) -> AppResult<Json<Vec<R>>> {
    let rows = ContentRepo::<R>::list(&state.pool).await?;
    Ok(Json(rows))
}

/// GET /api/{resource}/{id}
pub async fn get_by_id<R: Resource>(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<Json<R>> {
    ContentRepo::<R>::find_by_id(&state.pool, id)
        .await?
        .map(Json)
        .ok_or_else(|| not_found::<R>(id))
}

/// POST /api/{resource}
///
/// Validates the full payload (required fields, field kinds, defaults) and
/// returns 201 with the stored row.
pub async fn create<R: Resource>(
    admin: RequireAdmin,
    State(state): State<AppState>,
    JsonBody(payload): JsonBody,
) -> AppResult<(StatusCode, Json<R>)> {
    let schema = R::schema();
    let values = validate_create(schema, &payload)?;
    let row = ContentRepo::<R>::create(&state.pool, &values).await?;

    tracing::info!(
        entity = schema.entity,
        id = row.id(),
        user_id = admin.user_id,
        "Content created",
    );

    Ok((StatusCode::CREATED, Json(row)))
}

/// PUT /api/{resource}/{id}
///
/// Partial update: only recognized keys are written. A payload with none is
/// rejected before the database is touched.
pub async fn update<R: Resource>(
    admin: RequireAdmin,
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
    JsonBody(payload): JsonBody,
) -> AppResult<Json<R>> {
    let schema = R::schema();
    let values = validate_update(schema, &payload)?;
    let row = ContentRepo::<R>::update(&state.pool, id, &values)
        .await?
        .ok_or_else(|| not_found::<R>(id))?;

    tracing::info!(
        entity = schema.entity,
        id,
        fields = values.len(),
        user_id = admin.user_id,
        "Content updated",
    );

    Ok(Json(row))
}

/// DELETE /api/{resource}/{id}
pub async fn delete<R: Resource>(
    admin: RequireAdmin,
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<Json<Deleted>> {
    if !ContentRepo::<R>::delete(&state.pool, id).await? {
        return Err(not_found::<R>(id));
    }

    tracing::info!(
        entity = R::schema().entity,
        id,
        user_id = admin.user_id,
        "Content deleted",
    );

    Ok(Json(Deleted { deleted: true, id }))
}

fn not_found<R: Resource>(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: R::schema().entity,
        id,
    })
}
