//! News-specific lookups beyond the generic collection handlers.

use axum::extract::State;
use axum::Json;
use medsite_core::error::CoreError;
use medsite_core::media::normalize_slug;
use medsite_db::models::NewsEvent;
use medsite_db::repositories::ContentRepo;
use medsite_db::Resource;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::extract::ApiQuery;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct LinkQuery {
    pub link: String,
}

/// GET /api/news-events/by-link?link=/slug
///
/// The slug is normalized the same way it is on write, so `open-day` and
/// `/open-day` find the same article.
pub async fn get_by_link(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<LinkQuery>,
) -> AppResult<Json<NewsEvent>> {
    let link = normalize_slug(&query.link).ok_or_else(|| {
        AppError::Core(CoreError::Validation(
            "Query parameter 'link' must be a path segment without spaces".into(),
        ))
    })?;

    ContentRepo::<NewsEvent>::find_by_unique(&state.pool, "link", &link)
        .await?
        .map(Json)
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFoundByKey {
                entity: NewsEvent::schema().entity,
                key: link,
            })
        })
}
