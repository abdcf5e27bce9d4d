use chrono::NaiveDate;
use medsite_core::resources;
use medsite_core::schema::ResourceSchema;
use medsite_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

use crate::Resource;

/// A row from the `news_events` table. `link` is the unique slug.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsEvent {
    pub id: DbId,
    pub title: String,
    #[serde(rename = "date")]
    pub event_date: NaiveDate,
    pub summary: String,
    pub full_content: String,
    pub image: String,
    pub link: String,
    pub hint: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Resource for NewsEvent {
    fn schema() -> &'static ResourceSchema {
        &resources::NEWS_EVENTS
    }

    fn id(&self) -> DbId {
        self.id
    }
}
