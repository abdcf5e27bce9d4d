//! Position-ordered media collections: hero carousel and gallery.

use medsite_core::resources;
use medsite_core::schema::ResourceSchema;
use medsite_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

use crate::Resource;

/// A row from the `hero_slides` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroSlide {
    pub id: DbId,
    pub src: String,
    pub alt: String,
    pub hint: Option<String>,
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub cta_link: Option<String>,
    pub cta_text: Option<String>,
    pub position: Option<i32>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Resource for HeroSlide {
    fn schema() -> &'static ResourceSchema {
        &resources::HERO_SLIDES
    }

    fn id(&self) -> DbId {
        self.id
    }
}

/// A row from the `gallery_items` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryItem {
    pub id: DbId,
    /// `photo` or `video`.
    #[serde(rename = "type")]
    pub item_type: String,
    pub src: String,
    pub alt: String,
    pub hint: Option<String>,
    pub position: Option<i32>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Resource for GalleryItem {
    fn schema() -> &'static ResourceSchema {
        &resources::GALLERY_ITEMS
    }

    fn id(&self) -> DbId {
        self.id
    }
}
