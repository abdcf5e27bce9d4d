//! Singleton content: site settings, about section, contact details.

use medsite_core::resources;
use medsite_core::schema::ResourceSchema;
use medsite_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

use crate::Resource;

/// The single row of `site_settings`.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteSettings {
    pub id: DbId,
    pub hospital_name: String,
    pub logo_url: Option<String>,
    pub facebook_url: Option<String>,
    pub tiktok_url: Option<String>,
    pub telegram_url: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Resource for SiteSettings {
    fn schema() -> &'static ResourceSchema {
        &resources::SITE_SETTINGS
    }

    fn id(&self) -> DbId {
        self.id
    }
}

/// The single row of `about_content`.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AboutContent {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub mission: String,
    pub vision: String,
    pub image_url: Option<String>,
    pub image_hint: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Resource for AboutContent {
    fn schema() -> &'static ResourceSchema {
        &resources::ABOUT_CONTENT
    }

    fn id(&self) -> DbId {
        self.id
    }
}

/// The single row of `contact_info`.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactInfo {
    pub id: DbId,
    pub address: String,
    pub phone: String,
    pub email: String,
    pub map_placeholder: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Resource for ContactInfo {
    fn schema() -> &'static ResourceSchema {
        &resources::CONTACT_INFO
    }

    fn id(&self) -> DbId {
        self.id
    }
}
