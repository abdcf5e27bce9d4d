//! Wire types as served by the content API (camelCase JSON).
//!
//! Every record type is also what create/save calls send: the server reads
//! the editable fields and ignores `id` and the timestamps. Singleton types
//! implement [`Default`] with the placeholder content the public site shows
//! before an admin has saved anything.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

pub type Id = i64;

/// Icon used by services, facilities and departments that do not name one.
pub const DEFAULT_ICON_NAME: &str = "HelpCircle";

fn default_icon_name() -> String {
    DEFAULT_ICON_NAME.to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteSettings {
    #[serde(default)]
    pub id: Id,
    pub hospital_name: String,
    pub logo_url: Option<String>,
    pub facebook_url: Option<String>,
    pub tiktok_url: Option<String>,
    pub telegram_url: Option<String>,
    #[serde(default, skip_serializing)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            id: 0,
            hospital_name: "Our Hospital".to_string(),
            logo_url: None,
            facebook_url: None,
            tiktok_url: None,
            telegram_url: None,
            created_at: None,
            updated_at: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AboutContent {
    #[serde(default)]
    pub id: Id,
    pub title: String,
    pub description: String,
    pub mission: String,
    pub vision: String,
    pub image_url: Option<String>,
    pub image_hint: Option<String>,
    #[serde(default, skip_serializing)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Default for AboutContent {
    fn default() -> Self {
        Self {
            id: 0,
            title: "About Our Hospital".to_string(),
            description: "We provide comprehensive medical care to our community.".to_string(),
            mission: "To deliver compassionate, high-quality care to every patient.".to_string(),
            vision: "A healthier community for everyone.".to_string(),
            image_url: None,
            image_hint: None,
            created_at: None,
            updated_at: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactInfo {
    #[serde(default)]
    pub id: Id,
    pub address: String,
    pub phone: String,
    pub email: String,
    pub map_placeholder: Option<String>,
    #[serde(default, skip_serializing)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Default for ContactInfo {
    fn default() -> Self {
        Self {
            id: 0,
            address: "Address not available".to_string(),
            phone: "Phone not available".to_string(),
            email: "info@hospital.example".to_string(),
            map_placeholder: None,
            created_at: None,
            updated_at: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroSlide {
    #[serde(default)]
    pub id: Id,
    pub src: String,
    pub alt: String,
    pub hint: Option<String>,
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub cta_link: Option<String>,
    pub cta_text: Option<String>,
    pub position: Option<i32>,
    #[serde(default, skip_serializing)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Shape shared by services, facilities and departments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    #[serde(default)]
    pub id: Id,
    pub name: String,
    pub description: String,
    pub detailed_description: String,
    #[serde(default = "default_icon_name")]
    pub icon_name: String,
    #[serde(default, skip_serializing)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing)]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Facility {
    #[serde(default)]
    pub id: Id,
    pub name: String,
    pub description: String,
    pub detailed_description: String,
    #[serde(default = "default_icon_name")]
    pub icon_name: String,
    pub image_url: Option<String>,
    pub image_hint: Option<String>,
    #[serde(default, skip_serializing)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing)]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Department {
    #[serde(default)]
    pub id: Id,
    pub name: String,
    pub description: String,
    pub detailed_description: String,
    #[serde(default = "default_icon_name")]
    pub icon_name: String,
    pub head_of_department_image: Option<String>,
    pub head_of_department_image_hint: Option<String>,
    #[serde(default, skip_serializing)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// `photo` or `video`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GalleryItemType {
    #[default]
    Photo,
    Video,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryItem {
    #[serde(default)]
    pub id: Id,
    #[serde(rename = "type")]
    pub item_type: GalleryItemType,
    pub src: String,
    pub alt: String,
    pub hint: Option<String>,
    pub position: Option<i32>,
    #[serde(default, skip_serializing)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing)]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsEvent {
    #[serde(default)]
    pub id: Id,
    pub title: String,
    pub date: NaiveDate,
    pub summary: String,
    pub full_content: String,
    pub image: String,
    /// Unique slug, e.g. `/open-day-2026`.
    pub link: String,
    pub hint: Option<String>,
    #[serde(default, skip_serializing)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Response of `POST /api/upload`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadedFile {
    /// Public path to store in a media field, e.g. `/uploads/<name>.png`.
    pub url: String,
    /// `image` or `video`.
    pub file_type: String,
    pub file_name: String,
    pub file_size: u64,
}

/// Tokens returned by login.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthSession {
    pub access_token: String,
    pub refresh_token: String,
    /// Access token lifetime in seconds.
    pub expires_in: i64,
    pub user: AdminUser,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AdminUser {
    pub id: Id,
    pub username: String,
}
