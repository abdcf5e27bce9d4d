//! Per-entity wrappers over the content endpoints.
//!
//! Collections get a plural list read (`get_services`), a singular lookup
//! (`get_service`), `create_*`, `update_*` and `delete_*`; singletons get
//! `get_*`, `save_*` and `update_*`. Updates take a JSON object holding only
//! the fields to change.

use reqwest::multipart::{Form, Part};
use reqwest::Method;
use serde_json::Value;

use crate::client::ApiClient;
use crate::error::ClientError;
use crate::types::{
    AboutContent, AuthSession, ContactInfo, Department, Facility, GalleryItem, HeroSlide, Id,
    NewsEvent, Service, SiteSettings, UploadedFile,
};

macro_rules! collection_api {
    ($ty:ty, $path:literal, $list:ident, $get:ident, $create:ident, $update:ident, $delete:ident) => {
        impl ApiClient {
            #[doc = concat!("`GET /api/", $path, "`; empty on failure.")]
            pub async fn $list(&self) -> Vec<$ty> {
                self.read_or_default(concat!("/api/", $path)).await
            }

            #[doc = concat!("`GET /api/", $path, "/{id}`; `None` when missing or on failure.")]
            pub async fn $get(&self, id: Id) -> Option<$ty> {
                self.read_optional(&format!(concat!("/api/", $path, "/{}"), id))
                    .await
            }

            #[doc = concat!("`POST /api/", $path, "`")]
            pub async fn $create(&self, record: &$ty) -> Result<$ty, ClientError> {
                self.send_json(Method::POST, concat!("/api/", $path), record)
                    .await
            }

            #[doc = concat!("`PUT /api/", $path, "/{id}` with a partial object.")]
            pub async fn $update(&self, id: Id, fields: &Value) -> Result<$ty, ClientError> {
                self.send_json(
                    Method::PUT,
                    &format!(concat!("/api/", $path, "/{}"), id),
                    fields,
                )
                .await
            }

            #[doc = concat!("`DELETE /api/", $path, "/{id}`")]
            pub async fn $delete(&self, id: Id) -> Result<(), ClientError> {
                let path = format!(concat!("/api/", $path, "/{}"), id);
                self.execute_empty(self.request(Method::DELETE, &path))
                    .await
            }
        }
    };
}

macro_rules! singleton_api {
    ($ty:ty, $path:literal, $get:ident, $save:ident, $update:ident) => {
        impl ApiClient {
            #[doc = concat!("`GET /api/", $path, "`; the default record when absent or on failure.")]
            pub async fn $get(&self) -> $ty {
                self.read_or_default(concat!("/api/", $path)).await
            }

            #[doc = concat!("`POST /api/", $path, "`: insert or replace.")]
            pub async fn $save(&self, record: &$ty) -> Result<$ty, ClientError> {
                self.send_json(Method::POST, concat!("/api/", $path), record)
                    .await
            }

            #[doc = concat!("`PUT /api/", $path, "` with a partial object.")]
            pub async fn $update(&self, fields: &Value) -> Result<$ty, ClientError> {
                self.send_json(Method::PUT, concat!("/api/", $path), fields)
                    .await
            }
        }
    };
}

singleton_api!(SiteSettings, "site-settings", get_site_settings, save_site_settings, update_site_settings);
singleton_api!(AboutContent, "about-content", get_about_content, save_about_content, update_about_content);
singleton_api!(ContactInfo, "contact-info", get_contact_info, save_contact_info, update_contact_info);

collection_api!(HeroSlide, "hero-slides", get_hero_slides, get_hero_slide, create_hero_slide, update_hero_slide, delete_hero_slide);
collection_api!(Service, "services", get_services, get_service, create_service, update_service, delete_service);
collection_api!(Facility, "facilities", get_facilities, get_facility, create_facility, update_facility, delete_facility);
collection_api!(Department, "departments", get_departments, get_department, create_department, update_department, delete_department);
collection_api!(GalleryItem, "gallery-items", get_gallery_items, get_gallery_item, create_gallery_item, update_gallery_item, delete_gallery_item);
collection_api!(NewsEvent, "news-events", get_news_events, get_news_event, create_news_event, update_news_event, delete_news_event);

impl ApiClient {
    /// `GET /api/news-events/by-link?link=...`; `None` when missing or on failure.
    pub async fn get_news_event_by_link(&self, link: &str) -> Option<NewsEvent> {
        let builder = self
            .request(Method::GET, "/api/news-events/by-link")
            .query(&[("link", link)]);
        self.read_optional_with("/api/news-events/by-link", builder)
            .await
    }

    /// `POST /api/upload` with a single file part named `file`.
    pub async fn upload_file(
        &self,
        file_name: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<UploadedFile, ClientError> {
        let part = Part::bytes(bytes)
            .file_name(file_name.to_string())
            .mime_str(content_type)?;
        let form = Form::new().part("file", part);
        self.execute(self.request(Method::POST, "/api/upload").multipart(form))
            .await
    }

    /// `POST /api/auth/login`. Use [`ApiClient::with_token`] with the
    /// returned access token for writes.
    pub async fn login(&self, username: &str, password: &str) -> Result<AuthSession, ClientError> {
        let body = serde_json::json!({ "username": username, "password": password });
        self.send_json(Method::POST, "/api/auth/login", &body).await
    }

    /// `POST /api/auth/logout`: revoke the session of the current token.
    pub async fn logout(&self) -> Result<(), ClientError> {
        self.execute_empty(self.request(Method::POST, "/api/auth/logout"))
            .await
    }
}
