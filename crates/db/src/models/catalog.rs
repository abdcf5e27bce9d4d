//! Services, facilities and departments: the three icon-card catalogs.

use medsite_core::resources;
use medsite_core::schema::ResourceSchema;
use medsite_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

use crate::Resource;

/// A row from the `services` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub id: DbId,
    pub name: String,
    pub description: String,
    pub detailed_description: String,
    pub icon_name: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Resource for Service {
    fn schema() -> &'static ResourceSchema {
        &resources::SERVICES
    }

    fn id(&self) -> DbId {
        self.id
    }
}

/// A row from the `facilities` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Facility {
    pub id: DbId,
    pub name: String,
    pub description: String,
    pub detailed_description: String,
    pub icon_name: String,
    pub image_url: Option<String>,
    pub image_hint: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Resource for Facility {
    fn schema() -> &'static ResourceSchema {
        &resources::FACILITIES
    }

    fn id(&self) -> DbId {
        self.id
    }
}

/// A row from the `departments` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Department {
    pub id: DbId,
    pub name: String,
    pub description: String,
    pub detailed_description: String,
    pub icon_name: String,
    pub head_of_department_image: Option<String>,
    pub head_of_department_image_hint: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Resource for Department {
    fn schema() -> &'static ResourceSchema {
        &resources::DEPARTMENTS
    }

    fn id(&self) -> DbId {
        self.id
    }
}
