//! Schemas of the nine content resources served by the site.

use crate::schema::{FieldKind, FieldSpec, ListOrder, ResourceKind, ResourceSchema};

/// Icon shown when a service, facility or department does not name one.
pub const DEFAULT_ICON_NAME: &str = "HelpCircle";

/// Allowed values of `GalleryItem.type`.
pub const GALLERY_ITEM_TYPES: &[&str] = &["photo", "video"];

const fn media(key: &'static str, column: &'static str) -> FieldSpec {
    FieldSpec::new(key, column, FieldKind::Media)
}

const fn link(key: &'static str, column: &'static str) -> FieldSpec {
    FieldSpec::new(key, column, FieldKind::Link)
}

const fn position() -> FieldSpec {
    FieldSpec::new("position", "position", FieldKind::Int)
}

pub static SITE_SETTINGS: ResourceSchema = ResourceSchema {
    entity: "SiteSettings",
    table: "site_settings",
    path: "site-settings",
    kind: ResourceKind::Singleton,
    order: ListOrder::Newest,
    fields: &[
        FieldSpec::text("hospitalName", "hospital_name").required(),
        media("logoUrl", "logo_url"),
        link("facebookUrl", "facebook_url"),
        link("tiktokUrl", "tiktok_url"),
        link("telegramUrl", "telegram_url"),
    ],
};

pub static HERO_SLIDES: ResourceSchema = ResourceSchema {
    entity: "HeroSlide",
    table: "hero_slides",
    path: "hero-slides",
    kind: ResourceKind::Collection,
    order: ListOrder::Position,
    fields: &[
        media("src", "src").required(),
        FieldSpec::text("alt", "alt").required(),
        FieldSpec::text("hint", "hint"),
        FieldSpec::text("title", "title"),
        FieldSpec::text("subtitle", "subtitle"),
        FieldSpec::text("ctaLink", "cta_link"),
        FieldSpec::text("ctaText", "cta_text"),
        position(),
    ],
};

pub static ABOUT_CONTENT: ResourceSchema = ResourceSchema {
    entity: "AboutContent",
    table: "about_content",
    path: "about-content",
    kind: ResourceKind::Singleton,
    order: ListOrder::Newest,
    fields: &[
        FieldSpec::text("title", "title").required(),
        FieldSpec::text("description", "description").required(),
        FieldSpec::text("mission", "mission").required(),
        FieldSpec::text("vision", "vision").required(),
        media("imageUrl", "image_url"),
        FieldSpec::text("imageHint", "image_hint"),
    ],
};

pub static SERVICES: ResourceSchema = ResourceSchema {
    entity: "Service",
    table: "services",
    path: "services",
    kind: ResourceKind::Collection,
    order: ListOrder::Newest,
    fields: &[
        FieldSpec::text("name", "name").required(),
        FieldSpec::text("description", "description").required(),
        FieldSpec::text("detailedDescription", "detailed_description").required(),
        FieldSpec::text("iconName", "icon_name").with_default(DEFAULT_ICON_NAME),
    ],
};

pub static FACILITIES: ResourceSchema = ResourceSchema {
    entity: "Facility",
    table: "facilities",
    path: "facilities",
    kind: ResourceKind::Collection,
    order: ListOrder::Newest,
    fields: &[
        FieldSpec::text("name", "name").required(),
        FieldSpec::text("description", "description").required(),
        FieldSpec::text("detailedDescription", "detailed_description").required(),
        FieldSpec::text("iconName", "icon_name").with_default(DEFAULT_ICON_NAME),
        media("imageUrl", "image_url"),
        FieldSpec::text("imageHint", "image_hint"),
    ],
};

pub static DEPARTMENTS: ResourceSchema = ResourceSchema {
    entity: "Department",
    table: "departments",
    path: "departments",
    kind: ResourceKind::Collection,
    order: ListOrder::Newest,
    fields: &[
        FieldSpec::text("name", "name").required(),
        FieldSpec::text("description", "description").required(),
        FieldSpec::text("detailedDescription", "detailed_description").required(),
        FieldSpec::text("iconName", "icon_name").with_default(DEFAULT_ICON_NAME),
        media("headOfDepartmentImage", "head_of_department_image"),
        FieldSpec::text("headOfDepartmentImageHint", "head_of_department_image_hint"),
    ],
};

pub static GALLERY_ITEMS: ResourceSchema = ResourceSchema {
    entity: "GalleryItem",
    table: "gallery_items",
    path: "gallery-items",
    kind: ResourceKind::Collection,
    order: ListOrder::Position,
    fields: &[
        FieldSpec::new("type", "item_type", FieldKind::Enum(GALLERY_ITEM_TYPES)).required(),
        media("src", "src").required(),
        FieldSpec::text("alt", "alt").required(),
        FieldSpec::text("hint", "hint"),
        position(),
    ],
};

pub static NEWS_EVENTS: ResourceSchema = ResourceSchema {
    entity: "NewsEvent",
    table: "news_events",
    path: "news-events",
    kind: ResourceKind::Collection,
    order: ListOrder::Newest,
    fields: &[
        FieldSpec::text("title", "title").required(),
        FieldSpec::new("date", "event_date", FieldKind::Date).required(),
        FieldSpec::text("summary", "summary").required(),
        FieldSpec::text("fullContent", "full_content").required(),
        media("image", "image").required(),
        FieldSpec::new("link", "link", FieldKind::Slug)
            .required()
            .unique(),
        FieldSpec::text("hint", "hint"),
    ],
};

pub static CONTACT_INFO: ResourceSchema = ResourceSchema {
    entity: "ContactInfo",
    table: "contact_info",
    path: "contact-info",
    kind: ResourceKind::Singleton,
    order: ListOrder::Newest,
    fields: &[
        FieldSpec::text("address", "address").required(),
        FieldSpec::text("phone", "phone").required(),
        FieldSpec::new("email", "email", FieldKind::Email).required(),
        FieldSpec::text("mapPlaceholder", "map_placeholder"),
    ],
};

/// Every resource schema, in the order they appear on the public site.
pub static ALL: &[&ResourceSchema] = &[
    &SITE_SETTINGS,
    &HERO_SLIDES,
    &ABOUT_CONTENT,
    &SERVICES,
    &FACILITIES,
    &DEPARTMENTS,
    &GALLERY_ITEMS,
    &NEWS_EVENTS,
    &CONTACT_INFO,
];
