//! Row models.
//!
//! Content models are `FromRow` + `Serialize` structs whose JSON shape is
//! camelCase; each implements [`Resource`](crate::Resource) to tie it to its
//! schema in `medsite_core::resources`. Create/update payloads for content
//! are validated against that schema rather than deserialized into DTOs.

pub mod admin;
pub mod catalog;
pub mod media;
pub mod news;
pub mod session;
pub mod site;

pub use catalog::{Department, Facility, Service};
pub use media::{GalleryItem, HeroSlide};
pub use news::NewsEvent;
pub use site::{AboutContent, ContactInfo, SiteSettings};
