//! Request handlers.
//!
//! [`content`] and [`singleton`] are generic over a [`medsite_db::Resource`]
//! and are mounted once per content type; the rest are specific endpoints.

pub mod auth;
pub mod content;
pub mod news_events;
pub mod singleton;
pub mod upload;
