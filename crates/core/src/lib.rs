//! Domain layer for the hospital website content service.
//!
//! Everything here is pure: no database, no HTTP, no filesystem. The db and
//! api crates build on these types.

pub mod error;
pub mod media;
pub mod resources;
pub mod schema;
pub mod types;
pub mod upload;
pub mod validation;
