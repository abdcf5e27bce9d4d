//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod admin_user_repo;
pub mod content_repo;
pub mod session_repo;

pub use admin_user_repo::AdminUserRepo;
pub use content_repo::{ContentRepo, SingletonRepo};
pub use session_repo::SessionRepo;
