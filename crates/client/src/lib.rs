//! Typed HTTP client for the hospital site content API.
//!
//! Read helpers never fail: on any fault they log, count the fallback and
//! return a renderable default so the public site stays up. Write helpers
//! return [`ClientError`] for the admin UI to report.

pub mod client;
pub mod config;
pub mod content;
pub mod error;
pub mod types;

pub use client::ApiClient;
pub use config::ClientConfig;
pub use error::ClientError;
