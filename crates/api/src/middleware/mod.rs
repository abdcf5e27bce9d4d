//! Request extractors that enforce authentication.
//!
//! - [`auth::RequireAdmin`] -- a valid admin access token backed by a live session.

pub mod auth;
