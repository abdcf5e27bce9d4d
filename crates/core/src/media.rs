//! Rules for URL-like field values: media references, external links and
//! news slugs.

use std::sync::LazyLock;

use regex::Regex;
use validator::ValidateUrl;

/// Public URL prefix under which uploaded files are served.
pub const UPLOAD_URL_PREFIX: &str = "/uploads/";

/// A path produced by the upload handler: `/uploads/<name>` with a single
/// safe path segment.
static UPLOAD_PATH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^/uploads/[A-Za-z0-9][A-Za-z0-9_-]*(\.[A-Za-z0-9]+)?$")
        .expect("upload path pattern is valid")
});

/// `true` for an absolute `http://` or `https://` URL with a host.
pub fn is_absolute_http_url(value: &str) -> bool {
    let lower = value.to_ascii_lowercase();
    let has_scheme = lower.starts_with("http://") || lower.starts_with("https://");
    has_scheme && value.to_owned().validate_url()
}

/// `true` for a public path produced by the upload handler.
pub fn is_upload_path(value: &str) -> bool {
    UPLOAD_PATH.is_match(value)
}

/// Image and video fields accept either an absolute URL or an upload path.
pub fn is_valid_media_url(value: &str) -> bool {
    is_absolute_http_url(value) || is_upload_path(value)
}

/// Build the public URL of a stored upload.
pub fn upload_url(stored_name: &str) -> String {
    format!("{UPLOAD_URL_PREFIX}{stored_name}")
}

/// Normalize a news slug: trimmed, prefixed with `/`, no whitespace.
///
/// Returns `None` when the slug is empty or contains whitespace.
pub fn normalize_slug(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() || trimmed == "/" || trimmed.chars().any(char::is_whitespace) {
        return None;
    }
    if trimmed.starts_with('/') {
        Some(trimmed.to_string())
    } else {
        Some(format!("/{trimmed}"))
    }
}
