//! Upload policy: which files are accepted, how large they may be, and how
//! they are named on disk.

use std::path::Path;

use serde::Serialize;
use uuid::Uuid;

use crate::error::CoreError;

const MIB: u64 = 1024 * 1024;

/// Maximum accepted image size (5 MiB).
pub const IMAGE_MAX_BYTES: u64 = 5 * MIB;

/// Maximum accepted video size (50 MiB).
pub const VIDEO_MAX_BYTES: u64 = 50 * MIB;

/// Longest file extension carried over from the original name.
const MAX_EXTENSION_LEN: usize = 10;

/// Category of an accepted upload, derived from its MIME type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaCategory {
    Image,
    Video,
}

impl MediaCategory {
    /// Classify a MIME type by prefix. Anything other than `image/*` or
    /// `video/*` is rejected.
    pub fn from_mime(content_type: Option<&str>) -> Result<Self, CoreError> {
        let mime = content_type.unwrap_or("").trim().to_ascii_lowercase();
        if mime.starts_with("image/") {
            Ok(Self::Image)
        } else if mime.starts_with("video/") {
            Ok(Self::Video)
        } else {
            let shown = if mime.is_empty() { "unknown" } else { mime.as_str() };
            Err(CoreError::UploadRejected(format!(
                "Unsupported file type '{shown}'. Only images and videos are allowed"
            )))
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::Video => "video",
        }
    }

    pub fn max_bytes(self) -> u64 {
        match self {
            Self::Image => IMAGE_MAX_BYTES,
            Self::Video => VIDEO_MAX_BYTES,
        }
    }

    /// Reject `size` when it exceeds this category's ceiling.
    pub fn check_size(self, size: u64) -> Result<(), CoreError> {
        if size > self.max_bytes() {
            let label = match self {
                Self::Image => "Image",
                Self::Video => "Video",
            };
            return Err(CoreError::UploadRejected(format!(
                "{label} exceeds the {} MB limit",
                self.max_bytes() / MIB
            )));
        }
        Ok(())
    }
}

/// Lowercase alphanumeric extension of `original`, if it has a usable one.
pub fn sanitized_extension(original: &str) -> Option<String> {
    let ext = Path::new(original).extension()?.to_str()?;
    if ext.is_empty()
        || ext.len() > MAX_EXTENSION_LEN
        || !ext.chars().all(|c| c.is_ascii_alphanumeric())
    {
        return None;
    }
    Some(ext.to_ascii_lowercase())
}

/// Collision-free stored name: a random UUID plus the original extension.
pub fn stored_file_name(original: &str) -> String {
    let id = Uuid::new_v4().simple();
    match sanitized_extension(original) {
        Some(ext) => format!("{id}.{ext}"),
        None => id.to_string(),
    }
}
