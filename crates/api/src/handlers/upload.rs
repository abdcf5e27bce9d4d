//! Handler for `POST /api/upload`.
//!
//! Accepts a multipart form carrying exactly one file part. The file is
//! classified by its MIME type, streamed to the upload directory under a
//! random name, and rejected as soon as it crosses its category's size
//! ceiling. The public path it is served from is returned.

use std::path::Path;

use axum::extract::multipart::Field;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::Json;
use medsite_core::error::CoreError;
use medsite_core::media::upload_url;
use medsite_core::upload::{stored_file_name, MediaCategory, VIDEO_MAX_BYTES};
use serde::Serialize;
use tokio::io::AsyncWriteExt;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::RequireAdmin;
use crate::state::AppState;

/// Request body limit for the upload route: the largest accepted file plus
/// room for multipart framing.
pub const UPLOAD_BODY_LIMIT: usize = (VIDEO_MAX_BYTES + 1024 * 1024) as usize;

/// Successful upload response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    /// Public path, e.g. `/uploads/3f2a...e1.png`.
    pub url: String,
    pub file_type: MediaCategory,
    /// Original client-side file name.
    pub file_name: String,
    /// Bytes written.
    pub file_size: u64,
}

/// POST /api/upload
pub async fn upload_file(
    admin: RequireAdmin,
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> AppResult<(StatusCode, Json<UploadResponse>)> {
    let upload_dir = state.config.upload_dir.as_path();
    tokio::fs::create_dir_all(upload_dir).await?;

    let mut stored: Option<UploadResponse> = None;

    while let Some(field) = multipart.next_field().await.map_err(bad_multipart)? {
        // Plain form fields carry no file name and are ignored.
        let Some(original) = field.file_name().map(str::to_string) else {
            continue;
        };

        if let Some(previous) = stored.take() {
            remove_stored(upload_dir, &previous.url).await;
            return Err(too_many_files());
        }

        let category = MediaCategory::from_mime(field.content_type())?;
        let stored_name = stored_file_name(&original);
        let path = upload_dir.join(&stored_name);

        let file_size = match stream_to_disk(field, category, &path).await {
            Ok(size) => size,
            Err(e) => {
                let _ = tokio::fs::remove_file(&path).await;
                return Err(e);
            }
        };

        stored = Some(UploadResponse {
            url: upload_url(&stored_name),
            file_type: category,
            file_name: original,
            file_size,
        });
    }

    let response = stored.ok_or_else(|| {
        AppError::Core(CoreError::UploadRejected("No file uploaded".into()))
    })?;

    tracing::info!(
        url = %response.url,
        file_type = response.file_type.as_str(),
        file_size = response.file_size,
        user_id = admin.user_id,
        "File uploaded",
    );

    Ok((StatusCode::CREATED, Json(response)))
}

/// Write `field` to `path` chunk by chunk, enforcing the category ceiling
/// on the running total. Returns the number of bytes written.
async fn stream_to_disk(
    mut field: Field<'_>,
    category: MediaCategory,
    path: &Path,
) -> AppResult<u64> {
    let mut file = tokio::fs::File::create(path).await?;
    let mut size: u64 = 0;

    while let Some(chunk) = field.chunk().await.map_err(bad_multipart)? {
        size += chunk.len() as u64;
        category.check_size(size)?;
        file.write_all(&chunk).await?;
    }

    file.flush().await?;
    Ok(size)
}

async fn remove_stored(upload_dir: &Path, url: &str) {
    if let Some(name) = url.rsplit('/').next() {
        let _ = tokio::fs::remove_file(upload_dir.join(name)).await;
    }
}

fn too_many_files() -> AppError {
    AppError::Core(CoreError::UploadRejected(
        "Exactly one file may be uploaded per request".into(),
    ))
}

fn bad_multipart(err: axum::extract::multipart::MultipartError) -> AppError {
    AppError::BadRequest(format!("Invalid multipart body: {}", err.body_text()))
}
