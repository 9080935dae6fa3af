use axum::{
    Json,
    extract::{Multipart, State},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::{NaiveDate, NaiveTime, Utc};
use common::config;
use db::models::event;
use sea_orm::DatabaseConnection;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;

use crate::response::ApiError;

const MAX_IMAGE_SIZE: u64 = 2 * 1024 * 1024;

/// POST /createEvent
///
/// Creates an event from a multipart form. Admin-only (guarded by the route
/// layer). Text fields: `title`, `description`, `date` (`YYYY-MM-DD`),
/// `time` (`HH:MM` or `HH:MM:SS`), `location`; optional file field `image`.
///
/// An attached image is written under the upload storage root, named by the
/// upload timestamp plus the original extension, and referenced from the
/// event as `/uploads/<filename>`.
///
/// ### Responses
/// - `201 Created` — the created event
/// - `400 Bad Request` — missing or malformed fields, oversized image
/// - `401 Unauthorized` / `403 Forbidden` — from the guard
/// - `500 Internal Server Error`
pub async fn create_event(
    State(db): State<DatabaseConnection>,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, ApiError> {
    let mut title = None;
    let mut description = None;
    let mut date = None;
    let mut time = None;
    let mut location = None;
    let mut image: Option<(String, axum::body::Bytes)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|_| ApiError::Validation("Malformed multipart body".into()))?
    {
        let name = field.name().map(str::to_owned);
        match name.as_deref() {
            Some("title") => title = Some(read_text(field).await?),
            Some("description") => description = Some(read_text(field).await?),
            Some("date") => date = Some(read_text(field).await?),
            Some("time") => time = Some(read_text(field).await?),
            Some("location") => location = Some(read_text(field).await?),
            Some("image") => {
                let ext = field
                    .file_name()
                    .and_then(|n| Path::new(n).extension())
                    .map(|e| format!(".{}", e.to_string_lossy()))
                    .unwrap_or_default();

                let bytes = field
                    .bytes()
                    .await
                    .map_err(|_| ApiError::Validation("Malformed multipart body".into()))?;

                if bytes.len() as u64 > MAX_IMAGE_SIZE {
                    return Err(ApiError::Validation("Image too large".into()));
                }

                if !bytes.is_empty() {
                    image = Some((ext, bytes));
                }
            }
            _ => {}
        }
    }

    let (Some(title), Some(description), Some(date), Some(time), Some(location)) =
        (title, description, date, time, location)
    else {
        return Err(ApiError::Validation("Missing required fields".into()));
    };

    if [&title, &description, &date, &time, &location]
        .iter()
        .any(|v| v.trim().is_empty())
    {
        return Err(ApiError::Validation("Missing required fields".into()));
    }

    let date = NaiveDate::parse_from_str(&date, "%Y-%m-%d")
        .map_err(|_| ApiError::Validation("Invalid date, expected YYYY-MM-DD".into()))?;
    let time = NaiveTime::parse_from_str(&time, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(&time, "%H:%M"))
        .map_err(|_| ApiError::Validation("Invalid time, expected HH:MM".into()))?;

    let image_path = match image {
        Some((ext, bytes)) => Some(store_image(&ext, &bytes).await?),
        None => None,
    };

    let created = event::Model::create(
        &db,
        &title,
        &description,
        date,
        time,
        &location,
        image_path.as_deref(),
    )
    .await
    .map_err(|e| ApiError::internal("Failed to create event", e))?;

    Ok((StatusCode::CREATED, Json(created)))
}

async fn read_text(field: axum::extract::multipart::Field<'_>) -> Result<String, ApiError> {
    field
        .text()
        .await
        .map_err(|_| ApiError::Validation("Malformed multipart body".into()))
}

/// Writes the uploaded image under the storage root, keyed by upload
/// timestamp plus the original extension, and returns its reference path.
async fn store_image(ext: &str, bytes: &[u8]) -> Result<String, ApiError> {
    let root = config::upload_storage_root();
    fs::create_dir_all(&root)
        .await
        .map_err(|e| ApiError::internal("Failed to store image", e))?;

    let filename = format!("{}{}", Utc::now().timestamp_millis(), ext);
    let path = PathBuf::from(&root).join(&filename);

    let mut file = fs::File::create(&path)
        .await
        .map_err(|e| ApiError::internal("Failed to store image", e))?;
    file.write_all(bytes)
        .await
        .map_err(|e| ApiError::internal("Failed to store image", e))?;

    Ok(format!("/uploads/{filename}"))
}
