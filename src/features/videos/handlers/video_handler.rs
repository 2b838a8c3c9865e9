use axum::{
    extract::{Multipart, Path, State},
    Json,
};
use std::sync::Arc;
use tracing::debug;

use crate::core::error::{AppError, Result};
use crate::features::videos::dtos::{UploadVideoDto, UploadVideoResponse, VideoResponse};
use crate::features::videos::services::VideoService;
use crate::shared::types::{ErrorResponse, MessageResponse};

/// List all uploaded videos
#[utoipa::path(
    get,
    path = "/videos/",
    responses(
        (status = 200, description = "Uploaded videos", body = Vec<VideoResponse>),
    ),
    tag = "videos"
)]
pub async fn list_videos(
    State(service): State<Arc<VideoService>>,
) -> Result<Json<Vec<VideoResponse>>> {
    let videos = service.list().await?;
    Ok(Json(videos))
}

#[utoipa::path(
    get,
    path = "/videos/{id}",
    params(
        ("id" = i64, Path, description = "Video ID")
    ),
    responses(
        (status = 200, description = "Video found", body = VideoResponse),
        (status = 404, description = "Video not found", body = ErrorResponse)
    ),
    tag = "videos"
)]
pub async fn get_video(
    State(service): State<Arc<VideoService>>,
    Path(id): Path<i64>,
) -> Result<Json<VideoResponse>> {
    let video = service.get(id).await?;
    Ok(Json(video))
}

/// Upload a video
///
/// Accepts multipart/form-data with a single `file` field. The file is
/// stored under its own filename and served at `/uploads/{filename}`.
#[utoipa::path(
    post,
    path = "/upload-video/",
    tag = "videos",
    request_body(
        content = UploadVideoDto,
        content_type = "multipart/form-data",
        description = "Video file upload",
    ),
    responses(
        (status = 200, description = "Video uploaded", body = UploadVideoResponse),
        (status = 400, description = "Missing file, invalid filename or file too large", body = ErrorResponse)
    )
)]
pub async fn upload_video(
    State(service): State<Arc<VideoService>>,
    mut multipart: Multipart,
) -> Result<Json<UploadVideoResponse>> {
    let mut upload: Option<(String, Vec<u8>)> = None;

    while let Some(field) = multipart.next_field().await.map_err(|e| {
        debug!("Failed to read multipart field: {}", e);
        AppError::BadRequest(format!("Failed to read multipart data: {}", e))
    })? {
        if field.name() != Some("file") {
            debug!("Ignoring unknown field: {:?}", field.name());
            continue;
        }

        let filename = field
            .file_name()
            .map(|s| s.to_string())
            .ok_or_else(|| AppError::BadRequest("Filename is required".to_string()))?;

        let data = field.bytes().await.map_err(|e| {
            debug!("Failed to read file bytes: {}", e);
            AppError::BadRequest(format!("Failed to read file data: {}", e))
        })?;

        upload = Some((filename, data.to_vec()));
    }

    let (filename, data) =
        upload.ok_or_else(|| AppError::BadRequest("File is required".to_string()))?;

    let response = service.upload(&filename, &data).await?;
    Ok(Json(response))
}

#[utoipa::path(
    delete,
    path = "/videos/{id}",
    params(
        ("id" = i64, Path, description = "Video ID")
    ),
    responses(
        (status = 200, description = "Video deleted", body = MessageResponse),
        (status = 404, description = "Video not found", body = ErrorResponse)
    ),
    tag = "videos"
)]
pub async fn delete_video(
    State(service): State<Arc<VideoService>>,
    Path(id): Path<i64>,
) -> Result<Json<MessageResponse>> {
    service.delete(id).await?;
    Ok(Json(MessageResponse::new("Video deleted successfully")))
}
