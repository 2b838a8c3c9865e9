use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::features::videos::models::Video;

/// Upload video request DTO for OpenAPI documentation
/// Note: This struct is for Swagger UI documentation only.
/// The actual handler uses axum's Multipart extractor directly.
#[derive(Debug, ToSchema)]
#[allow(dead_code)]
pub struct UploadVideoDto {
    /// The video file; its filename is used verbatim as the stored name
    #[schema(format = Binary, content_media_type = "application/octet-stream")]
    pub file: String,
}

/// Response DTO for a completed upload
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UploadVideoResponse {
    pub filename: String,
    pub id: i64,
}

/// Stored representation of a video
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct VideoResponse {
    pub id: i64,
    pub filename: String,
    pub uploaded_at: DateTime<Utc>,
}

impl From<Video> for VideoResponse {
    fn from(v: Video) -> Self {
        Self {
            id: v.id,
            filename: v.filename,
            uploaded_at: v.uploaded_at,
        }
    }
}
