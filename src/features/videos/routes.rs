use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::services::ServeDir;

use crate::features::videos::handlers;
use crate::features::videos::services::VideoService;
use crate::shared::constants::{MULTIPART_OVERHEAD, UPLOADS_URL_PREFIX};

/// Create routes for the videos feature, including static serving of the upload directory
pub fn routes(service: Arc<VideoService>) -> Router {
    // Body limit sits above the upload limit so oversize files get the handler's 400
    let body_limit = service.max_upload_size().saturating_add(MULTIPART_OVERHEAD);
    let upload_dir = service.store().root().to_path_buf();

    Router::new()
        .route("/videos/", get(handlers::list_videos))
        .route(
            "/videos/{id}",
            get(handlers::get_video).delete(handlers::delete_video),
        )
        .route(
            "/upload-video/",
            post(handlers::upload_video).layer(DefaultBodyLimit::max(body_limit)),
        )
        .with_state(service)
        .nest_service(UPLOADS_URL_PREFIX, ServeDir::new(upload_dir))
}
