use utoipa::{Modify, OpenApi};

use crate::features::items::{dtos as items_dtos, handlers as items_handlers};
use crate::features::videos::{dtos as videos_dtos, handlers as videos_handlers};
use crate::shared::types::{ErrorResponse, MessageResponse};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Items
        items_handlers::create_item,
        items_handlers::list_items,
        items_handlers::get_item,
        items_handlers::update_item,
        items_handlers::delete_item,
        items_handlers::reorder_items,
        // Videos
        videos_handlers::list_videos,
        videos_handlers::get_video,
        videos_handlers::upload_video,
        videos_handlers::delete_video,
    ),
    components(
        schemas(
            // Shared
            MessageResponse,
            ErrorResponse,
            // Items
            items_dtos::ItemPayload,
            items_dtos::ItemResponse,
            // Videos
            videos_dtos::UploadVideoDto,
            videos_dtos::UploadVideoResponse,
            videos_dtos::VideoResponse,
        )
    ),
    tags(
        (name = "items", description = "Inventory items with manual ordering"),
        (name = "videos", description = "Video upload and management"),
    ),
    info(
        title = "Inventory Media API",
        version = "0.1.0",
        description = "Inventory items and uploaded videos",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
