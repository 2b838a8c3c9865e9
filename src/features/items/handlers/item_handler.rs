use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};

use crate::core::error::Result;
use crate::core::extractor::AppJson;
use crate::features::items::dtos::{ItemPayload, ItemResponse};
use crate::features::items::services::ItemService;
use crate::shared::types::{ErrorResponse, MessageResponse};

/// Create an item at the end of the display order
#[utoipa::path(
    post,
    path = "/items/",
    request_body = ItemPayload,
    responses(
        (status = 200, description = "Item created", body = ItemResponse),
        (status = 400, description = "Malformed JSON body", body = ErrorResponse)
    ),
    tag = "items"
)]
pub async fn create_item(
    State(service): State<Arc<ItemService>>,
    AppJson(dto): AppJson<ItemPayload>,
) -> Result<Json<ItemResponse>> {
    let item = service.create(dto).await?;
    Ok(Json(item))
}

/// List all items in display order
#[utoipa::path(
    get,
    path = "/items/",
    responses(
        (status = 200, description = "Items ordered by sort_order", body = Vec<ItemResponse>),
    ),
    tag = "items"
)]
pub async fn list_items(State(service): State<Arc<ItemService>>) -> Result<Json<Vec<ItemResponse>>> {
    let items = service.list().await?;
    Ok(Json(items))
}

/// Get an item by ID
#[utoipa::path(
    get,
    path = "/items/{id}",
    params(
        ("id" = i64, Path, description = "Item ID")
    ),
    responses(
        (status = 200, description = "Item found", body = ItemResponse),
        (status = 404, description = "Item not found", body = ErrorResponse)
    ),
    tag = "items"
)]
pub async fn get_item(
    State(service): State<Arc<ItemService>>,
    Path(id): Path<i64>,
) -> Result<Json<ItemResponse>> {
    let item = service.get(id).await?;
    Ok(Json(item))
}

/// Replace an item's fields, keeping its position
#[utoipa::path(
    put,
    path = "/items/{id}",
    params(
        ("id" = i64, Path, description = "Item ID")
    ),
    request_body = ItemPayload,
    responses(
        (status = 200, description = "Item updated", body = ItemResponse),
        (status = 400, description = "Malformed JSON body", body = ErrorResponse),
        (status = 404, description = "Item not found", body = ErrorResponse)
    ),
    tag = "items"
)]
pub async fn update_item(
    State(service): State<Arc<ItemService>>,
    Path(id): Path<i64>,
    AppJson(dto): AppJson<ItemPayload>,
) -> Result<Json<ItemResponse>> {
    let item = service.update(id, dto).await?;
    Ok(Json(item))
}

#[utoipa::path(
    delete,
    path = "/items/{id}",
    params(
        ("id" = i64, Path, description = "Item ID")
    ),
    responses(
        (status = 200, description = "Item deleted", body = MessageResponse),
        (status = 404, description = "Item not found", body = ErrorResponse)
    ),
    tag = "items"
)]
pub async fn delete_item(
    State(service): State<Arc<ItemService>>,
    Path(id): Path<i64>,
) -> Result<Json<MessageResponse>> {
    service.delete(id).await?;
    Ok(Json(MessageResponse::new("Item deleted")))
}

/// Reorder items
///
/// The body is the list of item IDs in their new display order.
#[utoipa::path(
    put,
    path = "/items/reorder/",
    request_body = Vec<i64>,
    responses(
        (status = 200, description = "Items reordered", body = MessageResponse),
        (status = 500, description = "Reorder failed and was rolled back", body = ErrorResponse)
    ),
    tag = "items"
)]
pub async fn reorder_items(
    State(service): State<Arc<ItemService>>,
    AppJson(ids): AppJson<Vec<i64>>,
) -> Result<Json<MessageResponse>> {
    service.reorder(&ids).await?;
    Ok(Json(MessageResponse::new("Items reordered successfully")))
}
