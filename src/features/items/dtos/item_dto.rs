use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::features::items::models::Item;

/// Request body for creating or replacing an item
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ItemPayload {
    #[schema(example = "Hex bolt M8")]
    pub name: String,
    #[schema(example = 12)]
    pub quantity: i64,
    #[schema(example = 0.35)]
    pub price: f64,
    pub date: DateTime<Utc>,
}

/// Stored representation of an item
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ItemResponse {
    pub id: i64,
    pub name: String,
    pub quantity: i64,
    pub price: f64,
    pub date: DateTime<Utc>,
    pub sort_order: i64,
}

impl From<Item> for ItemResponse {
    fn from(item: Item) -> Self {
        Self {
            id: item.id,
            name: item.name,
            quantity: item.quantity,
            price: item.price,
            date: item.date,
            sort_order: item.sort_order,
        }
    }
}
