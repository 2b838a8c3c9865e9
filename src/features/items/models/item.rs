use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for an inventory item
#[derive(Debug, Clone, FromRow)]
pub struct Item {
    pub id: i64,
    pub name: String,
    pub quantity: i64,
    pub price: f64,
    pub date: DateTime<Utc>,
    pub sort_order: i64,
}
