use sqlx::SqlitePool;
use tracing::{debug, info};

use crate::core::error::{AppError, Result};
use crate::features::items::dtos::{ItemPayload, ItemResponse};
use crate::features::items::models::Item;

const COLUMNS: &str = "id, name, quantity, price, date, sort_order";

/// Service for inventory items and their manual display order
pub struct ItemService {
    pool: SqlitePool,
}

impl ItemService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Create an item at the end of the display order.
    ///
    /// `sort_order` is one past the current maximum, or 0 when there are no items.
    pub async fn create(&self, dto: ItemPayload) -> Result<ItemResponse> {
        // One statement, so the position read and the insert share a write lock
        let query = format!(
            "INSERT INTO items (name, quantity, price, date, sort_order) \
             SELECT ?, ?, ?, ?, COALESCE(MAX(sort_order) + 1, 0) FROM items \
             RETURNING {COLUMNS}"
        );
        let item = sqlx::query_as::<_, Item>(&query)
            .bind(&dto.name)
            .bind(dto.quantity)
            .bind(dto.price)
            .bind(dto.date)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to create item: {:?}", e);
                AppError::Database(e)
            })?;

        info!("Item created: id={}, sort_order={}", item.id, item.sort_order);
        Ok(item.into())
    }

    /// All items, ascending by `sort_order`
    pub async fn list(&self) -> Result<Vec<ItemResponse>> {
        let query = format!("SELECT {COLUMNS} FROM items ORDER BY sort_order, id");
        let items = sqlx::query_as::<_, Item>(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to list items: {:?}", e);
                AppError::Database(e)
            })?;

        Ok(items.into_iter().map(|i| i.into()).collect())
    }

    pub async fn get(&self, id: i64) -> Result<ItemResponse> {
        let query = format!("SELECT {COLUMNS} FROM items WHERE id = ?");
        sqlx::query_as::<_, Item>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .map(|i| i.into())
            .ok_or_else(|| AppError::NotFound("Item not found".to_string()))
    }

    /// Overwrite every field except `id` and `sort_order`
    pub async fn update(&self, id: i64, dto: ItemPayload) -> Result<ItemResponse> {
        let query = format!(
            "UPDATE items SET name = ?, quantity = ?, price = ?, date = ? \
             WHERE id = ? \
             RETURNING {COLUMNS}"
        );
        let item = sqlx::query_as::<_, Item>(&query)
            .bind(&dto.name)
            .bind(dto.quantity)
            .bind(dto.price)
            .bind(dto.date)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to update item {}: {:?}", id, e);
                AppError::Database(e)
            })?
            .ok_or_else(|| AppError::NotFound("Item not found".to_string()))?;

        info!("Item updated: id={}", item.id);
        Ok(item.into())
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        let result = sqlx::query("DELETE FROM items WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Item not found".to_string()));
        }

        info!("Item deleted: id={}", id);
        Ok(())
    }

    /// Set each listed item's `sort_order` to its position in `ids`.
    ///
    /// Unknown ids are skipped. Items missing from `ids` keep their previous
    /// value, so duplicates are possible after a partial reorder. The batch
    /// is all-or-nothing.
    pub async fn reorder(&self, ids: &[i64]) -> Result<()> {
        self.apply_order(ids)
            .await
            .map_err(|e| AppError::Internal(format!("Error reordering items: {}", e)))?;

        info!("Items reordered: count={}", ids.len());
        Ok(())
    }

    async fn apply_order(&self, ids: &[i64]) -> std::result::Result<(), sqlx::Error> {
        // Dropping the transaction on an early return rolls it back
        let mut tx = self.pool.begin().await?;

        for (position, id) in ids.iter().enumerate() {
            let result = sqlx::query("UPDATE items SET sort_order = ? WHERE id = ?")
                .bind(position as i64)
                .bind(*id)
                .execute(&mut *tx)
                .await?;

            if result.rows_affected() == 0 {
                debug!("Reorder skipped unknown item id={}", id);
            }
        }

        tx.commit().await
    }
}
