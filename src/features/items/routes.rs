use std::sync::Arc;

use axum::{
    routing::{get, put},
    Router,
};

use crate::features::items::handlers;
use crate::features::items::services::ItemService;

/// Create routes for the items feature
pub fn routes(service: Arc<ItemService>) -> Router {
    Router::new()
        .route(
            "/items/",
            get(handlers::list_items).post(handlers::create_item),
        )
        .route("/items/reorder/", put(handlers::reorder_items))
        .route(
            "/items/{id}",
            get(handlers::get_item)
                .put(handlers::update_item)
                .delete(handlers::delete_item),
        )
        .with_state(service)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::database::test_pool;
    use crate::features::items::dtos::ItemResponse;
    use crate::shared::types::{ErrorResponse, MessageResponse};
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use serde_json::json;

    async fn server() -> TestServer {
        let service = Arc::new(ItemService::new(test_pool().await));
        TestServer::new(routes(service)).unwrap()
    }

    fn body(name: &str) -> serde_json::Value {
        json!({
            "name": name,
            "quantity": 3,
            "price": 4.5,
            "date": "2024-06-01T09:00:00.000Z"
        })
    }

    #[tokio::test]
    async fn test_create_and_list_in_order() {
        let server = server().await;

        for name in ["first", "second", "third"] {
            server.post("/items/").json(&body(name)).await.assert_status_ok();
        }

        let response = server.get("/items/").await;
        response.assert_status_ok();
        let items: Vec<ItemResponse> = response.json();
        let names: Vec<&str> = items.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["first", "second", "third"]);
        assert_eq!(
            items.iter().map(|i| i.sort_order).collect::<Vec<_>>(),
            vec![0, 1, 2]
        );
    }

    #[tokio::test]
    async fn test_reorder_then_list() {
        let server = server().await;
        let mut ids = Vec::new();
        for name in ["a", "b", "c"] {
            let item: ItemResponse = server.post("/items/").json(&body(name)).await.json();
            ids.push(item.id);
        }

        let response = server
            .put("/items/reorder/")
            .json(&json!([ids[2], ids[0], ids[1]]))
            .await;
        response.assert_status_ok();
        let message: MessageResponse = response.json();
        assert_eq!(message.message, "Items reordered successfully");

        let items: Vec<ItemResponse> = server.get("/items/").await.json();
        let listed: Vec<i64> = items.iter().map(|i| i.id).collect();
        assert_eq!(listed, vec![ids[2], ids[0], ids[1]]);
    }

    #[tokio::test]
    async fn test_reorder_with_unknown_id_succeeds() {
        let server = server().await;
        server.post("/items/").json(&body("only")).await.assert_status_ok();

        server
            .put("/items/reorder/")
            .json(&json!([12345]))
            .await
            .assert_status_ok();

        let items: Vec<ItemResponse> = server.get("/items/").await.json();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].sort_order, 0);
    }

    #[tokio::test]
    async fn test_update_and_delete_missing_item() {
        let server = server().await;

        let response = server.put("/items/77").json(&body("ghost")).await;
        response.assert_status(StatusCode::NOT_FOUND);
        let error: ErrorResponse = response.json();
        assert_eq!(error.detail, "Item not found");

        server
            .delete("/items/77")
            .await
            .assert_status(StatusCode::NOT_FOUND);
        server
            .get("/items/77")
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_update_and_delete_existing_item() {
        let server = server().await;
        let created: ItemResponse = server.post("/items/").json(&body("bolt")).await.json();

        let updated: ItemResponse = server
            .put(&format!("/items/{}", created.id))
            .json(&body("nut"))
            .await
            .json();
        assert_eq!(updated.name, "nut");
        assert_eq!(updated.sort_order, created.sort_order);

        let response = server.delete(&format!("/items/{}", created.id)).await;
        response.assert_status_ok();
        let message: MessageResponse = response.json();
        assert_eq!(message.message, "Item deleted");

        let items: Vec<ItemResponse> = server.get("/items/").await.json();
        assert!(items.is_empty());
    }

    #[tokio::test]
    async fn test_unvalidated_values_are_accepted() {
        let server = server().await;

        let response = server
            .post("/items/")
            .json(&json!({"name": "", "quantity": -3, "price": -1.5, "date": "2024-06-01T09:00:00Z"}))
            .await;
        response.assert_status_ok();
        let item: ItemResponse = response.json();
        assert_eq!(item.name, "");
        assert_eq!(item.quantity, -3);

        let updated: ItemResponse = server
            .put(&format!("/items/{}", item.id))
            .json(&json!({"name": "", "quantity": -7, "price": 0.0, "date": "2024-06-02T09:00:00Z"}))
            .await
            .json();
        assert_eq!(updated.quantity, -7);
    }

    #[tokio::test]
    async fn test_malformed_payloads_are_rejected() {
        let server = server().await;

        server
            .post("/items/")
            .json(&json!({"name": "bolt"}))
            .await
            .assert_status(StatusCode::BAD_REQUEST);

        server
            .post("/items/")
            .json(&json!({"name": "bolt", "quantity": "many", "price": 1.0, "date": "2024-06-01T09:00:00Z"}))
            .await
            .assert_status(StatusCode::BAD_REQUEST);

        server
            .put("/items/reorder/")
            .json(&json!({"ids": [1, 2]}))
            .await
            .assert_status(StatusCode::BAD_REQUEST);

        let items: Vec<ItemResponse> = server.get("/items/").await.json();
        assert!(items.is_empty());
    }

    #[tokio::test]
    async fn test_reorder_failure_returns_server_error() {
        let pool = test_pool().await;
        let server = TestServer::new(routes(Arc::new(ItemService::new(pool.clone())))).unwrap();
        server.post("/items/").json(&body("a")).await.assert_status_ok();
        sqlx::query("DROP TABLE items").execute(&pool).await.unwrap();

        let response = server.put("/items/reorder/").json(&json!([1])).await;

        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        let error: ErrorResponse = response.json();
        assert!(error.detail.starts_with("Error reordering items: "));
    }
}
