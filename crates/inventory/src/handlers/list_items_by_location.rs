//! ListItemsByLocation: every record stored at one location.

use axum::extract::State;
use serde_json::Value;

use inventory_core::gateway::{GatewayRequest, GatewayResponse};
use inventory_core::inventory::{
    items_to_json, parse_list_items_by_location, DecimalConversion, ErrorDetail, InventoryError,
};
use inventory_core::storage::{InventoryRepository, ScanFilter};

use super::{error_response, log_request, GatewayEvent, GatewayReply};
use crate::state::AppState;

/// Handle a list-by-location envelope.
pub async fn handle(repo: &dyn InventoryRepository, request: &GatewayRequest) -> GatewayResponse {
    log_request("list_items_by_location", request);

    match list_items_by_location(repo, request).await {
        Ok(items) => GatewayResponse::json(200, &items),
        Err(e) => error_response(&e, ErrorDetail::Generic),
    }
}

async fn list_items_by_location(
    repo: &dyn InventoryRepository,
    request: &GatewayRequest,
) -> Result<Value, InventoryError> {
    let location_id = parse_list_items_by_location(request)?;

    let items = repo.scan(Some(&ScanFilter::location(location_id))).await?;

    tracing::debug!(location_id, count = items.len(), "Scanned location");
    Ok(items_to_json(&items, DecimalConversion::Recursive))
}

/// GET /location/{id}
pub async fn route(
    State(state): State<AppState>,
    GatewayEvent(event): GatewayEvent,
) -> GatewayReply {
    GatewayReply(handle(state.repo.as_ref(), &event).await)
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use serde_json::json;

    use inventory_core::inventory::InventoryRecord;

    use super::*;
    use crate::handlers::test_support::FailingRepository;
    use crate::storage::inmemory::InMemoryRepository;

    async fn seeded() -> InMemoryRepository {
        let repo = InMemoryRepository::new();
        for (item_id, location_id) in [("a", 1), ("b", 2), ("c", 1)] {
            repo.put_item(&InventoryRecord {
                item_id: item_id.to_string(),
                location_id,
                item_name: item_id.to_uppercase(),
                item_description: String::new(),
                qty_on_hand: 1,
                price: Decimal::new(250, 2),
            })
            .await
            .unwrap();
        }
        repo
    }

    fn item_ids(response: &GatewayResponse) -> Vec<String> {
        response
            .body_json()
            .unwrap()
            .as_array()
            .unwrap()
            .iter()
            .map(|item| item["item_id"].as_str().unwrap().to_string())
            .collect()
    }

    #[tokio::test]
    async fn test_list_by_path_location() {
        let repo = seeded().await;
        let request = GatewayRequest::new().with_path_parameter("id", "1");

        let response = handle(&repo, &request).await;

        assert_eq!(response.status_code, 200);
        assert_eq!(item_ids(&response), vec!["a", "c"]);
        let body = response.body_json().unwrap();
        assert_eq!(body[0]["price"].as_f64(), Some(2.5));
        assert_eq!(body[0]["location_id"].as_f64(), Some(1.0));
    }

    #[tokio::test]
    async fn test_list_by_query_location() {
        let repo = seeded().await;
        let request = GatewayRequest::new().with_query_parameter("location_id", "2");

        let response = handle(&repo, &request).await;

        assert_eq!(item_ids(&response), vec!["b"]);
    }

    #[tokio::test]
    async fn test_empty_location() {
        let repo = seeded().await;
        let request = GatewayRequest::new().with_path_parameter("id", "9");

        let response = handle(&repo, &request).await;

        assert_eq!(response.status_code, 200);
        assert_eq!(response.body_json().unwrap(), json!([]));
    }

    #[tokio::test]
    async fn test_missing_location() {
        let repo = seeded().await;

        let response = handle(&repo, &GatewayRequest::new()).await;

        assert_eq!(response.status_code, 400);
        assert_eq!(
            response.body_json().unwrap()["error"],
            "location_id is required"
        );
    }

    #[tokio::test]
    async fn test_non_integer_location() {
        let repo = seeded().await;
        let request = GatewayRequest::new().with_path_parameter("id", "north");

        let response = handle(&repo, &request).await;

        assert_eq!(response.status_code, 400);
        assert_eq!(
            response.body_json().unwrap()["error"],
            "location_id must be an integer"
        );
    }

    #[tokio::test]
    async fn test_store_failure() {
        let request = GatewayRequest::new().with_path_parameter("id", "1");

        let response = handle(&FailingRepository, &request).await;

        assert_eq!(response.status_code, 500);
        assert_eq!(
            response.body_json().unwrap()["error"],
            "Internal server error"
        );
    }
}
