//! ListAllItems: every record in the store.

use axum::extract::State;
use serde_json::Value;

use inventory_core::gateway::{GatewayRequest, GatewayResponse};
use inventory_core::inventory::{items_to_json, DecimalConversion, ErrorDetail, InventoryError};
use inventory_core::storage::InventoryRepository;

use super::{error_response, log_request, GatewayEvent, GatewayReply};
use crate::state::AppState;

/// Handle a list-all envelope.
///
/// Only top-level numbers become floats, and a failure reports the raw
/// error text rather than the generic message.
pub async fn handle(repo: &dyn InventoryRepository, request: &GatewayRequest) -> GatewayResponse {
    log_request("list_all_items", request);

    match list_all_items(repo).await {
        Ok(items) => GatewayResponse::json(200, &items),
        Err(e) => error_response(&e, ErrorDetail::Raw),
    }
}

async fn list_all_items(repo: &dyn InventoryRepository) -> Result<Value, InventoryError> {
    let items = repo.scan(None).await?;

    tracing::debug!(count = items.len(), "Scanned all items");
    Ok(items_to_json(&items, DecimalConversion::TopLevel))
}

/// GET /items
pub async fn route(
    State(state): State<AppState>,
    GatewayEvent(event): GatewayEvent,
) -> GatewayReply {
    GatewayReply(handle(state.repo.as_ref(), &event).await)
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use rust_decimal::Decimal;
    use serde_json::json;

    use inventory_core::inventory::{Attribute, InventoryRecord, Item, ItemKey};
    use inventory_core::storage::{Result, ScanFilter};

    use super::*;
    use crate::handlers::test_support::FailingRepository;
    use crate::storage::inmemory::InMemoryRepository;

    #[tokio::test]
    async fn test_list_all_items() {
        let repo = InMemoryRepository::new();
        for location_id in [1, 2] {
            repo.put_item(&InventoryRecord {
                item_id: "sku1".to_string(),
                location_id,
                item_name: "Widget".to_string(),
                item_description: String::new(),
                qty_on_hand: 4,
                price: Decimal::new(1999, 2),
            })
            .await
            .unwrap();
        }

        let response = handle(&repo, &GatewayRequest::new()).await;

        assert_eq!(response.status_code, 200);
        let body = response.body_json().unwrap();
        let items = body.as_array().unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0]["price"].as_f64(), Some(19.99));
        assert_eq!(items[1]["location_id"].as_f64(), Some(2.0));
    }

    #[tokio::test]
    async fn test_empty_store() {
        let repo = InMemoryRepository::new();

        let response = handle(&repo, &GatewayRequest::new()).await;

        assert_eq!(response.status_code, 200);
        assert_eq!(response.body_json().unwrap(), json!([]));
    }

    #[tokio::test]
    async fn test_store_failure_reports_raw_error() {
        let response = handle(&FailingRepository, &GatewayRequest::new()).await;

        assert_eq!(response.status_code, 500);
        assert_eq!(
            response.body_json().unwrap(),
            json!({"error": format!("Connection failed: {}", FailingRepository::MESSAGE)})
        );
    }

    /// Repository whose single item carries a nested number.
    struct NestedRepository;

    #[async_trait::async_trait]
    impl InventoryRepository for NestedRepository {
        async fn put_item(&self, _record: &InventoryRecord) -> Result<()> {
            Ok(())
        }

        async fn get_item(&self, _key: &ItemKey) -> Result<Option<Item>> {
            Ok(None)
        }

        async fn delete_item(&self, _key: &ItemKey) -> Result<()> {
            Ok(())
        }

        async fn scan(&self, _filter: Option<&ScanFilter>) -> Result<Vec<Item>> {
            let mut item = Item::new();
            item.insert("item_id".to_string(), Attribute::from("sku1"));
            item.insert("price".to_string(), Attribute::N(Decimal::new(125, 2)));
            item.insert(
                "history".to_string(),
                Attribute::L(vec![Attribute::M(BTreeMap::from([(
                    "price".to_string(),
                    Attribute::N(Decimal::new(110, 2)),
                )]))]),
            );
            Ok(vec![item])
        }
    }

    #[tokio::test]
    async fn test_nested_numbers_keep_decimal_text() {
        let response = handle(&NestedRepository, &GatewayRequest::new()).await;

        let body = response.body_json().unwrap();
        assert_eq!(body[0]["price"].as_f64(), Some(1.25));
        assert_eq!(body[0]["history"][0]["price"], json!("1.10"));
    }
}
