//! CreateItem: validate a new record and upsert it.

use axum::extract::State;

use inventory_core::gateway::{GatewayRequest, GatewayResponse};
use inventory_core::inventory::{CreateItemRequest, ErrorDetail, InventoryError};
use inventory_core::storage::InventoryRepository;

use super::{error_response, log_request, GatewayEvent, GatewayReply};
use crate::state::AppState;

/// Handle a create envelope.
pub async fn handle(repo: &dyn InventoryRepository, request: &GatewayRequest) -> GatewayResponse {
    log_request("create_item", request);

    match create_item(repo, request).await {
        Ok(item_id) => GatewayResponse::message(201, "Item created", &item_id),
        Err(e) => error_response(&e, ErrorDetail::Generic),
    }
}

async fn create_item(
    repo: &dyn InventoryRepository,
    request: &GatewayRequest,
) -> Result<String, InventoryError> {
    let record = CreateItemRequest::from_gateway(request)?.into_record()?;

    repo.put_item(&record).await?;

    tracing::debug!(item_id = %record.item_id, location_id = record.location_id, "Item stored");
    Ok(record.item_id)
}

/// POST /item
pub async fn route(
    State(state): State<AppState>,
    GatewayEvent(event): GatewayEvent,
) -> GatewayReply {
    GatewayReply(handle(state.repo.as_ref(), &event).await)
}
