//! DeleteItem: remove one record by its composite key.

use axum::extract::State;

use inventory_core::gateway::{GatewayRequest, GatewayResponse};
use inventory_core::inventory::{parse_delete_item, ErrorDetail, InventoryError};
use inventory_core::storage::InventoryRepository;

use super::{error_response, log_request, GatewayEvent, GatewayReply};
use crate::state::AppState;

/// Handle a delete envelope. Deleting an absent key still succeeds.
pub async fn handle(repo: &dyn InventoryRepository, request: &GatewayRequest) -> GatewayResponse {
    log_request("delete_item", request);

    match delete_item(repo, request).await {
        Ok(item_id) => GatewayResponse::message(200, "Item deleted", &item_id),
        Err(e) => error_response(&e, ErrorDetail::Generic),
    }
}

async fn delete_item(
    repo: &dyn InventoryRepository,
    request: &GatewayRequest,
) -> Result<String, InventoryError> {
    let key = parse_delete_item(request)?;

    repo.delete_item(&key).await?;

    Ok(key.item_id)
}

/// DELETE /item/{id}
pub async fn route(
    State(state): State<AppState>,
    GatewayEvent(event): GatewayEvent,
) -> GatewayReply {
    GatewayReply(handle(state.repo.as_ref(), &event).await)
}
