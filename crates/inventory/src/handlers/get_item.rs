//! GetItem: fetch one record by its composite key.

use axum::extract::State;
use serde_json::Value;

use inventory_core::gateway::{GatewayRequest, GatewayResponse};
use inventory_core::inventory::{
    item_to_json, DecimalConversion, ErrorDetail, GetItemRequest, InventoryError,
};
use inventory_core::storage::InventoryRepository;

use super::{error_response, log_request, GatewayEvent, GatewayReply};
use crate::state::AppState;

/// Handle a get envelope.
pub async fn handle(repo: &dyn InventoryRepository, request: &GatewayRequest) -> GatewayResponse {
    log_request("get_item", request);

    match get_item(repo, request).await {
        Ok(item) => GatewayResponse::json(200, &item),
        Err(e) => error_response(&e, ErrorDetail::Generic),
    }
}

async fn get_item(
    repo: &dyn InventoryRepository,
    request: &GatewayRequest,
) -> Result<Value, InventoryError> {
    // A location that is present but not an integer fails here, after
    // validation, and is reported as an internal error.
    let key = GetItemRequest::from_gateway(request)?.key()?;

    let item = repo
        .get_item(&key)
        .await?
        .ok_or(InventoryError::ItemNotFound)?;

    Ok(item_to_json(&item, DecimalConversion::Recursive))
}

/// GET /item/{id}
pub async fn route(
    State(state): State<AppState>,
    GatewayEvent(event): GatewayEvent,
) -> GatewayReply {
    GatewayReply(handle(state.repo.as_ref(), &event).await)
}
