pub mod create_item;
pub mod delete_item;
pub mod error;
pub mod gateway;
pub mod get_item;
pub mod health;
pub mod list_all_items;
pub mod list_items_by_location;

use clap::ValueEnum;

use inventory_core::gateway::{GatewayRequest, GatewayResponse};
use inventory_core::storage::InventoryRepository;

pub use error::error_response;
pub use gateway::{GatewayEvent, GatewayReply};

/// The handlers that can be run directly against a gateway envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum HandlerName {
    CreateItem,
    DeleteItem,
    GetItem,
    ListItemsByLocation,
    ListAllItems,
}

/// Run the named handler against a gateway envelope.
pub async fn dispatch(
    name: HandlerName,
    repo: &dyn InventoryRepository,
    request: &GatewayRequest,
) -> GatewayResponse {
    match name {
        HandlerName::CreateItem => create_item::handle(repo, request).await,
        HandlerName::DeleteItem => delete_item::handle(repo, request).await,
        HandlerName::GetItem => get_item::handle(repo, request).await,
        HandlerName::ListItemsByLocation => list_items_by_location::handle(repo, request).await,
        HandlerName::ListAllItems => list_all_items::handle(repo, request).await,
    }
}

/// Log an inbound envelope.
fn log_request(handler: &'static str, request: &GatewayRequest) {
    let event = serde_json::to_string(request).unwrap_or_default();
    tracing::info!(handler, event = %event, "Received request");
}
