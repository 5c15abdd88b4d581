mod coerce;
mod document;
mod error;
mod http_mapping;
mod requests;
mod types;

pub use coerce::{to_decimal, to_integer, to_text};
pub use document::{item_to_json, items_to_json, Attribute, DecimalConversion, Item};
pub use error::{CoercionError, InventoryError, ValidationError};
pub use http_mapping::{
    inventory_error_message, inventory_error_to_status_code, ErrorDetail, INTERNAL_ERROR_MESSAGE,
};
pub use requests::{
    parse_delete_item, parse_list_items_by_location, CreateItemRequest, GetItemRequest,
};
pub use types::{InventoryRecord, ItemKey};
