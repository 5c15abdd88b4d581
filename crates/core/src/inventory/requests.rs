//! Request parsing for each handler.
//!
//! Every handler has exactly one entry point here that names, per field, the
//! ordered sources it is read from. Parsing only validates presence (and, where
//! the handler demands it, integer-ness); conversion to record types that can
//! fail after validation is a separate step so its errors stay distinct.

use serde_json::Value;

use crate::gateway::{is_truthy, FieldSource, GatewayRequest, Presence};

use super::coerce::{to_decimal, to_integer, to_text};
use super::error::{CoercionError, ValidationError};
use super::types::{InventoryRecord, ItemKey};

/// A validated create request whose fields have not been converted yet.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateItemRequest {
    pub item_id: String,
    pub location_id: Value,
    pub item_name: Value,
    pub item_description: Option<Value>,
    pub qty_on_hand: Value,
    pub price: Value,
}

impl CreateItemRequest {
    /// Reads every field from the body first, then from the top level.
    pub fn from_gateway(request: &GatewayRequest) -> Result<Self, ValidationError> {
        let fields = request.fields();
        let field = |name: &'static str, presence: Presence| {
            fields
                .resolve(&[FieldSource::Body(name), FieldSource::Direct(name)], presence)
                .cloned()
        };

        let item_id = item_id_text(field("item_id", Presence::Truthy).as_ref())
            .ok_or(ValidationError::ItemIdRequired)?;

        let location_id = field("location_id", Presence::NonNull);
        let item_name = field("item_name", Presence::Truthy);
        let qty_on_hand = field("qty_on_hand", Presence::NonNull);
        let price = field("price", Presence::NonNull);
        let item_description = field("item_description", Presence::Truthy);

        match (location_id, item_name, qty_on_hand, price) {
            (Some(location_id), Some(item_name), Some(qty_on_hand), Some(price)) => Ok(Self {
                item_id,
                location_id,
                item_name,
                item_description,
                qty_on_hand,
                price,
            }),
            _ => Err(ValidationError::CreateFieldsRequired),
        }
    }

    /// Converts the validated fields into a record.
    ///
    /// `price` is built from its textual form and never passes through a float.
    pub fn into_record(self) -> Result<InventoryRecord, CoercionError> {
        let item_description = match self.item_description.filter(is_truthy) {
            Some(description) => to_text("item_description", &description)?,
            None => String::new(),
        };

        Ok(InventoryRecord {
            location_id: to_integer("location_id", &self.location_id)?,
            qty_on_hand: to_integer("qty_on_hand", &self.qty_on_hand)?,
            price: to_decimal("price", &self.price)?,
            item_name: to_text("item_name", &self.item_name)?,
            item_description,
            item_id: self.item_id,
        })
    }
}

/// Parses a delete request into the key to remove.
///
/// `item_id` comes from the path only. `location_id` is read from the body,
/// then the query string, then the top level, and must be an integer.
pub fn parse_delete_item(request: &GatewayRequest) -> Result<ItemKey, ValidationError> {
    let fields = request.fields();

    let item_id = item_id_text(fields.lookup(FieldSource::Path("id")))
        .ok_or(ValidationError::ItemIdRequired)?;

    let location_id = fields
        .resolve(
            &[
                FieldSource::Body("location_id"),
                FieldSource::Query("location_id"),
                FieldSource::Direct("location_id"),
            ],
            Presence::NonNull,
        )
        .ok_or(ValidationError::LocationIdRequired)?;

    let location_id = to_integer("location_id", location_id)
        .map_err(|_| ValidationError::LocationIdNotInteger)?;

    Ok(ItemKey::new(item_id, location_id))
}

/// A validated get request whose location has not been converted yet.
#[derive(Debug, Clone, PartialEq)]
pub struct GetItemRequest {
    pub item_id: String,
    pub location_id: Value,
}

impl GetItemRequest {
    /// Reads `item_id` from the path, then the body, then the top level, and
    /// `location_id` from the query string, then the body, then the top level.
    pub fn from_gateway(request: &GatewayRequest) -> Result<Self, ValidationError> {
        let fields = request.fields();

        let item_id = fields.resolve(
            &[
                FieldSource::Path("id"),
                FieldSource::Body("item_id"),
                FieldSource::Direct("item_id"),
            ],
            Presence::Truthy,
        );
        let location_id = fields.resolve(
            &[
                FieldSource::Query("location_id"),
                FieldSource::Body("location_id"),
                FieldSource::Direct("location_id"),
            ],
            Presence::Truthy,
        );

        match (item_id_text(item_id), location_id) {
            (Some(item_id), Some(location_id)) => Ok(Self {
                item_id,
                location_id: location_id.clone(),
            }),
            _ => Err(ValidationError::ItemKeyRequired),
        }
    }

    /// Converts the request into a key.
    ///
    /// A non-integer location is a coercion failure here, not a validation
    /// failure, so it surfaces as an internal error.
    pub fn key(&self) -> Result<ItemKey, CoercionError> {
        let location_id = to_integer("location_id", &self.location_id)?;
        Ok(ItemKey::new(self.item_id.clone(), location_id))
    }
}

/// Parses a list-by-location request into the location to scan for.
pub fn parse_list_items_by_location(request: &GatewayRequest) -> Result<i64, ValidationError> {
    let fields = request.fields();

    let location_id = fields
        .resolve(
            &[
                FieldSource::Path("id"),
                FieldSource::Query("location_id"),
                FieldSource::Direct("location_id"),
            ],
            Presence::NonNull,
        )
        .ok_or(ValidationError::LocationIdRequired)?;

    to_integer("location_id", location_id).map_err(|_| ValidationError::LocationIdNotInteger)
}

/// Accepts non-empty strings and non-zero numbers as an item id.
fn item_id_text(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) if n.as_f64().is_some_and(|f| f != 0.0) => Some(n.to_string()),
        _ => None,
    }
}
