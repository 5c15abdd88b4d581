use thiserror::Error;

use crate::storage::RepositoryError;

/// Request input that is missing or malformed.
///
/// The display text of each variant is the exact message returned to callers.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("item_id is required")]
    ItemIdRequired,
    #[error("location_id, item_name, qty_on_hand and price are required")]
    CreateFieldsRequired,
    #[error("location_id is required")]
    LocationIdRequired,
    #[error("location_id must be an integer")]
    LocationIdNotInteger,
    #[error("item_id and location_id are required")]
    ItemKeyRequired,
}

/// A present field whose value could not be converted to its record type.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("invalid {field}: {reason}")]
pub struct CoercionError {
    pub field: &'static str,
    pub reason: String,
}

impl CoercionError {
    pub fn new(field: &'static str, reason: impl Into<String>) -> Self {
        Self {
            field,
            reason: reason.into(),
        }
    }
}

/// Every way a handler can fail.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InventoryError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("Item not found")]
    ItemNotFound,
    #[error(transparent)]
    Coercion(#[from] CoercionError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
