//! Pure functions for mapping handler errors to HTTP status codes and bodies.

use super::InventoryError;

/// Message returned for internal failures when the detail is withheld.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// Whether an internal failure reports its detail to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorDetail {
    /// Internal failures answer with [`INTERNAL_ERROR_MESSAGE`].
    Generic,
    /// Internal failures answer with the error's own text.
    Raw,
}

/// Maps an [`InventoryError`] to an HTTP status code.
///
/// - `Validation` -> 400 (Bad Request)
/// - `ItemNotFound` -> 404 (Not Found)
/// - `Coercion` -> 500 (Internal Server Error)
/// - `Repository` -> 500 (Internal Server Error)
///
/// # Examples
///
/// ```
/// use inventory_core::inventory::{inventory_error_to_status_code, InventoryError};
///
/// assert_eq!(inventory_error_to_status_code(&InventoryError::ItemNotFound), 404);
/// ```
pub fn inventory_error_to_status_code(error: &InventoryError) -> u16 {
    match error {
        InventoryError::Validation(_) => 400,
        InventoryError::ItemNotFound => 404,
        InventoryError::Coercion(_) => 500,
        InventoryError::Repository(_) => 500,
    }
}

/// Returns the message placed in the `error` field of the response body.
pub fn inventory_error_message(error: &InventoryError, detail: ErrorDetail) -> String {
    match (error, detail) {
        (InventoryError::Validation(_) | InventoryError::ItemNotFound, _) => error.to_string(),
        (_, ErrorDetail::Raw) => error.to_string(),
        (_, ErrorDetail::Generic) => INTERNAL_ERROR_MESSAGE.to_string(),
    }
}
