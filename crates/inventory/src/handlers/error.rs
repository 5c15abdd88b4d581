use inventory_core::gateway::GatewayResponse;
use inventory_core::inventory::{
    inventory_error_message, inventory_error_to_status_code, ErrorDetail, InventoryError,
};

/// Render a handler failure as a gateway response.
///
/// Internal failures are logged at `error`; rejected input only at `debug`.
pub fn error_response(error: &InventoryError, detail: ErrorDetail) -> GatewayResponse {
    let status = inventory_error_to_status_code(error);

    if status >= 500 {
        tracing::error!(status, error = %error, "Handler failed");
    } else {
        tracing::debug!(status, message = %error, "Request rejected");
    }

    GatewayResponse::error(status, inventory_error_message(error, detail))
}

#[cfg(test)]
mod tests {
    use inventory_core::inventory::{CoercionError, ValidationError};
    use inventory_core::storage::RepositoryError;

    use super::*;

    #[test]
    fn test_validation_error_keeps_message() {
        let response = error_response(
            &ValidationError::LocationIdNotInteger.into(),
            ErrorDetail::Generic,
        );

        assert_eq!(response.status_code, 400);
        assert_eq!(
            response.body_json().unwrap()["error"],
            "location_id must be an integer"
        );
    }

    #[test]
    fn test_internal_error_is_generic() {
        let response = error_response(
            &CoercionError::new("price", "not a number").into(),
            ErrorDetail::Generic,
        );

        assert_eq!(response.status_code, 500);
        assert_eq!(
            response.body_json().unwrap()["error"],
            "Internal server error"
        );
    }

    #[test]
    fn test_internal_error_raw() {
        let error: InventoryError = RepositoryError::QueryFailed("scan timed out".to_string()).into();
        let response = error_response(&error, ErrorDetail::Raw);

        assert_eq!(response.status_code, 500);
        assert_eq!(response.body_json().unwrap()["error"], error.to_string());
    }
}
