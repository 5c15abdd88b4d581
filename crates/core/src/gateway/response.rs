use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// A gateway response: a status code and a JSON-encoded body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GatewayResponse {
    pub status_code: u16,
    pub body: String,
}

impl GatewayResponse {
    /// Creates a response whose body is the JSON encoding of `body`.
    pub fn json(status_code: u16, body: &Value) -> Self {
        Self {
            status_code,
            body: body.to_string(),
        }
    }

    /// Creates an `{"error": message}` response.
    pub fn error(status_code: u16, message: impl AsRef<str>) -> Self {
        Self::json(status_code, &json!({ "error": message.as_ref() }))
    }

    /// Creates a `{"message": .., "item_id": ..}` response.
    pub fn message(status_code: u16, message: &str, item_id: &str) -> Self {
        Self::json(
            status_code,
            &json!({ "message": message, "item_id": item_id }),
        )
    }

    /// Decodes the body back into JSON.
    pub fn body_json(&self) -> serde_json::Result<Value> {
        serde_json::from_str(&self.body)
    }
}
