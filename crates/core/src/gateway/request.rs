//! The inbound request envelope and ordered field resolution over it.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A gateway request envelope.
///
/// `body` is normally a JSON-encoded string but may already be an object.
/// Any other top-level key lands in `direct`; only direct invocation fills it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GatewayRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path_parameters: Option<Map<String, Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query_string_parameters: Option<Map<String, Value>>,
    #[serde(flatten)]
    pub direct: Map<String, Value>,
}

impl GatewayRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the raw body.
    pub fn with_body(mut self, body: impl Into<Value>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Set a path parameter.
    pub fn with_path_parameter(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.path_parameters
            .get_or_insert_with(Map::new)
            .insert(name.to_string(), value.into());
        self
    }

    /// Set a query string parameter.
    pub fn with_query_parameter(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.query_string_parameters
            .get_or_insert_with(Map::new)
            .insert(name.to_string(), value.into());
        self
    }

    /// Set a top-level field.
    pub fn with_direct_field(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.direct.insert(name.to_string(), value.into());
        self
    }

    /// Parses the body once and returns a view for resolving fields.
    pub fn fields(&self) -> RequestFields<'_> {
        RequestFields {
            body: parse_body(self.body.as_ref()),
            path: self.path_parameters.as_ref(),
            query: self.query_string_parameters.as_ref(),
            direct: &self.direct,
        }
    }
}

/// Where a field value may be read from, with the key used there.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldSource {
    Path(&'static str),
    Query(&'static str),
    Body(&'static str),
    Direct(&'static str),
}

/// Which values count as present while walking a source list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence {
    /// Any value other than JSON `null`.
    NonNull,
    /// Truthy values only, except that the last source is taken whenever it
    /// is non-null.
    Truthy,
}

/// A request whose body has been parsed, ready for field lookups.
#[derive(Debug)]
pub struct RequestFields<'a> {
    body: Map<String, Value>,
    path: Option<&'a Map<String, Value>>,
    query: Option<&'a Map<String, Value>>,
    direct: &'a Map<String, Value>,
}

impl RequestFields<'_> {
    /// Looks a value up in a single source. JSON `null` reads as absent.
    pub fn lookup(&self, source: FieldSource) -> Option<&Value> {
        let value = match source {
            FieldSource::Path(name) => self.path.and_then(|p| p.get(name)),
            FieldSource::Query(name) => self.query.and_then(|q| q.get(name)),
            FieldSource::Body(name) => self.body.get(name),
            FieldSource::Direct(name) => self.direct.get(name),
        };
        value.filter(|v| !v.is_null())
    }

    /// Resolves a field from an ordered list of sources.
    pub fn resolve(&self, sources: &[FieldSource], presence: Presence) -> Option<&Value> {
        let (last, rest) = sources.split_last()?;
        rest.iter()
            .filter_map(|source| self.lookup(*source))
            .find(|value| presence == Presence::NonNull || is_truthy(value))
            .or_else(|| self.lookup(*last))
    }
}

/// Returns true for values other than `null`, `false`, zero and empty
/// strings, arrays or objects.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

fn parse_body(body: Option<&Value>) -> Map<String, Value> {
    match body {
        Some(Value::String(raw)) if !raw.is_empty() => match serde_json::from_str(raw) {
            Ok(Value::Object(fields)) => fields,
            _ => Map::new(),
        },
        Some(Value::Object(fields)) => fields.clone(),
        _ => Map::new(),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_deserialize_gateway_envelope() {
        let request: GatewayRequest = serde_json::from_value(json!({
            "body": "{\"location_id\": 3}",
            "pathParameters": {"id": "sku1"},
            "queryStringParameters": null,
            "httpMethod": "DELETE"
        }))
        .unwrap();

        assert_eq!(request.body, Some(json!("{\"location_id\": 3}")));
        assert_eq!(request.path_parameters.unwrap()["id"], "sku1");
        assert!(request.query_string_parameters.is_none());
        assert_eq!(request.direct["httpMethod"], "DELETE");
    }

    #[test]
    fn test_string_body_is_parsed() {
        let request = GatewayRequest::new().with_body("{\"item_id\": \"sku1\"}");
        let fields = request.fields();
        assert_eq!(
            fields.lookup(FieldSource::Body("item_id")),
            Some(&json!("sku1"))
        );
    }

    #[test]
    fn test_object_body_is_used_as_is() {
        let request = GatewayRequest::new().with_body(json!({"item_id": "sku1"}));
        let fields = request.fields();
        assert_eq!(
            fields.lookup(FieldSource::Body("item_id")),
            Some(&json!("sku1"))
        );
    }

    #[test]
    fn test_malformed_body_reads_as_empty() {
        for body in [json!("{not json"), json!("[1, 2]"), json!(42)] {
            let request = GatewayRequest::new().with_body(body);
            assert!(request.fields().lookup(FieldSource::Body("item_id")).is_none());
        }
    }

    #[test]
    fn test_null_reads_as_absent() {
        let request = GatewayRequest::new().with_direct_field("location_id", Value::Null);
        assert!(request
            .fields()
            .lookup(FieldSource::Direct("location_id"))
            .is_none());
    }

    #[test]
    fn test_resolve_non_null_keeps_falsy_values() {
        let request = GatewayRequest::new()
            .with_body(json!({"qty_on_hand": 0}))
            .with_direct_field("qty_on_hand", 7);
        let fields = request.fields();

        let sources = [FieldSource::Body("qty_on_hand"), FieldSource::Direct("qty_on_hand")];
        assert_eq!(
            fields.resolve(&sources, Presence::NonNull),
            Some(&json!(0))
        );
    }

    #[test]
    fn test_resolve_truthy_skips_falsy_values() {
        let request = GatewayRequest::new()
            .with_body(json!({"item_name": ""}))
            .with_direct_field("item_name", "Widget");
        let fields = request.fields();

        let sources = [FieldSource::Body("item_name"), FieldSource::Direct("item_name")];
        assert_eq!(
            fields.resolve(&sources, Presence::Truthy),
            Some(&json!("Widget"))
        );
    }

    #[test]
    fn test_resolve_truthy_takes_last_source_as_is() {
        let request = GatewayRequest::new()
            .with_body(json!({"item_name": ""}))
            .with_direct_field("item_name", "");
        let fields = request.fields();

        let sources = [FieldSource::Body("item_name"), FieldSource::Direct("item_name")];
        assert_eq!(fields.resolve(&sources, Presence::Truthy), Some(&json!("")));
    }

    #[test]
    fn test_resolve_truthy_falsy_only_source_is_absent() {
        let request = GatewayRequest::new().with_body(json!({"item_name": ""}));
        let fields = request.fields();

        let sources = [FieldSource::Body("item_name"), FieldSource::Direct("item_name")];
        assert!(fields.resolve(&sources, Presence::Truthy).is_none());
    }

    #[test]
    fn test_resolve_follows_source_order() {
        let request = GatewayRequest::new()
            .with_path_parameter("id", "7")
            .with_query_parameter("location_id", "8");
        let fields = request.fields();

        let path_first = [FieldSource::Path("id"), FieldSource::Query("location_id")];
        let query_first = [FieldSource::Query("location_id"), FieldSource::Path("id")];
        assert_eq!(fields.resolve(&path_first, Presence::NonNull), Some(&json!("7")));
        assert_eq!(fields.resolve(&query_first, Presence::NonNull), Some(&json!("8")));
    }

    #[test]
    fn test_is_truthy() {
        assert!(!is_truthy(&json!(null)));
        assert!(!is_truthy(&json!(false)));
        assert!(!is_truthy(&json!(0)));
        assert!(!is_truthy(&json!(0.0)));
        assert!(!is_truthy(&json!("")));
        assert!(!is_truthy(&json!([])));
        assert!(!is_truthy(&json!({})));
        assert!(is_truthy(&json!("0")));
        assert!(is_truthy(&json!(-1)));
        assert!(is_truthy(&json!(true)));
    }
}
