//! Translation between HTTP and the gateway envelope.
//!
//! `GatewayEvent` builds a `GatewayRequest` the way an API gateway would:
//! path parameters, a non-empty query string, and the raw body as a string.
//! `GatewayReply` renders a `GatewayResponse` back into an HTTP response.

use std::collections::HashMap;

use axum::{
    body::Bytes,
    extract::{FromRequest, FromRequestParts, Path, Query, Request},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use serde_json::{Map, Value};

use inventory_core::gateway::{GatewayRequest, GatewayResponse};

/// Extractor producing the gateway envelope for the current HTTP request.
#[derive(Debug)]
pub struct GatewayEvent(pub GatewayRequest);

impl<S> FromRequest<S> for GatewayEvent
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let (mut parts, body) = req.into_parts();

        // Routes without parameters reject the extractor; treat that as none.
        let path_parameters = Path::<HashMap<String, String>>::from_request_parts(&mut parts, state)
            .await
            .ok()
            .and_then(|Path(params)| to_parameters(params));

        let query_string_parameters = Query::<HashMap<String, String>>::try_from_uri(&parts.uri)
            .map_err(IntoResponse::into_response)?
            .0;

        let bytes = Bytes::from_request(Request::from_parts(parts, body), state)
            .await
            .map_err(IntoResponse::into_response)?;

        Ok(Self(GatewayRequest {
            body: (!bytes.is_empty())
                .then(|| Value::String(String::from_utf8_lossy(&bytes).into_owned())),
            path_parameters,
            query_string_parameters: to_parameters(query_string_parameters),
            direct: Map::new(),
        }))
    }
}

fn to_parameters(params: HashMap<String, String>) -> Option<Map<String, Value>> {
    if params.is_empty() {
        return None;
    }
    Some(
        params
            .into_iter()
            .map(|(name, value)| (name, Value::String(value)))
            .collect(),
    )
}

/// Responder rendering a `GatewayResponse` as JSON over HTTP.
#[derive(Debug)]
pub struct GatewayReply(pub GatewayResponse);

impl IntoResponse for GatewayReply {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.0.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        (
            status,
            [(header::CONTENT_TYPE, "application/json")],
            self.0.body,
        )
            .into_response()
    }
}
