//! Gateway request/response envelopes.
//!
//! Handlers consume a [`GatewayRequest`] and always produce a
//! [`GatewayResponse`]; transport adapters translate to and from these.

mod request;
mod response;

pub use request::{is_truthy, FieldSource, GatewayRequest, Presence, RequestFields};
pub use response::GatewayResponse;
