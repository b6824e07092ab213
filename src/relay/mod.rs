//! Relay core
//!
//! Hosting-neutral request/response boundary shared by the server and the
//! single-invocation function shells.

pub mod handler;
pub mod logging;
pub mod request;

use axum::{
    body::Body,
    http::{header, HeaderMap, Method, StatusCode},
    response::{IntoResponse, Response},
};
use bytes::Bytes;

pub use handler::{RelayHandler, RelaySettings};
pub use logging::RelayContext;
pub use request::{resolve_api_key, resolve_referer, ChatRequest};

/// Upper bound on generated tokens sent with every upstream call
pub const MAX_TOKENS: u32 = 512;

/// Sampling temperature sent with every upstream call
pub const TEMPERATURE: f64 = 0.9;

/// Inbound request as seen by the relay
#[derive(Debug, Clone)]
pub struct RelayRequest {
    pub method: Method,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl RelayRequest {
    pub fn new(method: Method, headers: HeaderMap, body: impl Into<Bytes>) -> Self {
        Self {
            method,
            headers,
            body: body.into(),
        }
    }
}

/// Outbound response produced by the relay. The body is always JSON.
#[derive(Debug, Clone)]
pub struct RelayResponse {
    pub status: StatusCode,
    pub body: Bytes,
}

impl RelayResponse {
    pub fn json(status: StatusCode, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

impl IntoResponse for RelayResponse {
    fn into_response(self) -> Response {
        (
            self.status,
            [(header::CONTENT_TYPE, "application/json")],
            Body::from(self.body),
        )
            .into_response()
    }
}
