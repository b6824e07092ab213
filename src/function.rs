//! Single-invocation function shell
//!
//! Adapts a serverless-style event (`httpMethod`, `headers`, `body`) to the
//! shared relay handler and renders the result as `statusCode`/`headers`/`body`.

use std::collections::HashMap;

use axum::http::{header, HeaderMap, HeaderName, HeaderValue, Method};
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::relay::{RelayHandler, RelayRequest, RelayResponse};

/// Inbound function event
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionEvent {
    pub http_method: String,
    #[serde(default)]
    pub headers: HashMap<String, String>,
    #[serde(default)]
    pub body: Option<String>,
}

/// Function result
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FunctionResponse {
    pub status_code: u16,
    pub headers: HashMap<String, String>,
    pub body: String,
}

impl FunctionEvent {
    /// Convert to the relay boundary type.
    ///
    /// A method string that is not a valid HTTP token is treated as GET, so
    /// the relay answers 405. Headers that are not valid HTTP are dropped.
    pub fn into_relay_request(self) -> RelayRequest {
        let method = Method::from_bytes(self.http_method.to_ascii_uppercase().as_bytes())
            .unwrap_or(Method::GET);

        let mut headers = HeaderMap::new();
        for (name, value) in &self.headers {
            match (
                HeaderName::from_bytes(name.as_bytes()),
                HeaderValue::from_str(value),
            ) {
                (Ok(name), Ok(value)) => {
                    headers.insert(name, value);
                }
                _ => debug!(header = %name, "Dropping invalid event header"),
            }
        }

        let body = self.body.map(Bytes::from).unwrap_or_default();

        RelayRequest::new(method, headers, body)
    }
}

impl From<RelayResponse> for FunctionResponse {
    fn from(response: RelayResponse) -> Self {
        let mut headers = HashMap::new();
        headers.insert(
            header::CONTENT_TYPE.as_str().to_string(),
            "application/json".to_string(),
        );

        Self {
            status_code: response.status.as_u16(),
            headers,
            body: String::from_utf8_lossy(&response.body).into_owned(),
        }
    }
}

/// Handle one function invocation
pub async fn handle_event(handler: &RelayHandler, event: FunctionEvent) -> FunctionResponse {
    handler.handle(event.into_relay_request()).await.into()
}
