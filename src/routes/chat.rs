//! Chat relay endpoint
//!
//! Adapts axum requests to the shared relay handler.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, State},
    http::{HeaderMap, Method},
    response::{IntoResponse, Response},
};

use crate::{relay::RelayRequest, AppState};

/// Relay a chat request to OpenRouter
///
/// Bodies are taken as raw bytes so malformed JSON reaches the relay's own
/// error mapping instead of axum's extractor rejection. A body that cannot be
/// buffered (over the size limit, or a broken stream) is answered by the relay
/// too, so the client always gets the JSON error shape.
pub async fn relay_chat(
    State(state): State<Arc<AppState>>,
    method: Method,
    headers: HeaderMap,
    body: Result<Bytes, BytesRejection>,
) -> Response {
    match body {
        Ok(body) => state
            .relay
            .handle(RelayRequest::new(method, headers, body))
            .await
            .into_response(),
        Err(rejection) => state
            .relay
            .handle_unreadable(&method, anyhow::Error::new(rejection))
            .into_response(),
    }
}
