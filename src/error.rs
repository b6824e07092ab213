//! Error types for the relay
//!
//! Every failure is translated into an HTTP status and a fixed-shape
//! `{ "error": ... }` JSON body before it leaves the relay.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use bytes::Bytes;
use serde::Serialize;
use serde_json::value::RawValue;
use thiserror::Error;

use crate::relay::RelayResponse;

/// Body used when even the error body cannot be serialized
const FALLBACK_ERROR_BODY: &[u8] = br#"{"error":"Server error contacting OpenRouter"}"#;

/// Relay-level errors
#[derive(Debug, Error)]
pub enum RelayError {
    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("messages array is required")]
    MissingMessages,

    #[error("model is required")]
    MissingModel,

    #[error("API key required. Please provide your OpenRouter API key.")]
    MissingApiKey,

    /// OpenRouter answered with a non-success status
    #[error("OpenRouter error")]
    Upstream {
        status: StatusCode,
        detail: Box<RawValue>,
    },

    /// Anything unexpected: malformed inbound JSON, network failure, bad upstream body
    #[error("Server error contacting OpenRouter")]
    Server(#[source] anyhow::Error),
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse<'a> {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<&'a RawValue>,
}

impl RelayError {
    /// HTTP status this error is reported with
    pub fn status(&self) -> StatusCode {
        match self {
            RelayError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            RelayError::MissingMessages | RelayError::MissingModel => StatusCode::BAD_REQUEST,
            RelayError::MissingApiKey => StatusCode::UNAUTHORIZED,
            RelayError::Upstream { status, .. } => *status,
            RelayError::Server(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Short label for logs and metrics
    pub fn kind(&self) -> &'static str {
        match self {
            RelayError::MethodNotAllowed => "method_not_allowed",
            RelayError::MissingMessages | RelayError::MissingModel => "bad_request",
            RelayError::MissingApiKey => "unauthorized",
            RelayError::Upstream { .. } => "upstream_error",
            RelayError::Server(_) => "server_error",
        }
    }

    /// Render this error as a hosting-neutral response
    pub fn to_relay_response(&self) -> RelayResponse {
        let detail = match self {
            RelayError::Upstream { detail, .. } => Some(detail.as_ref()),
            _ => None,
        };

        let body = ErrorResponse {
            error: self.to_string(),
            detail,
        };

        let bytes = serde_json::to_vec(&body)
            .map(Bytes::from)
            .unwrap_or_else(|_| Bytes::from_static(FALLBACK_ERROR_BODY));

        RelayResponse::json(self.status(), bytes)
    }
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        self.to_relay_response().into_response()
    }
}

/// Result type alias for convenience
pub type RelayResult<T> = Result<T, RelayError>;
