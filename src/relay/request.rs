//! Inbound chat request parsing and credential/referer resolution

use axum::http::HeaderMap;
use serde_json::Value;

use crate::error::{RelayError, RelayResult};

/// Header carrying a caller-supplied OpenRouter key
pub const API_KEY_HEADER: &str = "x-api-key";

/// Validated inbound chat request
///
/// `messages` is passed upstream verbatim; its contents are never inspected.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<Value>,
}

impl ChatRequest {
    /// Parse and validate a raw request body.
    ///
    /// Checks run in order: JSON syntax, `messages`, `model`. A body that is
    /// valid JSON but not an object has no `messages`.
    pub fn parse(body: &[u8]) -> RelayResult<Self> {
        let value: Value = serde_json::from_slice(body).map_err(|e| {
            RelayError::Server(anyhow::Error::new(e).context("Failed to parse request body"))
        })?;

        let mut fields = match value {
            Value::Object(fields) => fields,
            _ => return Err(RelayError::MissingMessages),
        };

        let messages = match fields.remove("messages") {
            Some(Value::Array(messages)) if !messages.is_empty() => messages,
            _ => return Err(RelayError::MissingMessages),
        };

        let model = match fields.remove("model") {
            Some(Value::String(model)) if !model.is_empty() => model,
            _ => return Err(RelayError::MissingModel),
        };

        Ok(Self { model, messages })
    }
}

fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty())
}

/// Resolve the credential: a non-empty `x-api-key` header wins over the fallback.
///
/// A header that is present but not visible ASCII is rejected rather than
/// replaced by the fallback, so a caller's own key is never silently swapped.
pub fn resolve_api_key(headers: &HeaderMap, fallback: Option<&str>) -> RelayResult<String> {
    match headers.get(API_KEY_HEADER) {
        Some(value) if !value.is_empty() => value
            .to_str()
            .map(str::to_string)
            .map_err(|_| RelayError::MissingApiKey),
        _ => fallback
            .filter(|key| !key.is_empty())
            .map(str::to_string)
            .ok_or(RelayError::MissingApiKey),
    }
}

/// Resolve the upstream referer: origin, then referer, then the configured default.
pub fn resolve_referer(headers: &HeaderMap, default: &str) -> String {
    header_str(headers, "origin")
        .or_else(|| header_str(headers, "referer"))
        .unwrap_or(default)
        .to_string()
}
