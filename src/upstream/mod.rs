//! Upstream abstraction
//!
//! The relay talks to its chat-completions backend through the [`Upstream`]
//! trait so the handler can be driven by a stub in tests.

pub mod headers;
pub mod openrouter;

use async_trait::async_trait;
use axum::http::StatusCode;
use bytes::Bytes;
use serde::Serialize;
use serde_json::Value;

use crate::relay::{ChatRequest, MAX_TOKENS, TEMPERATURE};

pub use openrouter::OpenRouterClient;

/// JSON body of the outbound chat-completions call
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutboundChat {
    pub model: String,
    pub messages: Vec<Value>,
    pub max_tokens: u32,
    pub temperature: f64,
}

impl From<ChatRequest> for OutboundChat {
    fn from(request: ChatRequest) -> Self {
        Self {
            model: request.model,
            messages: request.messages,
            max_tokens: MAX_TOKENS,
            temperature: TEMPERATURE,
        }
    }
}

/// One outbound call, fully resolved
#[derive(Debug, Clone)]
pub struct UpstreamRequest {
    /// Bearer credential
    pub api_key: String,
    /// Value for the `HTTP-Referer` header
    pub referer: String,
    pub body: OutboundChat,
}

/// Raw upstream reply; the body is not yet interpreted
#[derive(Debug, Clone)]
pub struct UpstreamResponse {
    pub status: StatusCode,
    pub body: Bytes,
}

/// Chat-completions backend
///
/// `send` returns `Err` only when no HTTP reply was obtained at all.
/// Non-success statuses are returned as `Ok` so the caller can mirror them.
#[async_trait]
pub trait Upstream: Send + Sync {
    /// Provider name for logging
    fn name(&self) -> &'static str;

    /// Issue a single chat-completions call
    async fn send(&self, request: UpstreamRequest) -> anyhow::Result<UpstreamResponse>;
}
