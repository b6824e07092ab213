//! OpenRouter client
//!
//! Forwards chat-completions calls to the OpenRouter API.

use anyhow::Context;
use async_trait::async_trait;
use axum::http::StatusCode;
use tracing::{debug, error, instrument};

use super::{headers::build_outbound_headers, Upstream, UpstreamRequest, UpstreamResponse};
use crate::config::Config;

/// OpenRouter API client
pub struct OpenRouterClient {
    client: reqwest::Client,
    base_url: String,
}

impl OpenRouterClient {
    /// Create a new OpenRouter client
    pub fn new(client: reqwest::Client, config: &Config) -> Self {
        Self {
            client,
            base_url: config.openrouter_api_url.clone(),
        }
    }

    fn chat_completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }
}

#[async_trait]
impl Upstream for OpenRouterClient {
    fn name(&self) -> &'static str {
        "openrouter"
    }

    #[instrument(skip(self, request), fields(model = %request.body.model))]
    async fn send(&self, request: UpstreamRequest) -> anyhow::Result<UpstreamResponse> {
        let url = self.chat_completions_url();
        let headers = build_outbound_headers(&request.api_key, &request.referer)?;

        debug!(url = %url, "Sending request to OpenRouter");

        let response = self
            .client
            .post(&url)
            .headers(headers)
            .json(&request.body)
            .send()
            .await
            .map_err(|e| {
                error!(url = %url, error = %e, "Failed to send request to OpenRouter");
                e
            })
            .with_context(|| format!("Failed to reach OpenRouter at {}", url))?;

        let status = StatusCode::from_u16(response.status().as_u16())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        let body = response
            .bytes()
            .await
            .context("Failed to read OpenRouter response body")?;

        Ok(UpstreamResponse { status, body })
    }
}
