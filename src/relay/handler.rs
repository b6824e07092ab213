//! Relay handler
//!
//! Validates an inbound chat request, resolves the credential, issues one
//! upstream call and maps the outcome to a response. Both hosting shells
//! delegate here.

use std::sync::Arc;

use axum::http::{Method, StatusCode};
use serde_json::value::RawValue;
use tracing::Instrument;

use super::{
    logging::RelayContext,
    request::{resolve_api_key, resolve_referer, ChatRequest},
    RelayRequest, RelayResponse,
};
use crate::{
    config::Config,
    error::{RelayError, RelayResult},
    routes::metrics::{record_relay, record_upstream_status},
    upstream::{OutboundChat, Upstream, UpstreamRequest},
};

/// Handler settings taken from [`Config`] at construction time
#[derive(Debug, Clone)]
pub struct RelaySettings {
    /// Credential used when the caller sends no `x-api-key`
    pub fallback_api_key: Option<String>,
    /// Referer used when the caller sends neither origin nor referer
    pub default_referer: String,
}

impl From<&Config> for RelaySettings {
    fn from(config: &Config) -> Self {
        Self {
            fallback_api_key: config.openrouter_api_key.clone(),
            default_referer: config.default_referer.clone(),
        }
    }
}

/// Shared forwarding logic
pub struct RelayHandler {
    settings: RelaySettings,
    upstream: Arc<dyn Upstream>,
}

impl RelayHandler {
    pub fn new(settings: RelaySettings, upstream: Arc<dyn Upstream>) -> Self {
        Self { settings, upstream }
    }

    /// Handle one inbound request. Every path produces a response.
    pub async fn handle(&self, request: RelayRequest) -> RelayResponse {
        let mut ctx = RelayContext::new(self.upstream.name(), &request.method);
        let span = ctx.create_span();
        ctx.log_request_start();

        let result = self.relay(request, &mut ctx).instrument(span).await;
        Self::finish(&ctx, result)
    }

    /// Answer a request whose body could not be read by the hosting shell.
    ///
    /// The method gate still runs first; a POST then gets the generic 500.
    pub fn handle_unreadable(&self, method: &Method, cause: anyhow::Error) -> RelayResponse {
        let ctx = RelayContext::new(self.upstream.name(), method);
        ctx.log_request_start();

        let result = if *method != Method::POST {
            Err(RelayError::MethodNotAllowed)
        } else {
            Err(RelayError::Server(cause.context("Failed to read request body")))
        };
        Self::finish(&ctx, result)
    }

    fn finish(ctx: &RelayContext, result: RelayResult<RelayResponse>) -> RelayResponse {
        match result {
            Ok(response) => {
                ctx.log_complete();
                record_relay("success", response.status, ctx.elapsed_secs());
                response
            }
            Err(err) => {
                ctx.log_failure(&err);
                record_relay(err.kind(), err.status(), ctx.elapsed_secs());
                err.to_relay_response()
            }
        }
    }

    async fn relay(
        &self,
        request: RelayRequest,
        ctx: &mut RelayContext,
    ) -> RelayResult<RelayResponse> {
        if request.method != Method::POST {
            return Err(RelayError::MethodNotAllowed);
        }

        let chat = ChatRequest::parse(&request.body)?;
        ctx.set_model(chat.model.clone());

        let api_key = resolve_api_key(
            &request.headers,
            self.settings.fallback_api_key.as_deref(),
        )?;

        let referer = resolve_referer(&request.headers, &self.settings.default_referer);

        ctx.log_upstream_request(chat.messages.len());

        let reply = self
            .upstream
            .send(UpstreamRequest {
                api_key,
                referer,
                body: OutboundChat::from(chat),
            })
            .await
            .map_err(RelayError::Server)?;

        ctx.log_upstream_status(reply.status);
        record_upstream_status(reply.status);

        let body: Box<RawValue> = serde_json::from_slice(&reply.body).map_err(|e| {
            RelayError::Server(anyhow::Error::new(e).context("OpenRouter returned a non-JSON body"))
        })?;

        if !reply.status.is_success() {
            ctx.log_upstream_error(reply.status, body.get());
            return Err(RelayError::Upstream {
                status: reply.status,
                detail: body,
            });
        }

        Ok(RelayResponse::json(StatusCode::OK, reply.body))
    }
}
