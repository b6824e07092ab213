//! Request logging for the relay
//!
//! Structured logging with short correlation IDs so a single relayed call
//! can be followed from inbound request to upstream status.

use std::time::Instant;

use axum::http::{Method, StatusCode};
use tracing::{debug, error, info, warn, Span};
use uuid::Uuid;

use crate::error::RelayError;

/// Context for tracking one relayed request
#[derive(Debug, Clone)]
pub struct RelayContext {
    /// Unique identifier for this request (for log correlation)
    pub trace_id: String,
    /// When the request started
    pub start_time: Instant,
    /// Upstream handling this request
    pub provider: String,
    /// Inbound method
    pub method: Method,
    /// Model requested by the caller, once validated
    pub model: Option<String>,
}

impl RelayContext {
    pub fn new(provider: &str, method: &Method) -> Self {
        Self {
            trace_id: Uuid::new_v4().to_string()[..8].to_string(),
            start_time: Instant::now(),
            provider: provider.to_string(),
            method: method.clone(),
            model: None,
        }
    }

    pub fn set_model(&mut self, model: impl Into<String>) {
        self.model = Some(model.into());
    }

    /// Elapsed time in milliseconds
    pub fn elapsed_ms(&self) -> u128 {
        self.start_time.elapsed().as_millis()
    }

    /// Elapsed time in seconds, for metrics
    pub fn elapsed_secs(&self) -> f64 {
        self.start_time.elapsed().as_secs_f64()
    }

    pub fn log_request_start(&self) {
        debug!(
            trace_id = %self.trace_id,
            method = %self.method,
            "Relay request received"
        );
    }

    pub fn log_upstream_request(&self, message_count: usize) {
        info!(
            trace_id = %self.trace_id,
            provider = %self.provider,
            model = ?self.model,
            messages = %message_count,
            "Forwarding chat request upstream"
        );
    }

    pub fn log_upstream_status(&self, status: StatusCode) {
        info!(
            trace_id = %self.trace_id,
            provider = %self.provider,
            status = %status.as_u16(),
            elapsed_ms = %self.elapsed_ms(),
            "Upstream responded"
        );
    }

    /// Log the body of a non-success upstream reply
    pub fn log_upstream_error(&self, status: StatusCode, body: &str) {
        error!(
            trace_id = %self.trace_id,
            provider = %self.provider,
            model = ?self.model,
            status = %status.as_u16(),
            body = %body,
            "Upstream error response"
        );
    }

    pub fn log_complete(&self) {
        info!(
            trace_id = %self.trace_id,
            provider = %self.provider,
            model = ?self.model,
            elapsed_ms = %self.elapsed_ms(),
            "Relay request completed"
        );
    }

    /// Log a request that ended in an error response
    pub fn log_failure(&self, err: &RelayError) {
        match err {
            RelayError::Server(cause) => error!(
                trace_id = %self.trace_id,
                provider = %self.provider,
                model = ?self.model,
                elapsed_ms = %self.elapsed_ms(),
                error = ?cause,
                "Relay request failed"
            ),
            RelayError::Upstream { status, .. } => warn!(
                trace_id = %self.trace_id,
                provider = %self.provider,
                model = ?self.model,
                status = %status.as_u16(),
                elapsed_ms = %self.elapsed_ms(),
                "Relay request returned upstream error"
            ),
            other => warn!(
                trace_id = %self.trace_id,
                method = %self.method,
                kind = %other.kind(),
                reason = %other,
                "Relay request rejected"
            ),
        }
    }

    /// Create a tracing span for this request
    pub fn create_span(&self) -> Span {
        tracing::info_span!(
            "relay_request",
            trace_id = %self.trace_id,
            provider = %self.provider,
            method = %self.method,
        )
    }
}
