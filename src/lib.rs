//! OpenRouter relay
//!
//! Forwards chat-completion requests from a browser client to the OpenRouter
//! API, injecting the credential and attribution headers. The same handler
//! backs a long-running server and a single-invocation function entry point.

pub mod config;
pub mod error;
pub mod function;
pub mod relay;
pub mod routes;
pub mod upstream;

use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;

pub use crate::config::{Config, ServerConfig};
pub use crate::error::{RelayError, RelayResult};
pub use crate::relay::{RelayHandler, RelayRequest, RelayResponse, RelaySettings};
pub use crate::upstream::{OpenRouterClient, Upstream};

/// Application state shared across all request handlers
pub struct AppState {
    pub config: Config,
    pub start_time: Instant,
    pub relay: Arc<RelayHandler>,
    /// Largest body accepted on the relay route
    pub max_body_bytes: usize,
}

impl AppState {
    /// Create application state backed by the real OpenRouter client
    pub fn new(config: Config) -> Result<Self> {
        // Client defaults apply; no timeout override
        let http_client = reqwest::Client::builder().build()?;
        let upstream: Arc<dyn Upstream> = Arc::new(OpenRouterClient::new(http_client, &config));

        Ok(Self::with_upstream(config, upstream))
    }

    /// Create application state around an arbitrary upstream
    pub fn with_upstream(config: Config, upstream: Arc<dyn Upstream>) -> Self {
        let relay = Arc::new(RelayHandler::new(RelaySettings::from(&config), upstream));

        Self {
            config,
            start_time: Instant::now(),
            relay,
            max_body_bytes: crate::config::DEFAULT_MAX_BODY_BYTES,
        }
    }

    /// Override the relay route's body limit
    pub fn with_max_body_bytes(mut self, max_body_bytes: usize) -> Self {
        self.max_body_bytes = max_body_bytes;
        self
    }
}
