//! Common test utilities for the relay
//!
//! Shared fixtures and a harness that runs the real router against a mock
//! OpenRouter server.

#![allow(dead_code)]

use std::sync::Arc;

use axum_test::TestServer;

use openrouter_relay::{routes, AppState, Config};

use crate::mocks::MockOpenRouter;

/// Test configuration constants
pub mod constants {
    /// Key sent by the browser in `x-api-key`
    pub const TEST_HEADER_API_KEY: &str = "sk-or-header-key";
    /// Key configured through the environment
    pub const TEST_FALLBACK_API_KEY: &str = "sk-or-fallback-key";
    /// Referer configured as fallback
    pub const TEST_DEFAULT_REFERER: &str = "https://arena.fallback.test";
    /// Address nothing listens on
    pub const UNREACHABLE_API_URL: &str = "http://127.0.0.1:1/api/v1";
}

/// Sample request/response data for tests
pub mod test_data {
    use serde_json::{json, Value};

    /// Valid relay request
    pub fn valid_chat_request() -> Value {
        json!({
            "model": "openai/gpt-4o-mini",
            "messages": [
                {"role": "system", "content": "You are debater A."},
                {"role": "user", "content": "Is a hot dog a sandwich?"}
            ]
        })
    }

    /// Relay request missing messages
    pub fn chat_request_no_messages() -> Value {
        json!({"model": "openai/gpt-4o-mini"})
    }

    /// Relay request with empty messages
    pub fn chat_request_empty_messages() -> Value {
        json!({"model": "openai/gpt-4o-mini", "messages": []})
    }

    /// Relay request missing model
    pub fn chat_request_no_model() -> Value {
        json!({"messages": [{"role": "user", "content": "Hello"}]})
    }

    /// Minimal upstream completion
    pub fn completion() -> Value {
        json!({"choices": [{"message": {"content": "hi"}}]})
    }
}

/// Build a config pointing at `api_url`
pub fn test_config(api_url: &str, fallback_key: Option<&str>) -> Config {
    Config {
        openrouter_api_url: api_url.to_string(),
        openrouter_api_key: fallback_key.map(str::to_string),
        default_referer: constants::TEST_DEFAULT_REFERER.to_string(),
    }
}

/// Real router wired to a mock OpenRouter
pub struct RelayTestHarness {
    pub server: TestServer,
    pub openrouter: MockOpenRouter,
}

impl RelayTestHarness {
    /// Harness without a fallback key
    pub async fn new() -> Self {
        Self::with_fallback_key(None).await
    }

    /// Harness with an optional fallback key
    pub async fn with_fallback_key(fallback_key: Option<&str>) -> Self {
        let openrouter = MockOpenRouter::start().await;
        let config = test_config(&openrouter.api_url(), fallback_key);
        let server = server_for(config);

        Self { server, openrouter }
    }
}

/// Test server over the real router for `config`
pub fn server_for(config: Config) -> TestServer {
    server_for_state(AppState::new(config).expect("Failed to build app state"))
}

/// Test server over the real router for a prepared state
pub fn server_for_state(state: AppState) -> TestServer {
    TestServer::new(routes::create_router(Arc::new(state))).expect("Failed to create test server")
}
