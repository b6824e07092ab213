//! Mock OpenRouter API for testing
//!
//! Serves `POST /api/v1/chat/completions` with configurable replies and
//! records every request it receives.

#![allow(dead_code)]

use serde_json::Value;
use wiremock::{
    matchers::{header, method, path},
    Mock, MockServer, ResponseTemplate,
};

/// Path the relay posts to, relative to the mock root
pub const CHAT_COMPLETIONS_PATH: &str = "/api/v1/chat/completions";

/// Mock OpenRouter server wrapper
pub struct MockOpenRouter {
    server: MockServer,
}

impl MockOpenRouter {
    /// Start a new mock OpenRouter server
    pub async fn start() -> Self {
        let server = MockServer::start().await;
        Self { server }
    }

    /// Base URL to configure as `openrouter_api_url`
    pub fn api_url(&self) -> String {
        format!("{}/api/v1", self.server.uri())
    }

    /// All requests received so far
    pub async fn received_requests(&self) -> Vec<wiremock::Request> {
        self.server.received_requests().await.unwrap_or_default()
    }

    /// Requests received on the chat-completions path
    pub async fn chat_requests(&self) -> Vec<wiremock::Request> {
        self.received_requests()
            .await
            .into_iter()
            .filter(|r| r.url.path() == CHAT_COMPLETIONS_PATH)
            .collect()
    }

    /// Reply with `status` and the given raw JSON text
    pub async fn mock_chat_raw(&self, status: u16, body: &str) {
        Mock::given(method("POST"))
            .and(path(CHAT_COMPLETIONS_PATH))
            .respond_with(
                ResponseTemplate::new(status).set_body_raw(body.to_owned(), "application/json"),
            )
            .mount(&self.server)
            .await;
    }

    /// Reply 200 with the given JSON
    pub async fn mock_chat_success(&self, body: &Value) {
        Mock::given(method("POST"))
            .and(path(CHAT_COMPLETIONS_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&self.server)
            .await;
    }

    /// Reply 200 only when the call carries the expected bearer key
    pub async fn mock_chat_success_for_key(&self, api_key: &str, body: &Value) {
        Mock::given(method("POST"))
            .and(path(CHAT_COMPLETIONS_PATH))
            .and(header("authorization", format!("Bearer {}", api_key).as_str()))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&self.server)
            .await;
    }

    /// Reply with a non-success status and JSON error body
    pub async fn mock_chat_error(&self, status: u16, body: &Value) {
        Mock::given(method("POST"))
            .and(path(CHAT_COMPLETIONS_PATH))
            .respond_with(ResponseTemplate::new(status).set_body_json(body))
            .mount(&self.server)
            .await;
    }

    /// Reply 200 with a body that is not JSON
    pub async fn mock_chat_non_json(&self) {
        Mock::given(method("POST"))
            .and(path(CHAT_COMPLETIONS_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&self.server)
            .await;
    }
}
