//! Configuration management for the relay
//!
//! Configuration is loaded from environment variables. [`Config`] holds what
//! every hosting shell needs; [`ServerConfig`] holds listener settings read
//! only by the server binary.

use anyhow::{Context, Result};
use std::env;

/// Default OpenRouter API base URL
pub const DEFAULT_OPENROUTER_API_URL: &str = "https://openrouter.ai/api/v1";

/// Referer sent upstream when the inbound request carries neither origin nor referer
pub const DEFAULT_REFERER: &str = "https://ai-chat-arena.netlify.app";

/// Default inbound body limit for `/api/chat` (16 MiB)
pub const DEFAULT_MAX_BODY_BYTES: usize = 16 * 1024 * 1024;

/// Relay configuration shared by all hosting shells
#[derive(Debug, Clone)]
pub struct Config {
    /// OpenRouter API base URL (without trailing slash)
    pub openrouter_api_url: String,
    /// Fallback OpenRouter API key, used when the caller sends no `x-api-key`
    pub openrouter_api_key: Option<String>,

    /// Fallback value for the outbound `HTTP-Referer` header
    pub default_referer: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Ok(Self::from_lookup(|key| env::var(key).ok()))
    }

    /// Load configuration from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            openrouter_api_url: lookup("OPENROUTER_API_URL")
                .unwrap_or_else(|| DEFAULT_OPENROUTER_API_URL.to_string())
                .trim_end_matches('/')
                .to_string(),
            openrouter_api_key: lookup("OPENROUTER_API_KEY").filter(|key| !key.is_empty()),

            default_referer: lookup("RELAY_DEFAULT_REFERER")
                .filter(|referer| !referer.is_empty())
                .unwrap_or_else(|| DEFAULT_REFERER.to_string()),
        }
    }

    /// Whether a fallback API key is configured
    pub fn has_fallback_key(&self) -> bool {
        self.openrouter_api_key.is_some()
    }
}

/// Listener settings for the persistent-process server
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Largest request body accepted on `/api/chat`
    pub max_body_bytes: usize,
}

impl ServerConfig {
    /// Load server settings from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load server settings from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            host: lookup("RELAY_HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: lookup("PORT")
                .unwrap_or_else(|| "3000".to_string())
                .parse()
                .context("Invalid PORT")?,
            max_body_bytes: match lookup("RELAY_MAX_BODY_BYTES") {
                Some(value) => value.parse().context("Invalid RELAY_MAX_BODY_BYTES")?,
                None => DEFAULT_MAX_BODY_BYTES,
            },
        })
    }
}
