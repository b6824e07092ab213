//! Mock infrastructure for testing external services
//!
//! Provides a wiremock-based stand-in for the OpenRouter API.

pub mod openrouter;

pub use openrouter::*;
