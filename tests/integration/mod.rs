//! Integration tests for the relay
//!
//! These tests drive the real router and function shell against a mock
//! OpenRouter server.
