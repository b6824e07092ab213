//! Header construction for OpenRouter calls
//!
//! Only the fixed set below is sent upstream. Inbound client headers are
//! never copied through.

use anyhow::{Context, Result};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION, CONTENT_TYPE};

/// Attribution header OpenRouter reads the calling site from
pub const HTTP_REFERER: HeaderName = HeaderName::from_static("http-referer");

/// Attribution header carrying the client title
pub const X_TITLE: HeaderName = HeaderName::from_static("x-title");

/// Client title sent with every call
pub const CLIENT_TITLE: &str = "OpenRouter Multi-Model Debate";

/// Build the outbound header set for one call
///
/// Fails when the key or referer cannot be expressed as a header value.
pub fn build_outbound_headers(api_key: &str, referer: &str) -> Result<HeaderMap> {
    let mut headers = HeaderMap::new();

    headers.insert(
        AUTHORIZATION,
        HeaderValue::from_str(&format!("Bearer {}", api_key))
            .context("API key is not a valid header value")?,
    );
    headers.insert(
        HTTP_REFERER,
        HeaderValue::from_str(referer).context("Referer is not a valid header value")?,
    );
    headers.insert(X_TITLE, HeaderValue::from_static(CLIENT_TITLE));
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

    Ok(headers)
}
