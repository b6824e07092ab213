//! Health check endpoints
//!
//! - `/health` - Service status with relay configuration summary
//! - `/health/live` - Liveness check

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;

use crate::AppState;

/// Status reported while the process is serving
pub const HEALTHY: &str = "healthy";

/// Full health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: String,
    pub uptime_seconds: u64,
    pub timestamp: String,
    /// Whether requests without `x-api-key` can be served
    pub fallback_key_configured: bool,
}

/// Simple health response for liveness
#[derive(Debug, Serialize)]
pub struct SimpleHealthResponse {
    pub status: &'static str,
}

/// Full health check endpoint
///
/// The relay holds no dependencies of its own to check; OpenRouter is not
/// contacted here.
pub async fn health_check(
    State(state): State<Arc<AppState>>,
) -> (StatusCode, Json<HealthResponse>) {
    let response = HealthResponse {
        status: HEALTHY,
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.start_time.elapsed().as_secs(),
        timestamp: chrono::Utc::now().to_rfc3339(),
        fallback_key_configured: state.config.has_fallback_key(),
    };

    (StatusCode::OK, Json(response))
}

/// Liveness check endpoint
pub async fn liveness_check() -> (StatusCode, Json<SimpleHealthResponse>) {
    (
        StatusCode::OK,
        Json(SimpleHealthResponse {
            status: HEALTHY,
        }),
    )
}
