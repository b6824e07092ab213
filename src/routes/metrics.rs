//! Prometheus metrics endpoint
//!
//! Exposes relay metrics in Prometheus format for monitoring.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use once_cell::sync::OnceCell;

/// Global Prometheus handle for metrics export
static PROMETHEUS_HANDLE: OnceCell<PrometheusHandle> = OnceCell::new();

/// Initialize metrics (call once at startup)
pub fn init_metrics() -> anyhow::Result<()> {
    PROMETHEUS_HANDLE.get_or_try_init(|| PrometheusBuilder::new().install_recorder())?;
    register_metrics();
    Ok(())
}

/// Describe all custom metrics
fn register_metrics() {
    metrics::describe_counter!(
        "relay_requests_total",
        "Total number of relay requests by outcome"
    );
    metrics::describe_histogram!(
        "relay_request_duration_seconds",
        "Relay request duration in seconds"
    );
    metrics::describe_counter!(
        "relay_upstream_status_total",
        "Upstream responses by HTTP status"
    );
}

/// Prometheus metrics endpoint handler
///
/// Returns an empty body when the recorder was never installed.
pub async fn prometheus_metrics() -> impl IntoResponse {
    match PROMETHEUS_HANDLE.get() {
        Some(handle) => (StatusCode::OK, handle.render()),
        None => (StatusCode::OK, String::new()),
    }
}

/// Record a finished relay request
pub fn record_relay(outcome: &str, status: StatusCode, duration_secs: f64) {
    metrics::counter!(
        "relay_requests_total",
        "outcome" => outcome.to_string(),
        "status" => status.as_u16().to_string()
    )
    .increment(1);
    metrics::histogram!("relay_request_duration_seconds", "outcome" => outcome.to_string())
        .record(duration_secs);
}

/// Record the status of an upstream reply
pub fn record_upstream_status(status: StatusCode) {
    metrics::counter!("relay_upstream_status_total", "status" => status.as_u16().to_string())
        .increment(1);
}
