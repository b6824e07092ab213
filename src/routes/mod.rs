//! HTTP routes for the relay server
//!
//! This module defines all HTTP endpoints exposed by the persistent-process shell.

pub mod chat;
pub mod health;
pub mod metrics;

use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    routing::{any, get},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::AppState;

/// Path of the relay endpoint
pub const CHAT_PATH: &str = "/api/chat";

/// Create the main application router
pub fn create_router(state: Arc<AppState>) -> Router {
    // The browser client calls from its own origin
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Every method reaches the relay so non-POST gets the JSON 405 body
    let relay_routes = Router::new()
        .route(CHAT_PATH, any(chat::relay_chat))
        .layer(DefaultBodyLimit::max(state.max_body_bytes));

    let public_routes = Router::new()
        .route("/health", get(health::health_check))
        .route("/health/live", get(health::liveness_check))
        .route("/metrics", get(metrics::prometheus_metrics));

    Router::new()
        .merge(public_routes)
        .merge(relay_routes)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state)
}
