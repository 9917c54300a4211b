//! HTTP service echoing the calling tenant and the configured environment.
//!
//! The public router serves `GET /consumer` only; health and Prometheus
//! metrics live on a separate admin router so the public surface stays a
//! single route. Request logging goes through `tracing`.

pub mod config;
pub mod error;
pub mod routes;
pub mod server;

use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use metrics_exporter_prometheus::PrometheusHandle;
use tower_http::trace::TraceLayer;

pub use config::Config;
pub use error::{Result, ServerError};
pub use routes::consumer::AppState;
pub use server::Server;

/// Creates the public application router.
pub fn create_app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/consumer", get(routes::consumer::get))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

/// Creates the admin router carrying health and metrics endpoints.
pub fn create_admin_app(metrics_handle: PrometheusHandle) -> Router {
    Router::new()
        .route("/health", get(routes::health::check))
        .route("/metrics", get(routes::metrics::get))
        .with_state(metrics_handle)
        .layer(TraceLayer::new_for_http())
}

/// Builds the shared state handlers read from, taking the environment from `config`.
pub fn create_state(config: &Config) -> Arc<AppState> {
    Arc::new(AppState::new(config.environment.clone()))
}
