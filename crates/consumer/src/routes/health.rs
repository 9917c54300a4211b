//! Health check endpoint.

use axum::Json;
use serde::Serialize;

use super::consumer::{MICROSERVICE_NAME, MICROSERVICE_VERSION};

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
}

/// GET /health — reports that the process is up and serving.
pub async fn check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        service: MICROSERVICE_NAME,
        version: MICROSERVICE_VERSION,
    })
}
