//! Tenant echo endpoint.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::http::HeaderMap;
use axum::http::header::HeaderName;
use common::{Environment, TenantId};
use serde::Serialize;

/// Version reported by every response.
pub const MICROSERVICE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Service name reported by every response.
pub const MICROSERVICE_NAME: &str = "consumer";

/// Request header carrying the tenant identifier. Header names are
/// case-insensitive, so this matches `tenantID` as sent by callers.
pub const TENANT_HEADER: HeaderName = HeaderName::from_static("tenantid");

/// Shared application state accessible from all handlers.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub environment: Option<Environment>,
}

impl AppState {
    pub fn new(environment: Option<Environment>) -> Self {
        Self { environment }
    }
}

// The two constant keys keep their historical spelling for wire compatibility.
#[derive(Debug, Serialize)]
pub struct ConsumerResponse {
    pub tenant_id: Option<TenantId>,
    pub environment: Option<Environment>,
    #[serde(rename = "microsservice_version")]
    pub microservice_version: &'static str,
    #[serde(rename = "microserice")]
    pub microservice: &'static str,
}

impl ConsumerResponse {
    pub fn new(tenant_id: Option<TenantId>, environment: Option<Environment>) -> Self {
        Self {
            tenant_id,
            environment,
            microservice_version: MICROSERVICE_VERSION,
            microservice: MICROSERVICE_NAME,
        }
    }
}

/// Extracts the first `tenantID` header value, decoding non-UTF-8 bytes lossily.
pub fn tenant_from_headers(headers: &HeaderMap) -> Option<TenantId> {
    headers
        .get(&TENANT_HEADER)
        .map(|value| TenantId::from(String::from_utf8_lossy(value.as_bytes()).into_owned()))
}

/// GET /consumer — echo the calling tenant and the configured environment.
#[tracing::instrument(skip_all)]
pub async fn get(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Json<ConsumerResponse> {
    let tenant_id = tenant_from_headers(&headers);

    let tenant_header = if tenant_id.is_some() { "present" } else { "absent" };
    metrics::counter!("consumer_requests_total", "tenant_header" => tenant_header).increment(1);
    tracing::debug!(tenant_id = ?tenant_id, "answering consumer request");

    Json(ConsumerResponse::new(tenant_id, state.environment.clone()))
}
