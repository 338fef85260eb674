//! Liveness endpoint.

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Serialize;

use crate::ports::BaselineStore;

pub const SERVICE_NAME: &str = "agentic-enterprise-api";

#[derive(Clone)]
pub struct HealthState {
    /// Whether intents come from the remote language service.
    pub intent_service_available: bool,
    pub baseline_store: Arc<dyn BaselineStore>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub gemini_available: bool,
    pub company_data_loaded: bool,
}

pub fn health_routes() -> Router<HealthState> {
    Router::new().route("/health", get(health))
}

pub fn health_router(state: HealthState) -> Router {
    health_routes().with_state(state)
}

/// GET /api/health
pub async fn health(State(state): State<HealthState>) -> (StatusCode, Json<HealthResponse>) {
    let baseline = state.baseline_store.current().await;
    let payload = HealthResponse {
        status: "healthy",
        service: SERVICE_NAME,
        gemini_available: state.intent_service_available,
        company_data_loaded: baseline.is_loaded(),
    };
    (StatusCode::OK, Json(payload))
}
