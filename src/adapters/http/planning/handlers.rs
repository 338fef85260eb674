//! HTTP handlers for planning endpoints.

use std::sync::Arc;
use std::time::Duration;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::adapters::http::error::ErrorResponse;
use crate::application::handlers::planning::{CalculatePlanCommand, CalculatePlanHandler};
use crate::ports::{BaselineStore, IntentExtractor};

use super::dto::{CalculateRequest, CalculatedMetricsResponse};

// ════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════

/// Dependencies of the planning endpoints.
#[derive(Clone)]
pub struct PlanningAppState {
    pub intent_extractor: Arc<dyn IntentExtractor>,
    pub baseline_store: Arc<dyn BaselineStore>,
    /// Upper bound on one intent extraction.
    pub extraction_timeout: Duration,
}

impl PlanningAppState {
    pub fn calculate_plan_handler(&self) -> CalculatePlanHandler {
        CalculatePlanHandler::new(
            self.intent_extractor.clone(),
            self.baseline_store.clone(),
            self.extraction_timeout,
        )
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Command Handlers (POST endpoints)
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/calculate - Turn a directive into a department plan
pub async fn calculate(
    State(state): State<PlanningAppState>,
    payload: Result<Json<CalculateRequest>, JsonRejection>,
) -> Response {
    let Json(req) = match payload {
        Ok(payload) => payload,
        Err(rejection) => {
            return ErrorResponse::bad_request(rejection.body_text())
                .into_response_with(rejection.status());
        }
    };

    let cmd = CalculatePlanCommand {
        timeline_weeks: req.timeline(),
        investment_limit: req.investment_limit,
        prompt: req.prompt,
    };

    let result = state.calculate_plan_handler().handle(cmd).await;
    let response: CalculatedMetricsResponse = result.bundle.into();
    (StatusCode::OK, Json(response)).into_response()
}
