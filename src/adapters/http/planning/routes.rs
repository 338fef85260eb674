//! Axum router configuration for planning endpoints.

use axum::{routing::post, Router};

use super::handlers::{calculate, PlanningAppState};

/// Create the planning API router.
///
/// # Routes
///
/// - `POST /calculate` - Directive to plan
pub fn planning_routes() -> Router<PlanningAppState> {
    Router::new().route("/calculate", post(calculate))
}

/// Planning router with its state applied.
pub fn planning_router(state: PlanningAppState) -> Router {
    planning_routes().with_state(state)
}
