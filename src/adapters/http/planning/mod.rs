//! HTTP adapter for planning endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    AgentDecisionResponse, CalculateRequest, CalculatedMetricsResponse, ConflictResponse,
    ProjectionPointResponse,
};
pub use handlers::PlanningAppState;
pub use routes::{planning_router, planning_routes};
