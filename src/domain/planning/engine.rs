//! Planning Engine - chains the calculators into a complete plan.

use serde::Serialize;

use super::conflict_generator::{ConflictGenerator, ConflictRecord};
use super::decision_calculator::{AgentDecision, DecisionCalculator, PlanningMode};
use super::projection_generator::{ProjectionGenerator, Projections};
use super::result_aggregator::{PlanSummary, ResultAggregator};
use crate::domain::baseline::{CompanyBaseline, DEFAULT_BASE_INVESTMENT};
use crate::domain::intent::IntentRecord;

/// Investment ceiling used when a request omits one.
pub const DEFAULT_INVESTMENT_LIMIT: f64 = DEFAULT_BASE_INVESTMENT;

/// Timeline used when a request omits one.
pub const DEFAULT_TIMELINE_WEEKS: u32 = 12;

/// Investment ceiling and timeline for a plan, already defaulted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanRequest {
    investment_limit: f64,
    timeline_weeks: u32,
}

impl PlanRequest {
    /// Absent, zero, negative or non-finite ceilings become the default;
    /// an absent or zero timeline becomes 12 weeks.
    pub fn new(investment_limit: Option<f64>, timeline_weeks: Option<u32>) -> Self {
        let investment_limit = investment_limit
            .filter(|limit| limit.is_finite() && *limit > 0.0)
            .unwrap_or(DEFAULT_INVESTMENT_LIMIT);
        let timeline_weeks = timeline_weeks
            .filter(|weeks| *weeks > 0)
            .unwrap_or(DEFAULT_TIMELINE_WEEKS);
        Self {
            investment_limit,
            timeline_weeks,
        }
    }

    pub fn investment_limit(&self) -> f64 {
        self.investment_limit
    }

    pub fn timeline_weeks(&self) -> u32 {
        self.timeline_weeks
    }
}

impl Default for PlanRequest {
    fn default() -> Self {
        Self::new(None, None)
    }
}

/// Everything a calculation produces.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanBundle {
    pub mode: PlanningMode,
    pub summary: PlanSummary,
    pub agents: Vec<AgentDecision>,
    pub projections: Projections,
    pub conflicts: Vec<ConflictRecord>,
}

pub struct PlanningEngine;

impl PlanningEngine {
    /// Pure: identical inputs always give an identical bundle.
    pub fn plan(
        intent: &IntentRecord,
        request: &PlanRequest,
        baseline: &CompanyBaseline,
    ) -> PlanBundle {
        let agents = DecisionCalculator::compute(
            intent,
            request.investment_limit,
            request.timeline_weeks,
            baseline,
        );
        let conflicts =
            ConflictGenerator::generate(intent, request.investment_limit, request.timeline_weeks);
        let projections =
            ProjectionGenerator::generate(intent.target_percentage, request.timeline_weeks);
        let summary = ResultAggregator::summarize(intent, &agents);

        PlanBundle {
            mode: PlanningMode::from_implication(intent.budget_implication),
            summary,
            agents,
            projections,
            conflicts,
        }
    }
}
