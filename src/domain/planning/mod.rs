//! Planning module - turns a structured directive into a department plan.
//!
//! # Components
//!
//! - `DecisionCalculator` - budget, headcount, confidence and risk per department
//! - `ConflictGenerator` - settled cross-department tensions
//! - `ProjectionGenerator` - profit and cost trajectories
//! - `ResultAggregator` - headline totals
//! - `PlanningEngine` - runs all of the above against one baseline
//!
//! Everything here is synchronous and pure.

mod conflict_generator;
mod decision_calculator;
mod department_profile;
mod engine;
mod projection_generator;
mod result_aggregator;
mod template;

pub use conflict_generator::{ConflictGenerator, ConflictRecord, ConflictStatus};
pub use decision_calculator::{
    investment_factor, timeline_factor, AgentDecision, DecisionCalculator, ModeParameters,
    PlanningMode, RiskTier, FULL_EFFECT_WEEKS,
};
pub use department_profile::{DepartmentProfile, DEPARTMENT_PROFILES};
pub use engine::{
    PlanBundle, PlanRequest, PlanningEngine, DEFAULT_INVESTMENT_LIMIT, DEFAULT_TIMELINE_WEEKS,
};
pub use projection_generator::{
    week_labels, ProjectionGenerator, ProjectionPoint, Projections, POINTS_PER_SERIES,
};
pub use result_aggregator::{headline_percentages, PlanSummary, ResultAggregator};
pub use template::{Segment, Template, TemplateParam, TemplateParams};
