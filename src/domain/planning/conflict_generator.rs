//! Conflict Generator - cross-department tensions and how they were settled.

use serde::Serialize;

use crate::domain::baseline::BaselineMetric;
use crate::domain::foundation::{format_currency, format_percent};
use crate::domain::intent::{Department, IntentRecord, ObjectiveType};

/// Outcome of a conflict. Every generated conflict is already settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ConflictStatus {
    Resolved,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConflictRecord {
    pub id: u32,
    pub conflict: String,
    pub versus: String,
    pub resolution: String,
    pub status: ConflictStatus,
    pub departments: Vec<Department>,
    /// Negative when the resolution costs money.
    pub savings_impact: i64,
}

impl ConflictRecord {
    fn resolved(
        id: u32,
        conflict: &str,
        versus: &str,
        resolution: String,
        departments: &[Department],
        savings_impact: i64,
    ) -> Self {
        Self {
            id,
            conflict: conflict.to_string(),
            versus: versus.to_string(),
            resolution,
            status: ConflictStatus::Resolved,
            departments: departments.to_vec(),
            savings_impact,
        }
    }
}

/// Selects conflicts by objective type.
pub struct ConflictGenerator;

impl ConflictGenerator {
    /// One or two conflicts for the directive.
    ///
    /// # Selection
    /// - profit with a secondary objective: growth vs efficiency, marketing spend vs CAC
    /// - cost reduction: phased cuts with quality checkpoints
    /// - revenue: reallocation from reserves (negative savings)
    /// - anything else: efficiency vs business continuity
    pub fn generate(
        intent: &IntentRecord,
        investment_limit: f64,
        timeline_weeks: u32,
    ) -> Vec<ConflictRecord> {
        let target = intent.target_percentage;
        let share = |fraction: f64| (investment_limit * fraction).trunc() as i64;

        match intent.objective_type {
            ObjectiveType::Profit if intent.has_secondary_objective() => {
                let secondary = intent.secondary_percentage.unwrap_or(target * 0.15);
                let shifted = (target * 0.6).trunc() as i64;
                let cac = BaselineMetric::AvgCac.default_value();
                vec![
                    ConflictRecord::resolved(
                        1,
                        "Growth vs Efficiency",
                        "Cost Reduction Pressure",
                        format!(
                            "APPROVED: Prioritize automation over headcount reduction. Target {}% profit growth with {:.1}% cost reduction.",
                            format_percent(target),
                            secondary
                        ),
                        &[Department::Hr, Department::Operations],
                        share(0.12),
                    ),
                    ConflictRecord::resolved(
                        2,
                        "Marketing Spend",
                        "CAC Targets",
                        format!(
                            "APPROVED: Shift {}% budget to performance channels to maintain CAC at ${:.0}",
                            shifted, cac
                        ),
                        &[Department::Marketing, Department::Finance],
                        share(0.17),
                    ),
                ]
            }
            ObjectiveType::CostReduction => {
                let phase = timeline_weeks / 4;
                vec![ConflictRecord::resolved(
                    1,
                    "Deep Cost Cutting",
                    "Service Quality Maintenance",
                    format!(
                        "APPROVED: Phase {}% cost cuts over {} weeks with quality checkpoints at weeks {}, {}, {}",
                        format_percent(target),
                        phase,
                        phase,
                        phase * 2,
                        phase * 3
                    ),
                    &[Department::Operations, Department::Support, Department::Finance],
                    share(0.35),
                )]
            }
            ObjectiveType::Revenue => vec![ConflictRecord::resolved(
                1,
                "Aggressive Growth",
                "Resource Constraints",
                format!(
                    "APPROVED: Reallocate {} from reserves to support {}% revenue growth target",
                    format_currency(investment_limit * 0.25),
                    format_percent(target)
                ),
                &[Department::Sales, Department::Marketing, Department::Finance],
                -share(0.25),
            )],
            _ => vec![ConflictRecord::resolved(
                1,
                "Efficiency Optimization",
                "Business Continuity",
                format!(
                    "APPROVED: Implement {}% efficiency gains with zero disruption protocol over {} weeks",
                    format_percent(target),
                    timeline_weeks
                ),
                &[Department::Operations, Department::Finance],
                share(0.19),
            )],
        }
    }
}
