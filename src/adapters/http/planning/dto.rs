//! DTOs for planning endpoints.
//!
//! Response field names are camelCase to match the dashboard client.

use serde::{Deserialize, Serialize};

use crate::domain::planning::{
    AgentDecision, ConflictRecord, ConflictStatus, PlanBundle, ProjectionPoint, RiskTier,
};

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Request body for POST /api/calculate.
#[derive(Debug, Clone, Deserialize)]
pub struct CalculateRequest {
    pub prompt: String,
    #[serde(default)]
    pub investment_limit: Option<f64>,
    /// Negative values are treated as absent.
    #[serde(default)]
    pub timeline_weeks: Option<i64>,
}

impl CalculateRequest {
    pub fn timeline(&self) -> Option<u32> {
        self.timeline_weeks.and_then(|weeks| u32::try_from(weeks).ok())
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculatedMetricsResponse {
    pub profit_growth: f64,
    pub ctc_reduction: f64,
    pub overall_confidence: u8,
    pub total_savings: f64,
    pub total_headcount_change: i64,
    pub agents: Vec<AgentDecisionResponse>,
    pub profit_projection: Vec<ProjectionPointResponse>,
    pub ctc_projection: Vec<ProjectionPointResponse>,
    pub conflicts: Vec<ConflictResponse>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentDecisionResponse {
    pub name: String,
    pub icon: String,
    pub accent: String,
    pub decision: String,
    pub budget_impact: f64,
    pub headcount_impact: i64,
    pub confidence: u8,
    pub risk: RiskTier,
    pub trigger: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectionPointResponse {
    pub week: String,
    pub actual: Option<f64>,
    pub projected: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConflictResponse {
    pub id: u32,
    pub conflict: String,
    pub versus: String,
    pub resolution: String,
    pub status: ConflictStatus,
    pub agents: Vec<String>,
    pub savings_impact: i64,
}

impl From<AgentDecision> for AgentDecisionResponse {
    fn from(decision: AgentDecision) -> Self {
        Self {
            name: decision.department.name().to_string(),
            icon: decision.icon.to_string(),
            accent: decision.accent.to_string(),
            decision: decision.decision,
            budget_impact: decision.budget_impact,
            headcount_impact: decision.headcount_impact,
            confidence: decision.confidence,
            risk: decision.risk,
            trigger: decision.trigger,
        }
    }
}

impl From<ProjectionPoint> for ProjectionPointResponse {
    fn from(point: ProjectionPoint) -> Self {
        Self {
            week: point.week,
            actual: point.actual,
            projected: point.projected,
        }
    }
}

impl From<ConflictRecord> for ConflictResponse {
    fn from(record: ConflictRecord) -> Self {
        Self {
            id: record.id,
            conflict: record.conflict,
            versus: record.versus,
            resolution: record.resolution,
            status: record.status,
            agents: record
                .departments
                .iter()
                .map(|d| d.name().to_string())
                .collect(),
            savings_impact: record.savings_impact,
        }
    }
}

impl From<PlanBundle> for CalculatedMetricsResponse {
    fn from(bundle: PlanBundle) -> Self {
        Self {
            profit_growth: bundle.summary.profit_growth,
            ctc_reduction: bundle.summary.ctc_reduction,
            overall_confidence: bundle.summary.overall_confidence,
            total_savings: bundle.summary.total_savings,
            total_headcount_change: bundle.summary.total_headcount_change,
            agents: bundle.agents.into_iter().map(Into::into).collect(),
            profit_projection: bundle.projections.profit.into_iter().map(Into::into).collect(),
            ctc_projection: bundle.projections.cost.into_iter().map(Into::into).collect(),
            conflicts: bundle.conflicts.into_iter().map(Into::into).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::baseline::CompanyBaseline;
    use crate::domain::intent::{BudgetImplication, IntentRecord, ObjectiveType};
    use crate::domain::planning::{PlanRequest, PlanningEngine};

    fn bundle() -> PlanBundle {
        let intent = IntentRecord::new(ObjectiveType::CostReduction, 20.0)
            .with_budget_implication(BudgetImplication::CutCosts);
        PlanningEngine::plan(&intent, &PlanRequest::default(), &CompanyBaseline::unloaded())
    }

    #[test]
    fn response_uses_camel_case_keys() {
        let json = serde_json::to_value(CalculatedMetricsResponse::from(bundle())).unwrap();

        for key in [
            "profitGrowth",
            "ctcReduction",
            "overallConfidence",
            "totalSavings",
            "totalHeadcountChange",
            "agents",
            "profitProjection",
            "ctcProjection",
            "conflicts",
        ] {
            assert!(json.get(key).is_some(), "missing {}", key);
        }

        let agent = &json["agents"][0];
        assert_eq!(agent["name"], "Sales");
        assert_eq!(agent["icon"], "Briefcase");
        assert_eq!(agent["budgetImpact"], 85000.0);
        assert_eq!(agent["headcountImpact"], -3);
        assert_eq!(agent["risk"], "medium");

        let conflict = &json["conflicts"][0];
        assert_eq!(conflict["status"], "resolved");
        assert_eq!(conflict["savingsImpact"], 217000);
        assert_eq!(conflict["agents"][0], "Operations");
    }

    #[test]
    fn later_projection_points_have_null_actuals() {
        let json = serde_json::to_value(CalculatedMetricsResponse::from(bundle())).unwrap();
        assert!(json["profitProjection"][4]["actual"].is_null());
        assert_eq!(json["profitProjection"][0]["week"], "W1");
    }

    #[test]
    fn negative_timeline_is_absent() {
        let request: CalculateRequest =
            serde_json::from_str(r#"{"prompt": "x", "timeline_weeks": -4}"#).unwrap();
        assert_eq!(request.timeline(), None);

        let request: CalculateRequest =
            serde_json::from_str(r#"{"prompt": "x", "timeline_weeks": 8}"#).unwrap();
        assert_eq!(request.timeline(), Some(8));
    }
}
