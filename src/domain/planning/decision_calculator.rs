//! Decision Calculator - per-department budget, headcount and confidence figures.

use serde::{Deserialize, Serialize};

use super::department_profile::{DepartmentProfile, DEPARTMENT_PROFILES};
use super::template::TemplateParams;
use crate::domain::baseline::CompanyBaseline;
use crate::domain::foundation::round_to_tenth;
use crate::domain::intent::{BudgetImplication, Department, IntentRecord};

/// Timeline at which recommendations take full effect.
pub const FULL_EFFECT_WEEKS: f64 = 12.0;

/// How the budget stance of a directive is played out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanningMode {
    CostCutting,
    Investing,
    Reallocating,
}

impl PlanningMode {
    pub fn from_implication(implication: BudgetImplication) -> Self {
        match implication {
            BudgetImplication::CutCosts => Self::CostCutting,
            BudgetImplication::Invest => Self::Investing,
            BudgetImplication::Reallocate | BudgetImplication::Maintain => Self::Reallocating,
        }
    }

    pub fn parameters(&self) -> ModeParameters {
        match self {
            Self::CostCutting => ModeParameters {
                action: "Freeze",
                reverse_action: "2 SDR hires",
                percentage_multiplier: 0.8,
                count_divisor: 5.0,
                count_floor: 2,
                margin_multiplier: 0.15,
            },
            Self::Investing => ModeParameters {
                action: "Accelerate",
                reverse_action: "freeze",
                percentage_multiplier: 1.2,
                count_divisor: 10.0,
                count_floor: 1,
                margin_multiplier: 0.2,
            },
            Self::Reallocating => ModeParameters {
                action: "Optimize",
                reverse_action: "current pace",
                percentage_multiplier: 1.0,
                count_divisor: 7.0,
                count_floor: 2,
                margin_multiplier: 0.17,
            },
        }
    }

    /// Base budget figure a department uses in this mode.
    pub fn base_budget(&self, profile: &DepartmentProfile) -> f64 {
        match self {
            Self::CostCutting => profile.base_budget_positive,
            Self::Investing => profile.base_budget_negative,
            Self::Reallocating if profile.saves_when_reallocating() => {
                profile.base_budget_positive
            }
            Self::Reallocating => profile.base_budget_negative,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CostCutting => "cost_cutting",
            Self::Investing => "investing",
            Self::Reallocating => "reallocating",
        }
    }
}

/// Text parameters selected by a planning mode.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModeParameters {
    pub action: &'static str,
    pub reverse_action: &'static str,
    pub percentage_multiplier: f64,
    pub count_divisor: f64,
    pub count_floor: i64,
    pub margin_multiplier: f64,
}

impl ModeParameters {
    /// Template values for a target percentage. Percentage and count are
    /// truncated toward zero; margin is rounded to one decimal.
    pub fn template_params(&self, target_percentage: f64) -> TemplateParams {
        TemplateParams {
            action: self.action.to_string(),
            reverse_action: self.reverse_action.to_string(),
            percentage: (target_percentage * self.percentage_multiplier).trunc() as i64,
            number: self
                .count_floor
                .max((target_percentage / self.count_divisor).trunc() as i64),
            margin: round_to_tenth(target_percentage * self.margin_multiplier),
        }
    }
}

/// Risk tier derived from confidence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskTier {
    Low,
    Medium,
    High,
}

impl RiskTier {
    /// Low at 85 and above, medium at 70 and above, otherwise high.
    pub fn from_confidence(confidence: u8) -> Self {
        if confidence >= 85 {
            Self::Low
        } else if confidence >= 70 {
            Self::Medium
        } else {
            Self::High
        }
    }
}

/// Recommendation for one department.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AgentDecision {
    pub department: Department,
    pub icon: &'static str,
    pub accent: &'static str,
    pub decision: String,
    pub trigger: String,
    /// Whole currency units; positive figures are savings.
    pub budget_impact: f64,
    pub headcount_impact: i64,
    /// In `50..=99`.
    pub confidence: u8,
    pub risk: RiskTier,
}

/// Computes department decisions.
pub struct DecisionCalculator;

impl DecisionCalculator {
    /// One decision per department, in [`Department::ALL`] order.
    ///
    /// Pure given its inputs; out-of-range figures are clamped rather than rejected.
    pub fn compute(
        intent: &IntentRecord,
        investment_limit: f64,
        timeline_weeks: u32,
        baseline: &CompanyBaseline,
    ) -> Vec<AgentDecision> {
        let mode = PlanningMode::from_implication(intent.budget_implication);
        let params = mode
            .parameters()
            .template_params(intent.target_percentage);
        let trigger_params = params.for_trigger();

        let timeline = timeline_factor(timeline_weeks);
        let investment = investment_factor(investment_limit, baseline);
        let urgency = intent.urgency_level.multiplier();

        DEPARTMENT_PROFILES
            .iter()
            .map(|profile| {
                let mut budget_impact = (mode.base_budget(profile) * investment * urgency).round();
                let mut headcount_impact = (profile.base_headcount as f64 * timeline).round();
                if baseline.is_loaded() {
                    budget_impact = baseline.scale_budget(budget_impact).round();
                    headcount_impact = baseline.scale_headcount(headcount_impact).round();
                }

                let confidence = confidence(profile, timeline);

                AgentDecision {
                    department: profile.department,
                    icon: profile.icon,
                    accent: profile.accent,
                    decision: profile.decision.render(&params),
                    trigger: profile.trigger.render(&trigger_params),
                    budget_impact,
                    headcount_impact: headcount_impact as i64,
                    confidence,
                    risk: RiskTier::from_confidence(confidence),
                }
            })
            .collect()
    }
}

/// `clamp(weeks / 12, 0.6, 1.0)`.
pub fn timeline_factor(timeline_weeks: u32) -> f64 {
    (timeline_weeks as f64 / FULL_EFFECT_WEEKS).clamp(0.6, 1.0)
}

/// Sub-linear scaling of the investment ceiling against the company's
/// typical optimisation budget.
pub fn investment_factor(investment_limit: f64, baseline: &CompanyBaseline) -> f64 {
    let limit = if investment_limit.is_finite() {
        investment_limit.max(0.0)
    } else {
        0.0
    };
    (limit / baseline.base_investment()).powf(0.8)
}

fn confidence(profile: &DepartmentProfile, timeline_factor: f64) -> u8 {
    let raw = profile.base_confidence as f64 * timeline_factor * (1.0 - profile.risk_factor * 0.3);
    raw.round().clamp(50.0, 99.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::baseline::BaselineMetric;
    use crate::domain::intent::{ObjectiveType, UrgencyLevel};

    fn cost_cut_intent() -> IntentRecord {
        IntentRecord::new(ObjectiveType::CostReduction, 20.0)
            .with_budget_implication(BudgetImplication::CutCosts)
    }

    fn decision(decisions: &[AgentDecision], department: Department) -> &AgentDecision {
        decisions
            .iter()
            .find(|d| d.department == department)
            .unwrap()
    }

    #[test]
    fn returns_six_decisions_in_fixed_order() {
        let decisions = DecisionCalculator::compute(
            &IntentRecord::default(),
            620_000.0,
            12,
            &CompanyBaseline::unloaded(),
        );
        let order: Vec<_> = decisions.iter().map(|d| d.department).collect();
        assert_eq!(order, Department::ALL.to_vec());
    }

    #[test]
    fn cost_cutting_scenario_at_reference_size() {
        let decisions = DecisionCalculator::compute(
            &cost_cut_intent(),
            620_000.0,
            12,
            &CompanyBaseline::unloaded(),
        );

        let sales = decision(&decisions, Department::Sales);
        assert_eq!(sales.budget_impact, 85_000.0);
        assert_eq!(sales.headcount_impact, -3);
        assert_eq!(
            sales.decision,
            "Implement AI-powered lead scoring and automate outreach sequences. Freeze new SDR hiring."
        );
        assert_eq!(
            sales.trigger,
            "If Q2 pipeline drops below $2.5M, recommend 2 sdr hires"
        );

        let finance = decision(&decisions, Department::Finance);
        assert_eq!(finance.confidence, 91);
        assert_eq!(finance.risk, RiskTier::Low);
        assert_eq!(
            finance.decision,
            "Consolidate 4 vendor contracts. Implement dynamic pricing with 3.0% margin optimization."
        );

        let marketing = decision(&decisions, Department::Marketing);
        assert_eq!(marketing.budget_impact, -120_000.0);
        assert_eq!(marketing.confidence, 72);
        assert_eq!(marketing.risk, RiskTier::Medium);
        assert!(marketing.decision.starts_with("Shift 16% budget"));
    }

    #[test]
    fn investing_mode_uses_negative_budgets_and_lowercases_trigger() {
        let intent = IntentRecord::new(ObjectiveType::Revenue, 25.0)
            .with_budget_implication(BudgetImplication::Invest);
        let decisions =
            DecisionCalculator::compute(&intent, 620_000.0, 12, &CompanyBaseline::unloaded());

        let sales = decision(&decisions, Department::Sales);
        assert_eq!(sales.budget_impact, -120_000.0);
        assert!(sales.decision.ends_with("Accelerate new SDR hiring."));

        let hr = decision(&decisions, Department::Hr);
        assert_eq!(hr.trigger, "If voluntary attrition exceeds 12%, review freeze policy");
        assert_eq!(
            hr.decision,
            "Accelerate non-critical hiring. Implement performance-based variable compensation (+30%)."
        );
    }

    #[test]
    fn reallocating_mixes_budget_signs() {
        let decisions = DecisionCalculator::compute(
            &IntentRecord::default(),
            620_000.0,
            12,
            &CompanyBaseline::unloaded(),
        );
        assert_eq!(decision(&decisions, Department::Sales).budget_impact, 85_000.0);
        assert_eq!(decision(&decisions, Department::Operations).budget_impact, 220_000.0);
        assert_eq!(decision(&decisions, Department::Hr).budget_impact, 145_000.0);
        assert_eq!(decision(&decisions, Department::Marketing).budget_impact, 180_000.0);
        assert_eq!(decision(&decisions, Department::Finance).budget_impact, 80_000.0);
        assert_eq!(decision(&decisions, Department::Support).budget_impact, 60_000.0);
    }

    #[test]
    fn maintain_behaves_like_reallocate() {
        assert_eq!(
            PlanningMode::from_implication(BudgetImplication::Maintain),
            PlanningMode::Reallocating
        );
    }

    #[test]
    fn urgency_scales_budget() {
        let intent = cost_cut_intent().with_urgency(UrgencyLevel::High);
        let decisions =
            DecisionCalculator::compute(&intent, 620_000.0, 12, &CompanyBaseline::unloaded());
        assert_eq!(decision(&decisions, Department::Sales).budget_impact, 102_000.0);
    }

    #[test]
    fn short_timeline_dampens_headcount_and_confidence() {
        let decisions = DecisionCalculator::compute(
            &cost_cut_intent(),
            620_000.0,
            4,
            &CompanyBaseline::unloaded(),
        );
        let operations = decision(&decisions, Department::Operations);
        assert_eq!(operations.headcount_impact, -3);
        assert!(decisions.iter().all(|d| d.confidence >= 50));
    }

    #[test]
    fn loaded_baseline_scales_to_company_size() {
        let baseline = CompanyBaseline::from_metrics([
            (BaselineMetric::TotalRevenue, 20_000_000.0),
            (BaselineMetric::CurrentHeadcount, 1240.0),
        ]);
        let investment = 20_000_000.0 * 0.062;
        let decisions = DecisionCalculator::compute(&cost_cut_intent(), investment, 12, &baseline);

        let sales = decision(&decisions, Department::Sales);
        assert_eq!(sales.budget_impact, 170_000.0);
        assert_eq!(sales.headcount_impact, -6);
    }

    #[test]
    fn zero_revenue_upload_keeps_budgets_finite() {
        use crate::domain::baseline::{Cell, Table};

        let table = Table::from_rows(
            vec!["Quarter".to_string(), "Revenue".to_string()],
            vec![
                vec![Cell::Text("Q1".to_string()), Cell::Number(0.0)],
                vec![Cell::Text("Q2".to_string()), Cell::Number(0.0)],
            ],
        );
        let baseline = CompanyBaseline::from_table(&table).unwrap();
        let decisions = DecisionCalculator::compute(&cost_cut_intent(), 620_000.0, 12, &baseline);

        assert!(decisions.iter().all(|d| d.budget_impact.is_finite()));
        assert_eq!(decision(&decisions, Department::Sales).budget_impact, 85_000.0);
    }

    #[test]
    fn negative_revenue_keeps_budgets_finite() {
        let baseline = CompanyBaseline::from_metrics([(BaselineMetric::TotalRevenue, -500_000.0)]);
        let decisions = DecisionCalculator::compute(&cost_cut_intent(), 620_000.0, 12, &baseline);
        assert!(decisions.iter().all(|d| d.budget_impact.is_finite()));
    }

    #[test]
    fn timeline_factor_is_clamped() {
        assert_eq!(timeline_factor(0), 0.6);
        assert_eq!(timeline_factor(6), 0.6);
        assert_eq!(timeline_factor(9), 0.75);
        assert_eq!(timeline_factor(12), 1.0);
        assert_eq!(timeline_factor(52), 1.0);
    }

    #[test]
    fn investment_factor_is_one_at_base_investment() {
        let baseline = CompanyBaseline::unloaded();
        assert_eq!(investment_factor(620_000.0, &baseline), 1.0);
        assert_eq!(investment_factor(-5.0, &baseline), 0.0);
    }

    #[test]
    fn risk_tiers_follow_thresholds() {
        assert_eq!(RiskTier::from_confidence(99), RiskTier::Low);
        assert_eq!(RiskTier::from_confidence(85), RiskTier::Low);
        assert_eq!(RiskTier::from_confidence(84), RiskTier::Medium);
        assert_eq!(RiskTier::from_confidence(70), RiskTier::Medium);
        assert_eq!(RiskTier::from_confidence(69), RiskTier::High);
    }
}
