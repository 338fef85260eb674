//! Result Aggregator - headline figures for a set of department decisions.

use serde::Serialize;

use super::decision_calculator::AgentDecision;
use crate::domain::foundation::round_to_tenth;
use crate::domain::intent::{IntentRecord, ObjectiveType};

/// Headline totals of a plan.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanSummary {
    /// Percent, one decimal.
    pub profit_growth: f64,
    /// Percent, one decimal.
    pub ctc_reduction: f64,
    pub overall_confidence: u8,
    pub total_savings: f64,
    pub total_headcount_change: i64,
}

pub struct ResultAggregator;

impl ResultAggregator {
    pub fn summarize(intent: &IntentRecord, decisions: &[AgentDecision]) -> PlanSummary {
        let (profit_growth, ctc_reduction) = headline_percentages(intent);

        PlanSummary {
            profit_growth: round_to_tenth(profit_growth),
            ctc_reduction: round_to_tenth(ctc_reduction),
            overall_confidence: overall_confidence(decisions),
            total_savings: decisions.iter().map(|d| d.budget_impact).sum(),
            total_headcount_change: decisions.iter().map(|d| d.headcount_impact).sum(),
        }
    }
}

/// Profit growth and cost-to-company reduction implied by the objective.
pub fn headline_percentages(intent: &IntentRecord) -> (f64, f64) {
    let target = intent.target_percentage;
    match intent.objective_type {
        ObjectiveType::Profit => {
            let secondary = intent
                .secondary_percentage
                .filter(|pct| *pct != 0.0)
                .unwrap_or(target * 0.15);
            (target, secondary)
        }
        ObjectiveType::CostReduction => (target * 0.3, target),
        ObjectiveType::Revenue => (target * 0.6, 0.0),
        ObjectiveType::Growth | ObjectiveType::Efficiency => (target * 0.8, target * 0.1),
    }
}

/// Floor of the mean confidence; zero without decisions.
fn overall_confidence(decisions: &[AgentDecision]) -> u8 {
    if decisions.is_empty() {
        return 0;
    }
    let total: u32 = decisions.iter().map(|d| d.confidence as u32).sum();
    (total / decisions.len() as u32) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::baseline::CompanyBaseline;
    use crate::domain::intent::BudgetImplication;
    use crate::domain::planning::DecisionCalculator;

    fn decisions_for(intent: &IntentRecord) -> Vec<AgentDecision> {
        DecisionCalculator::compute(intent, 620_000.0, 12, &CompanyBaseline::unloaded())
    }

    #[test]
    fn totals_sum_department_figures() {
        let intent = IntentRecord::new(ObjectiveType::CostReduction, 20.0)
            .with_budget_implication(BudgetImplication::CutCosts);
        let decisions = decisions_for(&intent);
        let summary = ResultAggregator::summarize(&intent, &decisions);

        assert_eq!(summary.total_savings, 620_000.0);
        assert_eq!(summary.total_headcount_change, -14);
        assert_eq!(summary.profit_growth, 6.0);
        assert_eq!(summary.ctc_reduction, 20.0);
    }

    #[test]
    fn overall_confidence_is_floored_mean() {
        let intent = IntentRecord::default();
        let decisions = decisions_for(&intent);
        // 84 + 72 + 91 + 78 + 87 + 77 = 489
        assert_eq!(ResultAggregator::summarize(&intent, &decisions).overall_confidence, 81);
    }

    #[test]
    fn empty_decisions_have_zero_confidence() {
        let summary = ResultAggregator::summarize(&IntentRecord::default(), &[]);
        assert_eq!(summary.overall_confidence, 0);
        assert_eq!(summary.total_savings, 0.0);
    }

    #[test]
    fn headline_percentages_by_objective() {
        let profit = IntentRecord::new(ObjectiveType::Profit, 20.0);
        assert_eq!(headline_percentages(&profit), (20.0, 20.0 * 0.15));

        let profit_with_secondary =
            IntentRecord::new(ObjectiveType::Profit, 20.0).with_secondary("Reduce costs", Some(5.0));
        assert_eq!(headline_percentages(&profit_with_secondary), (20.0, 5.0));

        let revenue = IntentRecord::new(ObjectiveType::Revenue, 25.0);
        assert_eq!(headline_percentages(&revenue), (15.0, 0.0));

        let growth = IntentRecord::new(ObjectiveType::Growth, 10.0);
        assert_eq!(headline_percentages(&growth), (8.0, 1.0));
    }
}
