//! Deterministic rule-based intent extraction.
//!
//! Always produces a record, whatever the input. Used on its own when no
//! remote intent service is configured and as the fallback whenever the
//! remote service fails.

use once_cell::sync::Lazy;
use regex::Regex;

use super::{BudgetImplication, IntentRecord, ObjectiveType, TimeHorizon, UrgencyLevel};
use crate::domain::foundation::format_percent;

static PERCENTAGE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\d+(?:\.\d+)?)%").expect("percentage pattern is valid")
});

const PROFIT_KEYWORDS: &[&str] = &["profit", "margin"];
const COST_KEYWORDS: &[&str] = &["cost", "ctc", "expense"];
const REVENUE_KEYWORDS: &[&str] = &["revenue", "sales"];
const EFFICIENCY_KEYWORDS: &[&str] = &["efficiency", "productivity"];
const URGENT_KEYWORDS: &[&str] = &["urgent", "immediately", "asap"];
const GRADUAL_KEYWORDS: &[&str] = &["gradual", "over time"];

/// Keyword and percentage based intent parser.
pub struct KeywordIntentParser;

impl KeywordIntentParser {
    /// Parses a directive into an intent record.
    ///
    /// Later keyword groups override earlier ones: a directive mentioning both
    /// profit and revenue is treated as a revenue objective.
    pub fn parse(directive: &str) -> IntentRecord {
        let lower = directive.to_lowercase();
        let mut record = IntentRecord::default();

        let percentages = Self::extract_percentages(directive);
        if let Some(first) = percentages.first() {
            record.target_percentage = *first;
        }
        if let Some(second) = percentages.get(1) {
            record.secondary_percentage = Some(*second);
        }
        let target = format_percent(record.target_percentage);

        if contains_any(&lower, PROFIT_KEYWORDS) {
            record.objective_type = ObjectiveType::Profit;
            record.primary_objective = format!("Increase profit by {}%", target);
        }

        if contains_any(&lower, COST_KEYWORDS) {
            if record.objective_type == ObjectiveType::Profit {
                let secondary = record
                    .secondary_percentage
                    .unwrap_or(record.target_percentage * 0.15);
                record.secondary_objective =
                    Some(format!("Reduce costs by {}%", format_percent(secondary)));
                record.inherent_tension =
                    Some("Growth requires investment but costs must decrease".to_string());
            } else {
                record.objective_type = ObjectiveType::CostReduction;
                record.primary_objective = format!("Reduce costs by {}%", target);
            }
            record.budget_implication = BudgetImplication::CutCosts;
        }

        if contains_any(&lower, REVENUE_KEYWORDS) {
            record.objective_type = ObjectiveType::Revenue;
            record.primary_objective = format!("Increase revenue by {}%", target);
            record.budget_implication = BudgetImplication::Invest;
        }

        if contains_any(&lower, EFFICIENCY_KEYWORDS) {
            record.objective_type = ObjectiveType::Efficiency;
            record.primary_objective = format!("Improve efficiency by {}%", target);
        }

        if contains_any(&lower, URGENT_KEYWORDS) {
            record.urgency_level = UrgencyLevel::High;
            record.time_horizon = TimeHorizon::Short;
        } else if contains_any(&lower, GRADUAL_KEYWORDS) {
            record.urgency_level = UrgencyLevel::Low;
            record.time_horizon = TimeHorizon::Long;
        }

        record
    }

    /// Returns every `N%` figure in the text, in order of appearance.
    ///
    /// Figures too large to represent are skipped.
    pub fn extract_percentages(text: &str) -> Vec<f64> {
        PERCENTAGE
            .captures_iter(text)
            .filter_map(|caps| caps.get(1))
            .filter_map(|m| m.as_str().parse::<f64>().ok())
            .filter(|value| value.is_finite())
            .collect()
    }
}

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| haystack.contains(needle))
}
