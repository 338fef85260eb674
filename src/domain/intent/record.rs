//! Structured intent extracted from an executive directive.

use serde::{Deserialize, Serialize};

use super::Department;
use crate::domain::foundation::ValidationError;

/// Target percentage used when a directive names no figure.
pub const DEFAULT_TARGET_PERCENTAGE: f64 = 15.0;

/// The kind of business outcome a directive asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ObjectiveType {
    Profit,
    CostReduction,
    Growth,
    #[default]
    Efficiency,
    Revenue,
}

impl ObjectiveType {
    /// Parses a wire label such as `"cost_reduction"`.
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_ascii_lowercase().as_str() {
            "profit" => Some(Self::Profit),
            "cost_reduction" => Some(Self::CostReduction),
            "growth" => Some(Self::Growth),
            "efficiency" => Some(Self::Efficiency),
            "revenue" => Some(Self::Revenue),
            _ => None,
        }
    }
}

/// How far out the directive is looking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TimeHorizon {
    Short,
    #[default]
    Medium,
    Long,
}

impl TimeHorizon {
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_ascii_lowercase().as_str() {
            "short" => Some(Self::Short),
            "medium" => Some(Self::Medium),
            "long" => Some(Self::Long),
            _ => None,
        }
    }
}

/// How urgently the directive should be executed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum UrgencyLevel {
    Low,
    #[default]
    Medium,
    High,
}

impl UrgencyLevel {
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_ascii_lowercase().as_str() {
            "low" => Some(Self::Low),
            "medium" => Some(Self::Medium),
            "high" => Some(Self::High),
            _ => None,
        }
    }

    /// Multiplier applied to every budget impact.
    pub fn multiplier(&self) -> f64 {
        match self {
            UrgencyLevel::High => 1.2,
            UrgencyLevel::Medium => 1.0,
            UrgencyLevel::Low => 0.9,
        }
    }
}

/// What the directive implies for spending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum BudgetImplication {
    CutCosts,
    Invest,
    #[default]
    Reallocate,
    Maintain,
}

impl BudgetImplication {
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_ascii_lowercase().as_str() {
            "cut_costs" => Some(Self::CutCosts),
            "invest" => Some(Self::Invest),
            "reallocate" => Some(Self::Reallocate),
            "maintain" => Some(Self::Maintain),
            _ => None,
        }
    }
}

/// Structured intent record, immutable for the lifetime of one request.
///
/// Produced either by a remote text-understanding service or by
/// [`KeywordIntentParser`](super::KeywordIntentParser); the planning engine
/// only ever sees this shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntentRecord {
    pub objective_type: ObjectiveType,
    pub primary_objective: String,
    pub secondary_objective: Option<String>,
    pub target_percentage: f64,
    pub secondary_percentage: Option<f64>,
    pub time_horizon: TimeHorizon,
    pub urgency_level: UrgencyLevel,
    pub budget_implication: BudgetImplication,
    pub inherent_tension: Option<String>,
    pub affected_departments: Vec<Department>,
}

impl IntentRecord {
    /// Creates a record for the given objective with every other field at its default.
    pub fn new(objective_type: ObjectiveType, target_percentage: f64) -> Self {
        Self {
            objective_type,
            target_percentage,
            ..Self::default()
        }
    }

    pub fn with_secondary(mut self, objective: impl Into<String>, percentage: Option<f64>) -> Self {
        self.secondary_objective = Some(objective.into());
        self.secondary_percentage = percentage;
        self
    }

    pub fn with_urgency(mut self, urgency: UrgencyLevel) -> Self {
        self.urgency_level = urgency;
        self
    }

    pub fn with_budget_implication(mut self, implication: BudgetImplication) -> Self {
        self.budget_implication = implication;
        self
    }

    /// True when a secondary objective accompanies the primary one.
    pub fn has_secondary_objective(&self) -> bool {
        self.secondary_objective
            .as_deref()
            .is_some_and(|s| !s.trim().is_empty())
    }

    /// Checks the record invariants: percentages are finite and non-negative.
    pub fn validate(&self) -> Result<(), ValidationError> {
        check_percentage("target_percentage", self.target_percentage)?;
        if let Some(secondary) = self.secondary_percentage {
            check_percentage("secondary_percentage", secondary)?;
        }
        Ok(())
    }
}

impl Default for IntentRecord {
    fn default() -> Self {
        Self {
            objective_type: ObjectiveType::default(),
            primary_objective: "Improve business performance".to_string(),
            secondary_objective: None,
            target_percentage: DEFAULT_TARGET_PERCENTAGE,
            secondary_percentage: None,
            time_horizon: TimeHorizon::default(),
            urgency_level: UrgencyLevel::default(),
            budget_implication: BudgetImplication::default(),
            inherent_tension: None,
            affected_departments: Department::ALL.to_vec(),
        }
    }
}

fn check_percentage(field: &str, value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::not_finite(field));
    }
    if value < 0.0 {
        return Err(ValidationError::below_minimum(field, 0.0, value));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_record_matches_documented_defaults() {
        let record = IntentRecord::default();
        assert_eq!(record.objective_type, ObjectiveType::Efficiency);
        assert_eq!(record.target_percentage, 15.0);
        assert_eq!(record.time_horizon, TimeHorizon::Medium);
        assert_eq!(record.urgency_level, UrgencyLevel::Medium);
        assert_eq!(record.budget_implication, BudgetImplication::Reallocate);
        assert_eq!(record.affected_departments.len(), 6);
        assert!(!record.has_secondary_objective());
    }

    #[test]
    fn validate_rejects_negative_target() {
        let record = IntentRecord::new(ObjectiveType::Profit, -1.0);
        assert!(matches!(
            record.validate(),
            Err(ValidationError::BelowMinimum { .. })
        ));
    }

    #[test]
    fn validate_rejects_negative_secondary() {
        let record = IntentRecord::new(ObjectiveType::Profit, 10.0)
            .with_secondary("Reduce costs", Some(-2.0));
        assert!(record.validate().is_err());
    }

    #[test]
    fn validate_rejects_nan_target() {
        let record = IntentRecord::new(ObjectiveType::Growth, f64::NAN);
        assert!(matches!(record.validate(), Err(ValidationError::NotFinite { .. })));
    }

    #[test]
    fn validate_accepts_zero_target() {
        assert!(IntentRecord::new(ObjectiveType::Revenue, 0.0).validate().is_ok());
    }

    #[test]
    fn urgency_multipliers() {
        assert_eq!(UrgencyLevel::High.multiplier(), 1.2);
        assert_eq!(UrgencyLevel::Medium.multiplier(), 1.0);
        assert_eq!(UrgencyLevel::Low.multiplier(), 0.9);
    }

    #[test]
    fn labels_parse_leniently() {
        assert_eq!(ObjectiveType::from_label(" Cost_Reduction "), Some(ObjectiveType::CostReduction));
        assert_eq!(BudgetImplication::from_label("invest"), Some(BudgetImplication::Invest));
        assert_eq!(UrgencyLevel::from_label("HIGH"), Some(UrgencyLevel::High));
        assert_eq!(TimeHorizon::from_label("eventually"), None);
    }

    #[test]
    fn enums_serialize_as_snake_case() {
        assert_eq!(
            serde_json::to_string(&ObjectiveType::CostReduction).unwrap(),
            "\"cost_reduction\""
        );
        assert_eq!(
            serde_json::to_string(&BudgetImplication::CutCosts).unwrap(),
            "\"cut_costs\""
        );
    }
}
