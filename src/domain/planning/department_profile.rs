//! Static per-department figures and recommendation templates.

use super::template::{Segment, Template, TemplateParam};
use crate::domain::intent::Department;

use Segment::{Literal, Param};
use TemplateParam::{Action, Margin, Number, Percentage, ReverseAction};

/// Fixed configuration for one department.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DepartmentProfile {
    pub department: Department,
    pub icon: &'static str,
    pub accent: &'static str,
    pub decision: Template,
    pub trigger: Template,
    /// Budget figure used when cutting costs.
    pub base_budget_positive: f64,
    /// Budget figure used when investing.
    pub base_budget_negative: f64,
    pub base_headcount: i64,
    pub base_confidence: u8,
    /// In `[0, 1]`.
    pub risk_factor: f64,
}

impl DepartmentProfile {
    /// Departments that generate savings under a balanced objective.
    pub fn saves_when_reallocating(&self) -> bool {
        matches!(
            self.department,
            Department::Sales | Department::Hr | Department::Operations
        )
    }
}

/// Profiles in output order.
pub const DEPARTMENT_PROFILES: [DepartmentProfile; 6] = [
    DepartmentProfile {
        department: Department::Sales,
        icon: "Briefcase",
        accent: "orange",
        decision: Template::new(&[
            Literal("Implement AI-powered lead scoring and automate outreach sequences. "),
            Param(Action),
            Literal(" new SDR hiring."),
        ]),
        trigger: Template::new(&[
            Literal("If Q2 pipeline drops below $2.5M, recommend "),
            Param(ReverseAction),
        ]),
        base_budget_positive: 85_000.0,
        base_budget_negative: -120_000.0,
        base_headcount: -3,
        base_confidence: 89,
        risk_factor: 0.2,
    },
    DepartmentProfile {
        department: Department::Marketing,
        icon: "Megaphone",
        accent: "red",
        decision: Template::new(&[
            Literal("Shift "),
            Param(Percentage),
            Literal("% budget to performance channels. Deploy AI content generation for 4x output."),
        ]),
        trigger: Template::new(&[Literal("If CAC exceeds $180, revert to brand awareness mix")]),
        base_budget_positive: -120_000.0,
        base_budget_negative: 180_000.0,
        base_headcount: 0,
        base_confidence: 82,
        risk_factor: 0.4,
    },
    DepartmentProfile {
        department: Department::Finance,
        icon: "Wallet",
        accent: "green",
        decision: Template::new(&[
            Literal("Consolidate "),
            Param(Number),
            Literal(" vendor contracts. Implement dynamic pricing with "),
            Param(Margin),
            Literal("% margin optimization."),
        ]),
        trigger: Template::new(&[Literal("If customer churn exceeds 8%, pause pricing changes")]),
        base_budget_positive: 195_000.0,
        base_budget_negative: 80_000.0,
        base_headcount: 0,
        base_confidence: 94,
        risk_factor: 0.1,
    },
    DepartmentProfile {
        department: Department::Operations,
        icon: "Settings2",
        accent: "blue",
        decision: Template::new(&[
            Literal("Automate "),
            Param(Percentage),
            Literal("% of manual workflows. Consolidate "),
            Param(Number),
            Literal(" regional offices into hybrid model."),
        ]),
        trigger: Template::new(&[Literal("If SLA breaches exceed 2%, restore on-site capacity")]),
        base_budget_positive: 220_000.0,
        base_budget_negative: 150_000.0,
        base_headcount: -5,
        base_confidence: 87,
        risk_factor: 0.35,
    },
    DepartmentProfile {
        department: Department::Support,
        icon: "Headphones",
        accent: "purple",
        decision: Template::new(&[
            Literal("Deploy AI chatbot for L1 queries ("),
            Param(Percentage),
            Literal("% deflection). Upskill team for complex cases."),
        ]),
        trigger: Template::new(&[Literal("If CSAT drops below 4.2, increase human agent ratio")]),
        base_budget_positive: 95_000.0,
        base_budget_negative: 60_000.0,
        base_headcount: -2,
        base_confidence: 91,
        risk_factor: 0.15,
    },
    DepartmentProfile {
        department: Department::Hr,
        icon: "Users",
        accent: "teal",
        decision: Template::new(&[
            Param(Action),
            Literal(" non-critical hiring. Implement performance-based variable compensation (+"),
            Param(Percentage),
            Literal("%)."),
        ]),
        trigger: Template::new(&[
            Literal("If voluntary attrition exceeds 12%, review "),
            Param(ReverseAction),
            Literal(" policy"),
        ]),
        base_budget_positive: 145_000.0,
        base_budget_negative: 50_000.0,
        base_headcount: -4,
        base_confidence: 85,
        risk_factor: 0.3,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profiles_follow_department_order() {
        let order: Vec<_> = DEPARTMENT_PROFILES.iter().map(|p| p.department).collect();
        assert_eq!(order, Department::ALL.to_vec());
    }

    #[test]
    fn risk_factors_are_fractions() {
        for profile in &DEPARTMENT_PROFILES {
            assert!((0.0..=1.0).contains(&profile.risk_factor));
            assert!(profile.base_confidence <= 100);
        }
    }

    #[test]
    fn reallocation_savers_are_sales_hr_operations() {
        let savers: Vec<_> = DEPARTMENT_PROFILES
            .iter()
            .filter(|p| p.saves_when_reallocating())
            .map(|p| p.department)
            .collect();
        assert_eq!(
            savers,
            vec![Department::Sales, Department::Operations, Department::Hr]
        );
    }
}
