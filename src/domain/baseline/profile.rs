//! The company baseline every calculation is scaled against.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeMap;
use thiserror::Error;

use super::columns::StandardizedColumns;
use super::metrics::{derive_metrics, BaselineMetric, MetricValue};
use super::table::Table;
use crate::domain::intent::Department;

/// Revenue of the reference company the department figures are calibrated for.
pub const REFERENCE_REVENUE: f64 = 10_000_000.0;

/// Headcount of the reference company.
pub const REFERENCE_HEADCOUNT: f64 = 620.0;

/// Optimisation budget assumed when no revenue is known.
pub const DEFAULT_BASE_INVESTMENT: f64 = 620_000.0;

/// Share of annual revenue treated as a typical optimisation budget.
pub const INVESTMENT_SHARE_OF_REVENUE: f64 = 0.062;

/// Errors building a baseline from uploaded data.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BaselineError {
    #[error("No columns to parse from file")]
    NoColumns,
}

/// Company-specific baseline built from uploaded historical data.
///
/// Either fully loaded or fully absent: instances are built whole and
/// replaced whole, never edited in place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompanyBaseline {
    metrics: BTreeMap<String, MetricValue>,
    detected_columns: Vec<String>,
    record_count: usize,
    loaded_at: Option<DateTime<Utc>>,
}

impl CompanyBaseline {
    /// A baseline with nothing loaded; every lookup returns its default.
    pub fn unloaded() -> Self {
        Self::default()
    }

    /// Builds a loaded baseline from parsed tabular data.
    pub fn from_table(table: &Table) -> Result<Self, BaselineError> {
        if table.is_empty() {
            return Err(BaselineError::NoColumns);
        }
        let columns = StandardizedColumns::from_table(table);
        Ok(Self {
            metrics: derive_metrics(&columns),
            detected_columns: columns.names(),
            record_count: table.row_count(),
            loaded_at: Some(Utc::now()),
        })
    }

    /// Builds a loaded baseline directly from metric figures.
    pub fn from_metrics(metrics: impl IntoIterator<Item = (BaselineMetric, f64)>) -> Self {
        let metrics = metrics
            .into_iter()
            .map(|(metric, value)| (metric.key().to_string(), MetricValue::Number(value)))
            .collect();
        Self {
            metrics,
            detected_columns: Vec::new(),
            record_count: 0,
            loaded_at: Some(Utc::now()),
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded_at.is_some()
    }

    pub fn metrics(&self) -> &BTreeMap<String, MetricValue> {
        &self.metrics
    }

    pub fn detected_columns(&self) -> &[String] {
        &self.detected_columns
    }

    pub fn record_count(&self) -> usize {
        self.record_count
    }

    pub fn loaded_at(&self) -> Option<DateTime<Utc>> {
        self.loaded_at
    }

    /// Loaded figure for the metric, or its documented default.
    pub fn lookup(&self, metric: BaselineMetric) -> f64 {
        self.loaded_number(metric)
            .unwrap_or_else(|| metric.default_value())
    }

    /// Optimisation budget the investment ceiling is compared against.
    ///
    /// Zero or negative revenue totals fall back to the default.
    pub fn base_investment(&self) -> f64 {
        match self.scaling_number(BaselineMetric::TotalRevenue) {
            Some(revenue) => revenue * INVESTMENT_SHARE_OF_REVENUE,
            None => DEFAULT_BASE_INVESTMENT,
        }
    }

    /// Scales a dollar figure to this company's revenue.
    pub fn scale_budget(&self, base: f64) -> f64 {
        self.scale_budget_with(base, BaselineMetric::TotalRevenue, REFERENCE_REVENUE)
    }

    /// Scales `base` by `metric / reference`, using the metric's default
    /// when the loaded figure is not positive.
    pub fn scale_budget_with(&self, base: f64, metric: BaselineMetric, reference: f64) -> f64 {
        base * self.scaling_factor(metric) / reference
    }

    /// Scales a headcount figure to this company's workforce.
    pub fn scale_headcount(&self, base: f64) -> f64 {
        self.scale_headcount_with(base, REFERENCE_HEADCOUNT)
    }

    pub fn scale_headcount_with(&self, base: f64, reference: f64) -> f64 {
        base * self.scaling_factor(BaselineMetric::CurrentHeadcount) / reference
    }

    /// Figures a department's recommendation is framed against.
    pub fn department_baseline(&self, department: Department) -> DepartmentBaseline {
        let headcount = self.lookup(BaselineMetric::CurrentHeadcount);
        let revenue = self.lookup(BaselineMetric::TotalRevenue);
        let csat = self.lookup(BaselineMetric::CurrentCsat);

        let figures: Vec<(&'static str, f64)> = match department {
            Department::Sales => vec![
                ("current_pipeline", self.lookup(BaselineMetric::CurrentPipeline)),
                ("quarterly_deals", self.lookup(BaselineMetric::QuarterlyDeals)),
                ("avg_deal_size", self.lookup(BaselineMetric::AvgDealSize)),
                ("headcount", (headcount * 0.16).trunc()),
            ],
            Department::Marketing => vec![
                ("current_cac", self.lookup(BaselineMetric::AvgCac)),
                ("marketing_spend", revenue * 0.12),
                ("lead_volume", self.lookup(BaselineMetric::QuarterlyDeals) * 5.0),
            ],
            Department::Finance => vec![
                ("profit_margin", self.lookup(BaselineMetric::ProfitMargin)),
                ("total_revenue", revenue),
                (
                    "operating_costs",
                    revenue - self.lookup(BaselineMetric::TotalProfit),
                ),
            ],
            Department::Operations => vec![
                ("headcount", (headcount * 0.25).trunc()),
                ("csat", csat),
            ],
            Department::Support => vec![
                ("headcount", (headcount * 0.20).trunc()),
                ("csat", csat),
                ("nps", self.lookup(BaselineMetric::CurrentNps)),
            ],
            Department::Hr => vec![
                ("total_headcount", headcount),
                ("churn_rate", self.lookup(BaselineMetric::CurrentChurn)),
                (
                    "revenue_per_employee",
                    self.lookup(BaselineMetric::RevenuePerEmployee),
                ),
            ],
        };

        DepartmentBaseline {
            department,
            figures: figures.into_iter().collect(),
        }
    }

    fn scaling_factor(&self, metric: BaselineMetric) -> f64 {
        self.scaling_number(metric)
            .unwrap_or_else(|| metric.default_value())
    }

    /// Loaded figure usable as a divisor or multiplier: finite and positive.
    fn scaling_number(&self, metric: BaselineMetric) -> Option<f64> {
        self.loaded_number(metric).filter(|value| *value > 0.0)
    }

    fn loaded_number(&self, metric: BaselineMetric) -> Option<f64> {
        if !self.is_loaded() {
            return None;
        }
        self.metrics
            .get(metric.key())
            .and_then(MetricValue::as_number)
            .filter(|value| value.is_finite())
    }
}

/// Baseline figures relevant to a single department.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DepartmentBaseline {
    pub department: Department,
    pub figures: BTreeMap<&'static str, f64>,
}

impl DepartmentBaseline {
    pub fn get(&self, name: &str) -> Option<f64> {
        self.figures.get(name).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::baseline::table::Cell;

    #[test]
    fn unloaded_lookups_return_defaults() {
        let baseline = CompanyBaseline::unloaded();
        assert!(!baseline.is_loaded());
        assert_eq!(baseline.lookup(BaselineMetric::AvgCac), 385.0);
        assert_eq!(baseline.lookup(BaselineMetric::CurrentHeadcount), 620.0);
        assert_eq!(baseline.lookup(BaselineMetric::CurrentChurn), 0.08);
        assert_eq!(baseline.lookup(BaselineMetric::CurrentPipeline), 2_500_000.0);
        assert_eq!(baseline.lookup(BaselineMetric::QuarterlyDeals), 45.0);
        assert_eq!(baseline.lookup(BaselineMetric::AvgDealSize), 85_000.0);
        assert_eq!(baseline.lookup(BaselineMetric::CurrentNps), 42.0);
        assert_eq!(baseline.lookup(BaselineMetric::CurrentCsat), 4.2);
        assert_eq!(baseline.lookup(BaselineMetric::TotalRevenue), 10_000_000.0);
        assert_eq!(baseline.base_investment(), 620_000.0);
    }

    #[test]
    fn unloaded_scaling_is_identity() {
        let baseline = CompanyBaseline::unloaded();
        assert_eq!(baseline.scale_budget(85_000.0), 85_000.0);
        assert_eq!(baseline.scale_headcount(-3.0), -3.0);
    }

    #[test]
    fn loaded_scaling_uses_revenue_and_headcount() {
        let baseline = CompanyBaseline::from_metrics([
            (BaselineMetric::TotalRevenue, 20_000_000.0),
            (BaselineMetric::CurrentHeadcount, 1240.0),
        ]);
        assert!(baseline.is_loaded());
        assert_eq!(baseline.scale_budget(85_000.0), 170_000.0);
        assert_eq!(baseline.scale_headcount(-3.0), -6.0);
        assert_eq!(baseline.base_investment(), 20_000_000.0 * 0.062);
    }

    #[test]
    fn scale_budget_with_custom_reference() {
        let baseline =
            CompanyBaseline::from_metrics([(BaselineMetric::CurrentPipeline, 5_000_000.0)]);
        let scaled =
            baseline.scale_budget_with(100.0, BaselineMetric::CurrentPipeline, 2_500_000.0);
        assert_eq!(scaled, 200.0);
    }

    #[test]
    fn loaded_without_revenue_falls_back_per_metric() {
        let baseline = CompanyBaseline::from_metrics([(BaselineMetric::CurrentHeadcount, 310.0)]);
        assert_eq!(baseline.base_investment(), DEFAULT_BASE_INVESTMENT);
        assert_eq!(baseline.scale_budget(1_000.0), 1_000.0);
        assert_eq!(baseline.scale_headcount(-4.0), -2.0);
    }

    #[test]
    fn non_positive_revenue_scales_like_the_reference_company() {
        for revenue in [0.0, -500_000.0] {
            let baseline = CompanyBaseline::from_metrics([
                (BaselineMetric::TotalRevenue, revenue),
                (BaselineMetric::CurrentHeadcount, 0.0),
            ]);
            assert_eq!(baseline.base_investment(), DEFAULT_BASE_INVESTMENT);
            assert_eq!(baseline.scale_budget(85_000.0), 85_000.0);
            assert_eq!(baseline.scale_headcount(-3.0), -3.0);
            assert_eq!(baseline.lookup(BaselineMetric::TotalRevenue), revenue);
        }
    }

    #[test]
    fn from_table_rejects_empty_table() {
        let table = Table::from_rows(vec![], vec![]);
        assert_eq!(CompanyBaseline::from_table(&table), Err(BaselineError::NoColumns));
    }

    #[test]
    fn from_table_records_columns_and_count() {
        let table = Table::from_rows(
            vec!["Quarter".to_string(), "Revenue".to_string()],
            vec![
                vec![Cell::Text("Q1".to_string()), Cell::Number(4_000_000.0)],
                vec![Cell::Text("Q2".to_string()), Cell::Number(6_000_000.0)],
            ],
        );
        let baseline = CompanyBaseline::from_table(&table).unwrap();
        assert!(baseline.is_loaded());
        assert_eq!(baseline.record_count(), 2);
        assert_eq!(baseline.detected_columns(), &["revenue", "quarter"]);
        assert_eq!(baseline.lookup(BaselineMetric::TotalRevenue), 10_000_000.0);
        assert!(baseline.metrics().contains_key("total_revenue"));
        assert!(!baseline.metrics().contains_key("avg_cac"));
    }

    #[test]
    fn department_baselines_use_workforce_shares() {
        let baseline = CompanyBaseline::unloaded();
        let sales = baseline.department_baseline(Department::Sales);
        assert_eq!(sales.get("headcount"), Some(99.0));
        assert_eq!(sales.get("current_pipeline"), Some(2_500_000.0));

        let finance = baseline.department_baseline(Department::Finance);
        assert_eq!(finance.get("operating_costs"), Some(8_500_000.0));
        assert_eq!(finance.get("profit_margin"), Some(15.0));

        let hr = baseline.department_baseline(Department::Hr);
        assert_eq!(hr.get("revenue_per_employee"), Some(16_000.0));

        let marketing = baseline.department_baseline(Department::Marketing);
        assert_eq!(marketing.get("lead_volume"), Some(225.0));
    }
}
