//! Business metrics derived from uploaded company data.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::columns::StandardizedColumns;

/// Percentage change between halves above which a series is trending.
const TREND_THRESHOLD_PCT: f64 = 5.0;

/// Metrics the planning engine reads, each with its documented default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BaselineMetric {
    TotalRevenue,
    CurrentHeadcount,
    AvgCac,
    CurrentChurn,
    CurrentPipeline,
    QuarterlyDeals,
    AvgDealSize,
    CurrentNps,
    CurrentCsat,
    ProfitMargin,
    TotalProfit,
    RevenuePerEmployee,
}

impl BaselineMetric {
    /// Key under which the metric is stored.
    pub fn key(&self) -> &'static str {
        match self {
            BaselineMetric::TotalRevenue => "total_revenue",
            BaselineMetric::CurrentHeadcount => "current_headcount",
            BaselineMetric::AvgCac => "avg_cac",
            BaselineMetric::CurrentChurn => "current_churn",
            BaselineMetric::CurrentPipeline => "current_pipeline",
            BaselineMetric::QuarterlyDeals => "quarterly_deals",
            BaselineMetric::AvgDealSize => "avg_deal_size",
            BaselineMetric::CurrentNps => "current_nps",
            BaselineMetric::CurrentCsat => "current_csat",
            BaselineMetric::ProfitMargin => "profit_margin",
            BaselineMetric::TotalProfit => "total_profit",
            BaselineMetric::RevenuePerEmployee => "revenue_per_employee",
        }
    }

    /// Value used whenever the metric is not loaded.
    pub fn default_value(&self) -> f64 {
        match self {
            BaselineMetric::TotalRevenue => 10_000_000.0,
            BaselineMetric::CurrentHeadcount => 620.0,
            BaselineMetric::AvgCac => 385.0,
            BaselineMetric::CurrentChurn => 0.08,
            BaselineMetric::CurrentPipeline => 2_500_000.0,
            BaselineMetric::QuarterlyDeals => 45.0,
            BaselineMetric::AvgDealSize => 85_000.0,
            BaselineMetric::CurrentNps => 42.0,
            BaselineMetric::CurrentCsat => 4.2,
            BaselineMetric::ProfitMargin => 15.0,
            BaselineMetric::TotalProfit => 1_500_000.0,
            BaselineMetric::RevenuePerEmployee => 16_000.0,
        }
    }
}

/// Direction of a series, comparing its first half to its second half.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Increasing,
    Decreasing,
    Stable,
}

impl Trend {
    /// Classifies a series; fewer than two points is stable.
    pub fn of(values: &[f64]) -> Self {
        if values.len() < 2 {
            return Trend::Stable;
        }
        let (first, second) = values.split_at(values.len() / 2);
        let first_mean = mean(first).unwrap_or(0.0);
        let second_mean = mean(second).unwrap_or(0.0);

        let change_pct = if first_mean != 0.0 {
            (second_mean - first_mean) / first_mean * 100.0
        } else {
            0.0
        };

        if change_pct > TREND_THRESHOLD_PCT {
            Trend::Increasing
        } else if change_pct < -TREND_THRESHOLD_PCT {
            Trend::Decreasing
        } else {
            Trend::Stable
        }
    }
}

/// A stored metric: a figure or a trend label.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetricValue {
    Number(f64),
    Trend(Trend),
}

impl MetricValue {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            MetricValue::Number(value) => Some(*value),
            MetricValue::Trend(_) => None,
        }
    }
}

/// Derives the metric map from standardized columns.
///
/// Every figure the engine reads has a numeric fallback, so partial or messy
/// data still yields a complete set of the always-present metrics
/// (`current_headcount`, `current_churn`).
pub fn derive_metrics(columns: &StandardizedColumns) -> BTreeMap<String, MetricValue> {
    let mut metrics = MetricMap::default();

    if let Some(revenues) = columns.numbers("revenue") {
        let total: f64 = revenues.iter().sum();
        metrics.number("total_revenue", total);
        metrics.number("avg_quarterly_revenue", mean(&revenues).unwrap_or(0.0));
        metrics.trend("revenue_trend", &revenues);
    }

    if let Some(profits) = columns.numbers("profit") {
        let total: f64 = profits.iter().sum();
        metrics.number("total_profit", total);
        let margin = match metrics.get_number("total_revenue") {
            Some(revenue) if revenue != 0.0 => total / revenue * 100.0,
            _ => 0.0,
        };
        metrics.number("profit_margin", margin);
        metrics.trend("profit_trend", &profits);
    }

    let default_cac = BaselineMetric::AvgCac.default_value();
    if let Some(cacs) = columns.numbers("cac") {
        metrics.number("avg_cac", mean(&cacs).unwrap_or(default_cac));
        metrics.trend("cac_trend", &cacs);
    } else if let (Some(spend), Some(customers)) = (
        columns.numbers("marketing_spend"),
        columns.numbers("new_customers"),
    ) {
        let spend: f64 = spend.iter().sum();
        let customers: f64 = customers.iter().sum();
        let cac = if customers > 0.0 { spend / customers } else { default_cac };
        metrics.number("avg_cac", cac);
    }

    let default_headcount = BaselineMetric::CurrentHeadcount.default_value();
    match columns.numbers("headcount") {
        Some(counts) => {
            let counts: Vec<f64> = counts.into_iter().map(f64::trunc).collect();
            metrics.number(
                "current_headcount",
                counts.last().copied().unwrap_or(default_headcount),
            );
            let change = match (counts.first(), counts.last()) {
                (Some(first), Some(last)) if counts.len() > 1 => last - first,
                _ => 0.0,
            };
            metrics.number("headcount_change", change);
        }
        None => metrics.number("current_headcount", default_headcount),
    }

    let default_churn = BaselineMetric::CurrentChurn.default_value();
    if let Some(churns) = columns.numbers("churn_rate") {
        metrics.number("current_churn", churns.last().copied().unwrap_or(default_churn));
        metrics.number("avg_churn", mean(&churns).unwrap_or(default_churn));
    } else if let Some(retentions) = columns.numbers("retention_rate") {
        let churn = retentions
            .last()
            .map(|retention| 1.0 - retention / 100.0)
            .unwrap_or(default_churn);
        metrics.number("current_churn", churn);
    } else {
        metrics.number("current_churn", default_churn);
    }

    if let Some(pipelines) = columns.numbers("pipeline") {
        metrics.last_or_default(BaselineMetric::CurrentPipeline, &pipelines);
    }

    if let Some(deals) = columns.numbers("deals_closed") {
        let deals: Vec<f64> = deals.into_iter().map(f64::trunc).collect();
        metrics.last_or_default(BaselineMetric::QuarterlyDeals, &deals);
    }

    if let Some(sizes) = columns.numbers("avg_deal_size") {
        let size = mean(&sizes).unwrap_or(BaselineMetric::AvgDealSize.default_value());
        metrics.number(BaselineMetric::AvgDealSize.key(), size);
    }

    if let Some(scores) = columns.numbers("nps") {
        metrics.last_or_default(BaselineMetric::CurrentNps, &scores);
    }

    if let Some(scores) = columns.numbers("csat") {
        metrics.last_or_default(BaselineMetric::CurrentCsat, &scores);
    }

    if let (Some(revenue), Some(headcount)) = (
        metrics.get_number("total_revenue"),
        metrics.get_number("current_headcount"),
    ) {
        if headcount != 0.0 {
            metrics.number("revenue_per_employee", revenue / headcount);
        }
    }

    metrics.0
}

fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        None
    } else {
        Some(values.iter().sum::<f64>() / values.len() as f64)
    }
}

#[derive(Default)]
struct MetricMap(BTreeMap<String, MetricValue>);

impl MetricMap {
    fn number(&mut self, key: &str, value: f64) {
        self.0.insert(key.to_string(), MetricValue::Number(value));
    }

    fn trend(&mut self, key: &str, values: &[f64]) {
        self.0.insert(key.to_string(), MetricValue::Trend(Trend::of(values)));
    }

    fn last_or_default(&mut self, metric: BaselineMetric, values: &[f64]) {
        let value = values.last().copied().unwrap_or(metric.default_value());
        self.number(metric.key(), value);
    }

    fn get_number(&self, key: &str) -> Option<f64> {
        self.0.get(key).and_then(MetricValue::as_number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::baseline::table::{Cell, Table};

    fn standardized(headers: &[&str], rows: &[&[f64]]) -> StandardizedColumns {
        let table = Table::from_rows(
            headers.iter().map(|h| h.to_string()).collect(),
            rows.iter()
                .map(|row| row.iter().map(|v| Cell::Number(*v)).collect())
                .collect(),
        );
        StandardizedColumns::from_table(&table)
    }

    fn number(metrics: &BTreeMap<String, MetricValue>, key: &str) -> f64 {
        metrics[key].as_number().unwrap()
    }

    #[test]
    fn trend_classification() {
        assert_eq!(Trend::of(&[100.0]), Trend::Stable);
        assert_eq!(Trend::of(&[100.0, 110.0]), Trend::Increasing);
        assert_eq!(Trend::of(&[100.0, 90.0]), Trend::Decreasing);
        assert_eq!(Trend::of(&[100.0, 104.0]), Trend::Stable);
        assert_eq!(Trend::of(&[0.0, 50.0]), Trend::Stable);
        // Odd length: first half is the shorter one.
        assert_eq!(Trend::of(&[100.0, 100.0, 200.0]), Trend::Increasing);
    }

    #[test]
    fn revenue_and_profit_metrics() {
        let columns = standardized(
            &["Revenue", "Profit"],
            &[&[2_000_000.0, 200_000.0], &[3_000_000.0, 400_000.0]],
        );
        let metrics = derive_metrics(&columns);

        assert_eq!(number(&metrics, "total_revenue"), 5_000_000.0);
        assert_eq!(number(&metrics, "avg_quarterly_revenue"), 2_500_000.0);
        assert_eq!(number(&metrics, "total_profit"), 600_000.0);
        assert!((number(&metrics, "profit_margin") - 12.0).abs() < 1e-9);
        assert_eq!(metrics["revenue_trend"], MetricValue::Trend(Trend::Increasing));
        assert_eq!(metrics["profit_trend"], MetricValue::Trend(Trend::Increasing));
    }

    #[test]
    fn headcount_defaults_when_absent() {
        let metrics = derive_metrics(&standardized(&["Revenue"], &[&[1_000.0]]));
        assert_eq!(number(&metrics, "current_headcount"), 620.0);
        assert_eq!(number(&metrics, "current_churn"), 0.08);
        assert!(!metrics.contains_key("headcount_change"));
    }

    #[test]
    fn headcount_uses_last_value_and_change() {
        let metrics = derive_metrics(&standardized(
            &["Employees"],
            &[&[600.0], &[610.7], &[640.2]],
        ));
        assert_eq!(number(&metrics, "current_headcount"), 640.0);
        assert_eq!(number(&metrics, "headcount_change"), 40.0);
    }

    #[test]
    fn cac_falls_back_to_spend_over_customers() {
        let metrics = derive_metrics(&standardized(
            &["Marketing Spend", "New Customers"],
            &[&[10_000.0, 20.0], &[30_000.0, 80.0]],
        ));
        assert_eq!(number(&metrics, "avg_cac"), 400.0);
    }

    #[test]
    fn churn_from_retention() {
        let metrics = derive_metrics(&standardized(&["Retention"], &[&[90.0], &[95.0]]));
        assert!((number(&metrics, "current_churn") - 0.05).abs() < 1e-9);
    }

    #[test]
    fn revenue_per_employee_uses_current_headcount() {
        let metrics = derive_metrics(&standardized(
            &["Revenue", "Headcount"],
            &[&[6_000_000.0, 500.0], &[6_400_000.0, 620.0]],
        ));
        assert_eq!(number(&metrics, "revenue_per_employee"), 20_000.0);
    }

    #[test]
    fn pipeline_deals_nps_csat_take_last_values() {
        let metrics = derive_metrics(&standardized(
            &["Pipeline", "Wins", "NPS", "CSAT", "Deal Size"],
            &[
                &[1_000_000.0, 30.0, 40.0, 4.0, 50_000.0],
                &[2_000_000.0, 41.9, 45.0, 4.4, 70_000.0],
            ],
        ));
        assert_eq!(number(&metrics, "current_pipeline"), 2_000_000.0);
        assert_eq!(number(&metrics, "quarterly_deals"), 41.0);
        assert_eq!(number(&metrics, "current_nps"), 45.0);
        assert_eq!(number(&metrics, "current_csat"), 4.4);
        assert_eq!(number(&metrics, "avg_deal_size"), 60_000.0);
    }

    #[test]
    fn metric_values_serialize_untagged() {
        assert_eq!(serde_json::to_string(&MetricValue::Number(1.5)).unwrap(), "1.5");
        assert_eq!(
            serde_json::to_string(&MetricValue::Trend(Trend::Decreasing)).unwrap(),
            "\"decreasing\""
        );
    }
}
