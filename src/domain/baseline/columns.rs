//! Column name recognition for uploaded company data.

use std::collections::HashMap;

use super::table::{Cell, Table};

/// Canonical field names and the normalized header names accepted for each.
///
/// Within a field, earlier synonyms win when several are present.
pub const COLUMN_SYNONYMS: &[(&str, &[&str])] = &[
    ("revenue", &["revenue", "sales", "turnover", "gross_revenue", "total_revenue"]),
    ("profit", &["profit", "net_profit", "operating_profit", "ebitda", "ebit", "net_income"]),
    ("costs", &["costs", "expenses", "total_costs", "operating_costs", "opex"]),
    ("headcount", &["headcount", "employees", "fte", "staff_count", "workforce"]),
    ("cac", &["cac", "customer_acquisition_cost", "acquisition_cost"]),
    ("new_customers", &["new_customers", "new_clients", "acquisitions", "customer_acquisitions"]),
    ("marketing_spend", &["marketing_spend", "marketing_budget", "ad_spend", "advertising"]),
    ("churn_rate", &["churn_rate", "churn", "attrition_rate", "customer_churn"]),
    ("retention_rate", &["retention_rate", "retention", "customer_retention"]),
    ("nps", &["nps", "net_promoter_score"]),
    ("csat", &["csat", "customer_satisfaction"]),
    ("pipeline", &["pipeline", "sales_pipeline", "opportunity_pipeline"]),
    ("deals_closed", &["deals_closed", "closed_deals", "wins", "sales_wins"]),
    ("avg_deal_size", &["avg_deal_size", "deal_size", "average_deal", "contract_value"]),
    ("quarter", &["quarter", "q", "period", "quarter_period"]),
    ("year", &["year", "yr", "fiscal_year"]),
    ("month", &["month", "mo", "month_period"]),
];

/// Lower-cases a header and turns whitespace into underscores.
///
/// `"Net Income"` becomes `"net_income"`.
pub fn normalize_column_name(name: &str) -> String {
    name.trim()
        .chars()
        .map(|c| if c.is_whitespace() { '_' } else { c })
        .collect::<String>()
        .to_lowercase()
}

/// Columns keyed by their standardized name, in recognition order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StandardizedColumns {
    entries: Vec<(String, Vec<Cell>)>,
}

impl StandardizedColumns {
    /// Maps table headers onto canonical field names.
    ///
    /// When no header matches any synonym, every column is passed through
    /// under its normalized name instead.
    pub fn from_table(table: &Table) -> Self {
        let mut by_normalized: HashMap<String, usize> = HashMap::new();
        for (index, column) in table.columns().iter().enumerate() {
            by_normalized.insert(normalize_column_name(&column.name), index);
        }

        let mut entries = Vec::new();
        for (canonical, synonyms) in COLUMN_SYNONYMS {
            let matched = synonyms.iter().find_map(|s| by_normalized.get(*s));
            if let Some(&index) = matched {
                entries.push((canonical.to_string(), table.columns()[index].cells.clone()));
            }
        }

        if !entries.is_empty() {
            return Self { entries };
        }

        for column in table.columns() {
            let key = normalize_column_name(&column.name);
            match entries.iter_mut().find(|(existing, _)| *existing == key) {
                Some(entry) => entry.1 = column.cells.clone(),
                None => entries.push((key, column.cells.clone())),
            }
        }

        Self { entries }
    }

    /// Standardized names in order.
    pub fn names(&self) -> Vec<String> {
        self.entries.iter().map(|(name, _)| name.clone()).collect()
    }

    pub fn get(&self, name: &str) -> Option<&[Cell]> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, cells)| cells.as_slice())
    }

    /// Numeric values of a column, skipping blanks and non-numeric cells.
    pub fn numbers(&self, name: &str) -> Option<Vec<f64>> {
        self.get(name)
            .map(|cells| cells.iter().filter_map(Cell::as_number).collect())
    }
}
