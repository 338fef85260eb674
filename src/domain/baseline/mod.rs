//! Baseline module - company-specific figures from uploaded history.
//!
//! # Components
//!
//! - `Table` / `Cell` - column-oriented view of an uploaded spreadsheet
//! - `StandardizedColumns` - synonym-based header recognition
//! - `derive_metrics` - revenue, profit, CAC, headcount, churn and sales figures
//! - `CompanyBaseline` - defaulting lookups and size scaling used by planning

mod columns;
mod metrics;
mod profile;
mod table;

pub use columns::{normalize_column_name, StandardizedColumns, COLUMN_SYNONYMS};
pub use metrics::{derive_metrics, BaselineMetric, MetricValue, Trend};
pub use profile::{
    BaselineError, CompanyBaseline, DepartmentBaseline, DEFAULT_BASE_INVESTMENT,
    INVESTMENT_SHARE_OF_REVENUE, REFERENCE_HEADCOUNT, REFERENCE_REVENUE,
};
pub use table::{Cell, Column, Table};
