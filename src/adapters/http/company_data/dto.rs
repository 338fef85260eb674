//! DTOs for company data endpoints.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeMap;

use crate::application::handlers::company_data::{DepartmentBaselinesView, UploadCompanyDataResult};
use crate::domain::baseline::{CompanyBaseline, MetricValue};

pub const NO_DATA_MESSAGE: &str = "No company data uploaded yet. Using default baselines.";
pub const CLEARED_MESSAGE: &str = "Company data cleared. Using default baselines.";

/// Response for POST /api/upload.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UploadResponse {
    pub status: &'static str,
    pub message: String,
    pub metrics: BTreeMap<String, MetricValue>,
    pub detected_columns: Vec<String>,
}

impl From<UploadCompanyDataResult> for UploadResponse {
    fn from(result: UploadCompanyDataResult) -> Self {
        Self {
            status: "success",
            message: format!("Processed {} records", result.record_count),
            metrics: result.metrics,
            detected_columns: result.detected_columns,
        }
    }
}

/// Body of a rejected upload.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UploadErrorResponse {
    pub status: &'static str,
    pub message: String,
}

impl UploadErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            status: "error",
            message: message.into(),
        }
    }
}

/// Response for GET and DELETE /api/company-data.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CompanyDataResponse {
    NoData {
        message: String,
    },
    Loaded {
        metrics: BTreeMap<String, MetricValue>,
        detected_columns: Vec<String>,
        record_count: usize,
        #[serde(skip_serializing_if = "Option::is_none")]
        loaded_at: Option<DateTime<Utc>>,
    },
}

impl CompanyDataResponse {
    pub fn no_data(message: impl Into<String>) -> Self {
        Self::NoData {
            message: message.into(),
        }
    }
}

impl From<&CompanyBaseline> for CompanyDataResponse {
    fn from(baseline: &CompanyBaseline) -> Self {
        if !baseline.is_loaded() {
            return Self::no_data(NO_DATA_MESSAGE);
        }
        Self::Loaded {
            metrics: baseline.metrics().clone(),
            detected_columns: baseline.detected_columns().to_vec(),
            record_count: baseline.record_count(),
            loaded_at: baseline.loaded_at(),
        }
    }
}

/// Response for GET /api/company-data/baselines.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DepartmentBaselinesResponse {
    pub loaded: bool,
    pub departments: BTreeMap<String, BTreeMap<&'static str, f64>>,
}

impl From<DepartmentBaselinesView> for DepartmentBaselinesResponse {
    fn from(view: DepartmentBaselinesView) -> Self {
        Self {
            loaded: view.loaded,
            departments: view
                .departments
                .into_iter()
                .map(|baseline| (baseline.department.name().to_string(), baseline.figures))
                .collect(),
        }
    }
}
