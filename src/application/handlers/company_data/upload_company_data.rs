//! UploadCompanyDataHandler - Command handler replacing the company baseline.
//!
//! Parse, derive, then swap. On any failure the stored baseline is untouched.

use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::baseline::{BaselineError, CompanyBaseline, MetricValue};
use crate::ports::{BaselineStore, TableParseError, TableParser};

/// Command carrying the uploaded file.
#[derive(Debug, Clone)]
pub struct UploadCompanyDataCommand {
    pub filename: Option<String>,
    pub bytes: Vec<u8>,
}

/// Result of a successful upload.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadCompanyDataResult {
    pub record_count: usize,
    pub metrics: BTreeMap<String, MetricValue>,
    pub detected_columns: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum UploadError {
    #[error(transparent)]
    Parse(#[from] TableParseError),

    #[error(transparent)]
    Baseline(#[from] BaselineError),
}

/// Handler for company data uploads.
pub struct UploadCompanyDataHandler {
    parser: Arc<dyn TableParser>,
    baselines: Arc<dyn BaselineStore>,
}

impl UploadCompanyDataHandler {
    pub fn new(parser: Arc<dyn TableParser>, baselines: Arc<dyn BaselineStore>) -> Self {
        Self { parser, baselines }
    }

    pub async fn handle(
        &self,
        cmd: UploadCompanyDataCommand,
    ) -> Result<UploadCompanyDataResult, UploadError> {
        let filename = cmd.filename.as_deref().unwrap_or("<unnamed>");

        let baseline = self
            .parser
            .parse(&cmd.bytes)
            .map_err(UploadError::from)
            .and_then(|table| CompanyBaseline::from_table(&table).map_err(UploadError::from))
            .map_err(|err| {
                warn!(filename, size = cmd.bytes.len(), error = %err, "company data upload rejected");
                err
            })?;

        let result = UploadCompanyDataResult {
            record_count: baseline.record_count(),
            metrics: baseline.metrics().clone(),
            detected_columns: baseline.detected_columns().to_vec(),
        };

        self.baselines.replace(baseline).await;

        info!(
            filename,
            records = result.record_count,
            columns = ?result.detected_columns,
            "company baseline replaced"
        );

        Ok(result)
    }
}
