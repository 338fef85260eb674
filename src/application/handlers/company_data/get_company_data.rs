//! GetCompanyDataHandler - Query handler for the current baseline.

use std::sync::Arc;

use crate::domain::baseline::CompanyBaseline;
use crate::ports::BaselineStore;

pub struct GetCompanyDataHandler {
    baselines: Arc<dyn BaselineStore>,
}

impl GetCompanyDataHandler {
    pub fn new(baselines: Arc<dyn BaselineStore>) -> Self {
        Self { baselines }
    }

    /// Current baseline, loaded or not.
    pub async fn handle(&self) -> Arc<CompanyBaseline> {
        self.baselines.current().await
    }
}
