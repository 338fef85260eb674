//! ResetCompanyDataHandler - Command handler dropping the uploaded baseline.

use std::sync::Arc;

use tracing::info;

use crate::ports::BaselineStore;

/// Result of a reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResetCompanyDataResult {
    /// True when a loaded baseline was discarded.
    pub was_loaded: bool,
}

pub struct ResetCompanyDataHandler {
    baselines: Arc<dyn BaselineStore>,
}

impl ResetCompanyDataHandler {
    pub fn new(baselines: Arc<dyn BaselineStore>) -> Self {
        Self { baselines }
    }

    pub async fn handle(&self) -> ResetCompanyDataResult {
        let was_loaded = self.baselines.current().await.is_loaded();
        self.baselines.reset().await;
        info!(was_loaded, "company baseline reset");
        ResetCompanyDataResult { was_loaded }
    }
}
