//! In-Memory Baseline Store Adapter
//!
//! Holds the current company baseline behind an `Arc` swapped under a lock.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::baseline::CompanyBaseline;
use crate::ports::BaselineStore;

/// In-memory baseline holder
#[derive(Debug, Clone)]
pub struct InMemoryBaselineStore {
    current: Arc<RwLock<Arc<CompanyBaseline>>>,
}

impl InMemoryBaselineStore {
    /// Create a store with nothing loaded
    pub fn new() -> Self {
        Self::with_baseline(CompanyBaseline::unloaded())
    }

    /// Create a store seeded with a baseline (useful for tests)
    pub fn with_baseline(baseline: CompanyBaseline) -> Self {
        Self {
            current: Arc::new(RwLock::new(Arc::new(baseline))),
        }
    }
}

impl Default for InMemoryBaselineStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaselineStore for InMemoryBaselineStore {
    async fn current(&self) -> Arc<CompanyBaseline> {
        Arc::clone(&*self.current.read().await)
    }

    async fn replace(&self, baseline: CompanyBaseline) {
        *self.current.write().await = Arc::new(baseline);
    }

    async fn reset(&self) {
        *self.current.write().await = Arc::new(CompanyBaseline::unloaded());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::baseline::BaselineMetric;

    #[tokio::test]
    async fn starts_unloaded() {
        let store = InMemoryBaselineStore::new();
        assert!(!store.current().await.is_loaded());
    }

    #[tokio::test]
    async fn replace_swaps_whole_baseline() {
        let store = InMemoryBaselineStore::new();
        let before = store.current().await;

        store
            .replace(CompanyBaseline::from_metrics([(
                BaselineMetric::TotalRevenue,
                20_000_000.0,
            )]))
            .await;

        let after = store.current().await;
        assert!(after.is_loaded());
        assert_eq!(after.lookup(BaselineMetric::TotalRevenue), 20_000_000.0);
        // Snapshots taken earlier are unaffected.
        assert!(!before.is_loaded());
    }

    #[tokio::test]
    async fn reset_returns_to_defaults() {
        let store = InMemoryBaselineStore::with_baseline(CompanyBaseline::from_metrics([(
            BaselineMetric::CurrentHeadcount,
            100.0,
        )]));
        store.reset().await;
        let baseline = store.current().await;
        assert!(!baseline.is_loaded());
        assert_eq!(baseline.lookup(BaselineMetric::CurrentHeadcount), 620.0);
    }

    #[tokio::test]
    async fn clones_share_state() {
        let store = InMemoryBaselineStore::new();
        let clone = store.clone();
        clone
            .replace(CompanyBaseline::from_metrics([(BaselineMetric::AvgCac, 300.0)]))
            .await;
        assert!(store.current().await.is_loaded());
    }
}
