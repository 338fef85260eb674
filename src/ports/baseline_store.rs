//! Baseline Store Port - Holder of the company baseline shared by all requests.
//!
//! Replacement is by reference: readers get an `Arc` snapshot and always see
//! either the old or the new baseline in full. Concurrent writers are
//! serialized; the last one wins.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::baseline::CompanyBaseline;

#[async_trait]
pub trait BaselineStore: Send + Sync {
    /// Current baseline snapshot; unloaded until the first upload.
    async fn current(&self) -> Arc<CompanyBaseline>;

    /// Replaces the baseline wholesale.
    async fn replace(&self, baseline: CompanyBaseline);

    /// Drops any uploaded baseline, returning to defaults.
    async fn reset(&self);
}
