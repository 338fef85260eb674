//! Mock Intent Extractor for testing.
//!
//! Returns scripted records or errors in order, optionally after a delay,
//! and records every prompt it receives.
//!
//! # Example
//!
//! ```ignore
//! let extractor = MockIntentExtractor::new()
//!     .with_error(IntentError::timeout(20))
//!     .with_record(IntentRecord::default());
//! ```

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::time::sleep;

use crate::domain::intent::IntentRecord;
use crate::ports::{ExtractorInfo, IntentError, IntentExtractor};

#[derive(Debug, Clone)]
pub struct MockIntentExtractor {
    responses: Arc<Mutex<VecDeque<Result<IntentRecord, IntentError>>>>,
    info: ExtractorInfo,
    delay: Duration,
    calls: Arc<Mutex<Vec<String>>>,
}

impl Default for MockIntentExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl MockIntentExtractor {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(VecDeque::new())),
            info: ExtractorInfo::remote("mock", "mock-intent-1"),
            delay: Duration::ZERO,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Queues a successful extraction.
    pub fn with_record(self, record: IntentRecord) -> Self {
        self.responses.lock().unwrap().push_back(Ok(record));
        self
    }

    /// Queues a failed extraction.
    pub fn with_error(self, error: IntentError) -> Self {
        self.responses.lock().unwrap().push_back(Err(error));
        self
    }

    /// Sets simulated latency per call.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn prompts(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl IntentExtractor for MockIntentExtractor {
    async fn extract(&self, prompt: &str) -> Result<IntentRecord, IntentError> {
        self.calls.lock().unwrap().push(prompt.to_string());

        if !self.delay.is_zero() {
            sleep(self.delay).await;
        }

        // An empty script behaves like an unreachable service.
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(IntentError::unavailable("no scripted response")))
    }

    fn extractor_info(&self) -> ExtractorInfo {
        self.info.clone()
    }
}
