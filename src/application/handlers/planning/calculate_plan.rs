//! CalculatePlanHandler - Command handler turning a directive into a plan.
//!
//! Extraction goes through the configured `IntentExtractor` under a time
//! limit. Any extraction failure is logged and replaced by keyword parsing, so
//! this handler always produces a plan.

use std::sync::Arc;
use std::time::Duration;

use tracing::{info, warn};
use uuid::Uuid;

use crate::domain::intent::{IntentRecord, KeywordIntentParser};
use crate::domain::planning::{PlanBundle, PlanRequest, PlanningEngine};
use crate::ports::{BaselineStore, IntentError, IntentExtractor};

/// Command to calculate a plan.
#[derive(Debug, Clone)]
pub struct CalculatePlanCommand {
    pub prompt: String,
    pub investment_limit: Option<f64>,
    pub timeline_weeks: Option<u32>,
}

/// Where the intent record came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntentSource {
    /// The configured extractor, by name.
    Extractor(String),
    /// Keyword rules after the extractor failed.
    KeywordFallback,
}

/// Result of a calculation.
#[derive(Debug, Clone)]
pub struct CalculatePlanResult {
    pub correlation_id: Uuid,
    pub intent: IntentRecord,
    pub intent_source: IntentSource,
    pub baseline_applied: bool,
    pub bundle: PlanBundle,
}

/// Handler for plan calculations.
pub struct CalculatePlanHandler {
    extractor: Arc<dyn IntentExtractor>,
    baselines: Arc<dyn BaselineStore>,
    extraction_timeout: Duration,
}

impl CalculatePlanHandler {
    pub fn new(
        extractor: Arc<dyn IntentExtractor>,
        baselines: Arc<dyn BaselineStore>,
        extraction_timeout: Duration,
    ) -> Self {
        Self {
            extractor,
            baselines,
            extraction_timeout,
        }
    }

    pub async fn handle(&self, cmd: CalculatePlanCommand) -> CalculatePlanResult {
        let correlation_id = Uuid::new_v4();

        // 1. Extract intent, falling back to keyword rules
        let (intent, intent_source) = match self.extract(&cmd.prompt).await {
            Ok(intent) => (
                intent,
                IntentSource::Extractor(self.extractor.extractor_info().name),
            ),
            Err(err) => {
                warn!(
                    %correlation_id,
                    extractor = %self.extractor.extractor_info().name,
                    error = %err,
                    "intent extraction failed, using keyword parsing"
                );
                (KeywordIntentParser::parse(&cmd.prompt), IntentSource::KeywordFallback)
            }
        };

        // 2. Snapshot the baseline for the whole calculation
        let baseline = self.baselines.current().await;
        let request = PlanRequest::new(cmd.investment_limit, cmd.timeline_weeks);

        // 3. Run the engine
        let bundle = PlanningEngine::plan(&intent, &request, &baseline);

        info!(
            %correlation_id,
            objective = ?intent.objective_type,
            mode = bundle.mode.as_str(),
            baseline_applied = baseline.is_loaded(),
            investment_limit = request.investment_limit(),
            timeline_weeks = request.timeline_weeks(),
            "plan calculated"
        );

        CalculatePlanResult {
            correlation_id,
            intent,
            intent_source,
            baseline_applied: baseline.is_loaded(),
            bundle,
        }
    }

    async fn extract(&self, prompt: &str) -> Result<IntentRecord, IntentError> {
        let intent = tokio::time::timeout(self.extraction_timeout, self.extractor.extract(prompt))
            .await
            .map_err(|_| IntentError::timeout(self.extraction_timeout.as_secs()))??;
        intent
            .validate()
            .map_err(|e| IntentError::invalid_record(e.to_string()))?;
        Ok(intent)
    }
}
