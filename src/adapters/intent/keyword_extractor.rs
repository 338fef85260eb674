//! Keyword Extractor - in-process IntentExtractor over `KeywordIntentParser`.

use async_trait::async_trait;

use crate::domain::intent::{IntentRecord, KeywordIntentParser};
use crate::ports::{ExtractorInfo, IntentError, IntentExtractor};

/// Used when no remote intent service is configured. Never fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordIntentExtractor;

impl KeywordIntentExtractor {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl IntentExtractor for KeywordIntentExtractor {
    async fn extract(&self, prompt: &str) -> Result<IntentRecord, IntentError> {
        Ok(KeywordIntentParser::parse(prompt))
    }

    fn extractor_info(&self) -> ExtractorInfo {
        ExtractorInfo::local("keyword")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::intent::ObjectiveType;

    #[tokio::test]
    async fn extracts_with_keyword_rules() {
        let record = KeywordIntentExtractor::new()
            .extract("Cut costs by 20% immediately")
            .await
            .unwrap();
        assert_eq!(record.objective_type, ObjectiveType::CostReduction);
        assert_eq!(record.target_percentage, 20.0);
    }

    #[test]
    fn info_is_local() {
        let info = KeywordIntentExtractor::new().extractor_info();
        assert_eq!(info.name, "keyword");
        assert!(!info.remote);
    }
}
