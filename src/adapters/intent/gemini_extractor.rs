//! Gemini Extractor - IntentExtractor backed by the Generative Language REST API.
//!
//! # Configuration
//!
//! ```ignore
//! let config = GeminiConfig::new(api_key)
//!     .with_model("gemini-1.5-flash")
//!     .with_timeout(Duration::from_secs(20));
//!
//! let extractor = GeminiIntentExtractor::new(config);
//! ```
//!
//! The model is asked for a single JSON object. The first `{...}` block of the
//! reply is decoded leniently: missing fields take their defaults, unknown
//! labels map to the neutral choice and the result must pass validation.

use async_trait::async_trait;
use once_cell::sync::Lazy;
use regex::Regex;
use reqwest::{Client, Response};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;

use crate::domain::intent::{
    BudgetImplication, Department, IntentRecord, ObjectiveType, TimeHorizon, UrgencyLevel,
    DEFAULT_TARGET_PERCENTAGE,
};
use crate::ports::{ExtractorInfo, IntentError, IntentExtractor};

static JSON_BLOCK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)\{.*\}").expect("JSON block pattern is valid"));

const EXTRACTION_PROMPT: &str = r#"You are an enterprise AI parser. Extract structured intent from CEO directives.

Analyze this CEO prompt and return a JSON object with:
{
    "primary_objective": "main goal (profit increase, cost reduction, etc.)",
    "secondary_objective": "secondary goal or null",
    "target_percentage": number (e.g., 15 for 15%),
    "secondary_percentage": number or null,
    "objective_type": "profit" | "cost_reduction" | "growth" | "efficiency" | "revenue",
    "time_horizon": "short" | "medium" | "long",
    "urgency_level": "low" | "medium" | "high",
    "budget_implication": "cut_costs" | "invest" | "reallocate" | "maintain",
    "inherent_tension": "description of conflicting objectives or null",
    "affected_departments": ["list", "of", "departments"]
}

CEO Prompt: "#;

/// Configuration for the Gemini extractor.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    api_key: Secret<String>,
    /// Model to use (e.g., "gemini-1.5-flash").
    pub model: String,
    /// Base URL (default: https://generativelanguage.googleapis.com/v1beta).
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl GeminiConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Secret::new(api_key.into()),
            model: "gemini-1.5-flash".to_string(),
            base_url: "https://generativelanguage.googleapis.com/v1beta".to_string(),
            timeout: Duration::from_secs(20),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }
}

/// Gemini-backed intent extractor.
pub struct GeminiIntentExtractor {
    config: GeminiConfig,
    client: Client,
}

impl GeminiIntentExtractor {
    pub fn new(config: GeminiConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .unwrap_or_default();

        Self { config, client }
    }

    fn generate_url(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            self.config.model
        )
    }

    async fn send_request(&self, prompt: &str) -> Result<Response, IntentError> {
        let request = GenerateRequest {
            contents: vec![GeminiContent {
                parts: vec![GeminiPart {
                    text: format!("{}{}", EXTRACTION_PROMPT, prompt),
                }],
            }],
        };

        self.client
            .post(self.generate_url())
            .query(&[("key", self.config.api_key())])
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    IntentError::timeout(self.config.timeout.as_secs())
                } else if e.is_connect() {
                    IntentError::network(format!("Connection failed: {}", e))
                } else {
                    IntentError::network(e.to_string())
                }
            })
    }

    async fn reply_text(&self, response: Response) -> Result<String, IntentError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(IntentError::unavailable(format!("status {}: {}", status, body)));
        }

        let reply: GenerateResponse = response
            .json()
            .await
            .map_err(|e| IntentError::parse(format!("Failed to parse response: {}", e)))?;

        reply
            .candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content)
            .and_then(|content| content.parts.into_iter().next())
            .map(|part| part.text)
            .ok_or_else(|| IntentError::parse("No candidates in response"))
    }
}

#[async_trait]
impl IntentExtractor for GeminiIntentExtractor {
    async fn extract(&self, prompt: &str) -> Result<IntentRecord, IntentError> {
        let response = self.send_request(prompt).await?;
        let text = self.reply_text(response).await?;
        parse_reply(&text)
    }

    fn extractor_info(&self) -> ExtractorInfo {
        ExtractorInfo::remote("gemini", self.config.model.clone())
    }
}

/// Decodes the model's reply into a validated record.
pub fn parse_reply(text: &str) -> Result<IntentRecord, IntentError> {
    let block = JSON_BLOCK
        .find(text)
        .ok_or_else(|| IntentError::parse("no JSON object in reply"))?;
    let raw: RawIntent = serde_json::from_str(block.as_str())
        .map_err(|e| IntentError::parse(format!("invalid JSON object: {}", e)))?;

    let record = raw.into_record();
    record
        .validate()
        .map_err(|e| IntentError::invalid_record(e.to_string()))?;
    Ok(record)
}

/// Intent object as the model writes it; every field optional.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawIntent {
    primary_objective: Option<String>,
    secondary_objective: Option<String>,
    target_percentage: Option<Value>,
    secondary_percentage: Option<Value>,
    objective_type: Option<String>,
    time_horizon: Option<String>,
    urgency_level: Option<String>,
    budget_implication: Option<String>,
    inherent_tension: Option<String>,
    affected_departments: Option<Vec<String>>,
}

impl RawIntent {
    fn into_record(self) -> IntentRecord {
        let defaults = IntentRecord::default();

        let objective_type = match self.objective_type {
            Some(label) => ObjectiveType::from_label(&label).unwrap_or_default(),
            None => defaults.objective_type,
        };
        let time_horizon = match self.time_horizon {
            Some(label) => TimeHorizon::from_label(&label).unwrap_or_default(),
            None => defaults.time_horizon,
        };
        // Unrecognised urgency reads as low.
        let urgency_level = match self.urgency_level {
            Some(label) => UrgencyLevel::from_label(&label).unwrap_or(UrgencyLevel::Low),
            None => defaults.urgency_level,
        };
        let budget_implication = match self.budget_implication {
            Some(label) => BudgetImplication::from_label(&label).unwrap_or_default(),
            None => defaults.budget_implication,
        };

        let mut affected_departments: Vec<Department> = Vec::new();
        for name in self.affected_departments.unwrap_or_default() {
            if let Some(department) = Department::from_name(&name) {
                if !affected_departments.contains(&department) {
                    affected_departments.push(department);
                }
            }
        }
        if affected_departments.is_empty() {
            affected_departments = Department::ALL.to_vec();
        }

        IntentRecord {
            objective_type,
            primary_objective: non_blank(self.primary_objective)
                .unwrap_or(defaults.primary_objective),
            secondary_objective: non_blank(self.secondary_objective),
            target_percentage: self
                .target_percentage
                .as_ref()
                .and_then(number)
                .unwrap_or(DEFAULT_TARGET_PERCENTAGE),
            secondary_percentage: self.secondary_percentage.as_ref().and_then(number),
            time_horizon,
            urgency_level,
            budget_implication,
            inherent_tension: non_blank(self.inherent_tension),
            affected_departments,
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty() && s.trim() != "null")
}

/// Accepts `15`, `15.5`, `"15"` or `"15%"`.
fn number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().trim_end_matches('%').trim().parse().ok(),
        _ => None,
    }
}

#[derive(Debug, Serialize)]
struct GenerateRequest {
    contents: Vec<GeminiContent>,
}

#[derive(Debug, Serialize, Deserialize)]
struct GeminiContent {
    #[serde(default)]
    parts: Vec<GeminiPart>,
}

#[derive(Debug, Serialize, Deserialize)]
struct GeminiPart {
    #[serde(default)]
    text: String,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
}

#[derive(Debug, Deserialize)]
struct GeminiCandidate {
    content: Option<GeminiContent>,
}
