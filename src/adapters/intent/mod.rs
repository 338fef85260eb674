//! Intent Extractor Adapters.
//!
//! Implementations of the IntentExtractor port.
//!
//! ## Available Adapters
//!
//! - `GeminiIntentExtractor` - Google Gemini via the Generative Language REST API
//! - `KeywordIntentExtractor` - Deterministic keyword and percentage rules
//! - `MockIntentExtractor` - Scripted responses for testing

mod gemini_extractor;
mod keyword_extractor;
mod mock_extractor;

pub use gemini_extractor::{parse_reply, GeminiConfig, GeminiIntentExtractor};
pub use keyword_extractor::KeywordIntentExtractor;
pub use mock_extractor::MockIntentExtractor;
