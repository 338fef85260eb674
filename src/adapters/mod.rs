//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `intent` - Intent extraction (Gemini, keyword rules, mock)
//! - `baseline` - In-memory company baseline store
//! - `spreadsheet` - Excel/CSV table decoding
//! - `http` - Axum REST API

pub mod baseline;
pub mod http;
pub mod intent;
pub mod spreadsheet;

pub use baseline::InMemoryBaselineStore;
pub use intent::{GeminiConfig, GeminiIntentExtractor, KeywordIntentExtractor, MockIntentExtractor};
pub use spreadsheet::SpreadsheetTableParser;
