//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `IntentExtractor` - directive text to structured intent (remote or local)
//! - `BaselineStore` - shared company baseline with atomic replacement
//! - `TableParser` - uploaded spreadsheet bytes to a column table

mod baseline_store;
mod intent_extractor;
mod table_parser;

pub use baseline_store::BaselineStore;
pub use intent_extractor::{ExtractorInfo, IntentError, IntentExtractor};
pub use table_parser::{TableParseError, TableParser};
