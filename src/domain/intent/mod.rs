//! Intent module - the structured reading of an executive directive.
//!
//! # Components
//!
//! - `IntentRecord` - objective, target figures, urgency and budget stance
//! - `Department` - the six departments recommendations are produced for
//! - `KeywordIntentParser` - deterministic extractor used when no remote
//!   service is available or it fails

mod department;
mod keyword_parser;
mod record;

pub use department::Department;
pub use keyword_parser::KeywordIntentParser;
pub use record::{
    BudgetImplication, IntentRecord, ObjectiveType, TimeHorizon, UrgencyLevel,
    DEFAULT_TARGET_PERCENTAGE,
};
