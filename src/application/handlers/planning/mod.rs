//! Planning command handlers.

mod calculate_plan;

pub use calculate_plan::{
    CalculatePlanCommand, CalculatePlanHandler, CalculatePlanResult, IntentSource,
};
