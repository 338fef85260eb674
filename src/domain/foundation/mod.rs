//! Foundation module - Shared domain primitives.
//!
//! Contains the validation error vocabulary and the numeric helpers used
//! across intent, baseline and planning code.

mod errors;
mod numeric;

pub use errors::ValidationError;
pub use numeric::{format_currency, format_percent, round_to_tenth};
