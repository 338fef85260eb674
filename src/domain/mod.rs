//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared primitives (validation errors, numeric formatting)
//! - `intent` - Structured intent records and the keyword parser
//! - `baseline` - Uploaded company data, standardized columns, derived metrics
//! - `planning` - Department decisions, conflicts, projections and summaries

pub mod baseline;
pub mod foundation;
pub mod intent;
pub mod planning;
