//! Agentic Enterprise - Directive to department plan engine
//!
//! Turns a free-text executive directive into structured intent, then into
//! per-department budget, headcount and confidence recommendations, optionally
//! scaled by uploaded company data.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
