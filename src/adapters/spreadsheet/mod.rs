//! Spreadsheet Adapters.
//!
//! Implementation of the TableParser port for uploaded company data.

mod parser;

pub use parser::SpreadsheetTableParser;
