//! Table Parser Port - Decodes uploaded spreadsheet bytes into a `Table`.

use crate::domain::baseline::Table;

/// Errors decoding uploaded data.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TableParseError {
    #[error("file is empty")]
    Empty,

    #[error("No columns to parse from file")]
    NoColumns,

    #[error("unreadable file: {0}")]
    Unreadable(String),
}

/// Port for spreadsheet decoding.
///
/// # Contract
///
/// Implementations must:
/// - Use the first row as headers
/// - Return numbers as numbers and keep everything else as text
/// - Fail rather than return a table without columns
pub trait TableParser: Send + Sync {
    fn parse(&self, bytes: &[u8]) -> Result<Table, TableParseError>;
}
