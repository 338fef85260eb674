//! Spreadsheet Table Parser - workbook formats first, delimited text second.

use calamine::{open_workbook_auto_from_rs, Data, Reader};
use std::io::Cursor;

use crate::domain::baseline::{Cell, Table};
use crate::ports::{TableParseError, TableParser};

/// Decodes xlsx/xls/ods workbooks (first sheet) or CSV text.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpreadsheetTableParser;

impl SpreadsheetTableParser {
    pub fn new() -> Self {
        Self
    }

    fn parse_workbook(bytes: &[u8]) -> Result<Table, TableParseError> {
        let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes.to_vec()))
            .map_err(|e| TableParseError::Unreadable(e.to_string()))?;
        let range = workbook
            .worksheet_range_at(0)
            .ok_or(TableParseError::NoColumns)?
            .map_err(|e| TableParseError::Unreadable(e.to_string()))?;

        let mut rows = range.rows();
        let headers: Vec<String> = rows
            .next()
            .ok_or(TableParseError::NoColumns)?
            .iter()
            .enumerate()
            .map(|(i, cell)| header_name(i, &cell.to_string()))
            .collect();

        let records = rows
            .map(|row| row.iter().map(workbook_cell).collect())
            .collect();

        finish(headers, records)
    }

    fn parse_delimited(bytes: &[u8]) -> Result<Table, TableParseError> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(bytes);

        let headers: Vec<String> = reader
            .headers()
            .map_err(|e| TableParseError::Unreadable(e.to_string()))?
            .iter()
            .enumerate()
            .map(|(i, name)| header_name(i, name))
            .collect();

        let mut records = Vec::new();
        for record in reader.records() {
            let record = record.map_err(|e| TableParseError::Unreadable(e.to_string()))?;
            records.push(record.iter().map(Cell::from_text).collect());
        }

        finish(headers, records)
    }
}

impl TableParser for SpreadsheetTableParser {
    fn parse(&self, bytes: &[u8]) -> Result<Table, TableParseError> {
        if bytes.iter().all(|b| b.is_ascii_whitespace()) {
            return Err(TableParseError::Empty);
        }
        Self::parse_workbook(bytes).or_else(|workbook_err| {
            tracing::debug!(error = %workbook_err, "not a workbook, reading as delimited text");
            Self::parse_delimited(bytes)
        })
    }
}

fn finish(headers: Vec<String>, records: Vec<Vec<Cell>>) -> Result<Table, TableParseError> {
    if headers.is_empty() {
        return Err(TableParseError::NoColumns);
    }
    Ok(Table::from_rows(headers, records))
}

fn header_name(index: usize, raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        format!("unnamed_{}", index)
    } else {
        trimmed.to_string()
    }
}

fn workbook_cell(data: &Data) -> Cell {
    match data {
        Data::Int(value) => Cell::Number(*value as f64),
        Data::Float(value) if value.is_finite() => Cell::Number(*value),
        Data::Float(_) => Cell::Empty,
        Data::String(text) => Cell::from_text(text),
        Data::Empty | Data::Error(_) => Cell::Empty,
        other => Cell::Text(other.to_string()),
    }
}
