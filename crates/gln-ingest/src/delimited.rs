//! Delimited-file reading.
//!
//! The registry feeds arrive as comma-, semicolon-, or tab-separated text
//! with a single header row. Cells are trimmed and BOM-stripped; rows that
//! are entirely empty (spreadsheet padding) are dropped.

use std::path::Path;

use csv::ReaderBuilder;

use crate::error::{IngestError, Result};

#[derive(Debug, Clone, Default)]
pub struct DelimitedTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl DelimitedTable {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Position of a header, matched case-insensitively.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers
            .iter()
            .position(|header| header.eq_ignore_ascii_case(name))
    }
}

fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    let mut parts = trimmed.split_whitespace();
    let mut normalized = String::new();
    if let Some(first) = parts.next() {
        normalized.push_str(first);
        for part in parts {
            normalized.push(' ');
            normalized.push_str(part);
        }
    }
    normalized
}

fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

/// Guess the field separator from the header line.
///
/// The exchange format is semicolon-delimited, but workbooks re-saved by the
/// senders regularly come back comma- or tab-separated.
pub fn sniff_delimiter(first_line: &str) -> u8 {
    let candidates = [b';', b',', b'\t'];
    let mut best = b';';
    let mut best_count = 0usize;
    for candidate in candidates {
        let count = first_line
            .bytes()
            .filter(|byte| *byte == candidate)
            .count();
        if count > best_count {
            best = candidate;
            best_count = count;
        }
    }
    best
}

/// Read a delimited file into a table, sniffing the separator.
pub fn read_delimited_table(path: &Path) -> Result<DelimitedTable> {
    let text = std::fs::read_to_string(path).map_err(|e| IngestError::Read {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    let delimiter = sniff_delimiter(text.lines().next().unwrap_or(""));
    read_delimited_table_str(&text, delimiter).map_err(|message| IngestError::Read {
        path: path.to_path_buf(),
        message,
    })
}

/// Read delimited text with an explicit separator.
pub fn read_delimited_table_str(
    text: &str,
    delimiter: u8,
) -> std::result::Result<DelimitedTable, String> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(delimiter)
        .from_reader(text.as_bytes());
    let mut raw_rows: Vec<Vec<String>> = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| e.to_string())?;
        let row: Vec<String> = record.iter().map(normalize_cell).collect();
        if row.iter().all(|value| value.trim().is_empty()) {
            continue;
        }
        raw_rows.push(row);
    }
    if raw_rows.is_empty() {
        return Ok(DelimitedTable::default());
    }
    let headers: Vec<String> = raw_rows[0].iter().map(|value| normalize_header(value)).collect();
    let mut rows = Vec::new();
    for record in raw_rows.iter().skip(1) {
        let mut row = Vec::with_capacity(headers.len());
        for idx in 0..headers.len() {
            let value = record.get(idx).map(String::as_str).unwrap_or("");
            row.push(normalize_cell(value));
        }
        rows.push(row);
    }
    Ok(DelimitedTable { headers, rows })
}
