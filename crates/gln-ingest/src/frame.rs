//! Record-set construction from delimited tables.
//!
//! Every column is kept as a string series; an empty cell becomes `Null` so
//! downstream rules see a logical absent value rather than an empty string.

use polars::prelude::{Column, DataFrame, NamedFrom, Series};

use crate::delimited::DelimitedTable;
use crate::error::{IngestError, Result};

fn cell_value(row: &[String], idx: usize) -> Option<String> {
    let value = row.get(idx).map(String::as_str).unwrap_or("");
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Disambiguate repeated headers so the frame can be built.
fn unique_headers(headers: &[String]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::with_capacity(headers.len());
    for header in headers {
        let mut name = header.clone();
        let mut suffix = 2usize;
        while seen.iter().any(|taken| taken.eq_ignore_ascii_case(&name)) {
            name = format!("{}_{}", header, suffix);
            suffix += 1;
        }
        seen.push(name);
    }
    seen
}

/// Build a record-set frame from one table.
pub fn build_frame(table: &DelimitedTable) -> Result<DataFrame> {
    let headers = unique_headers(&table.headers);
    let mut columns: Vec<Column> = Vec::with_capacity(headers.len());
    for (idx, header) in headers.iter().enumerate() {
        let values: Vec<Option<String>> = table
            .rows
            .iter()
            .map(|row| cell_value(row, idx))
            .collect();
        columns.push(Series::new(header.as_str().into(), values).into());
    }
    DataFrame::new(columns).map_err(|e| IngestError::Frame(e.to_string()))
}

/// Build one record-set frame from several tables, unioning their columns.
///
/// The mutation mailboxes deliver several attachments per day with slightly
/// different column sets; rows from a table lacking a column get `Null`
/// there. Column order is first-seen order across the inputs.
pub fn build_merged_frame(tables: &[DelimitedTable]) -> Result<DataFrame> {
    let mut headers: Vec<String> = Vec::new();
    for table in tables {
        for header in &table.headers {
            if !headers.iter().any(|seen| seen.eq_ignore_ascii_case(header)) {
                headers.push(header.clone());
            }
        }
    }
    let total_rows: usize = tables.iter().map(|table| table.rows.len()).sum();
    let mut columns: Vec<Column> = Vec::with_capacity(headers.len());
    for header in &headers {
        let mut values: Vec<Option<String>> = Vec::with_capacity(total_rows);
        for table in tables {
            match table.column_index(header) {
                Some(idx) => {
                    for row in &table.rows {
                        values.push(cell_value(row, idx));
                    }
                }
                None => values.extend(std::iter::repeat_n(None, table.rows.len())),
            }
        }
        columns.push(Series::new(header.as_str().into(), values).into());
    }
    DataFrame::new(columns).map_err(|e| IngestError::Frame(e.to_string()))
}
