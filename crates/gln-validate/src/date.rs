//! Date-format advisory checks.
//!
//! The exchange format carries dates as `YYYY-MM-DD`; workbook round-trips
//! regularly flip them to the compact `YYYYMMDD` form, which downstream
//! still accepts. Anything else is reported, never rejected.

use polars::prelude::{AnyValue, DataFrame};

use gln_core::data_utils::display_value;
use gln_model::{Advisory, RunReport};

/// Accepted exchange date shapes.
fn is_exchange_date(value: &str) -> bool {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return true;
    }
    let patterns = [
        r"^\d{4}-\d{2}-\d{2}$", // YYYY-MM-DD
        r"^\d{8}$",             // YYYYMMDD
    ];
    for pattern in patterns {
        if regex::Regex::new(pattern)
            .map(|r| r.is_match(trimmed))
            .unwrap_or(false)
        {
            return true;
        }
    }
    false
}

/// Report every date-column value outside the accepted shapes.
pub fn check_date_columns(df: &DataFrame, columns: &[String], report: &mut RunReport) {
    for column in columns {
        let Some(name) = df
            .get_column_names()
            .iter()
            .find(|header| header.eq_ignore_ascii_case(column))
            .map(|header| header.to_string())
        else {
            continue;
        };
        let Ok(series) = df.column(&name) else {
            continue;
        };
        for idx in 0..df.height() {
            let value = display_value(series.get(idx).unwrap_or(AnyValue::Null));
            if !is_exchange_date(&value) {
                report.push_advisory(Advisory::InvalidDateFormat {
                    column: column.clone(),
                    row: idx,
                    observed: value,
                });
            }
        }
    }
}
