//! Row-level normalization primitives.
//!
//! Each function is one business rule over a record-set frame. Rules that
//! only observe the data report through the [`RunReport`]; rules that repair
//! it mutate the frame in place and stay silent. Every rule skips columns
//! the frame does not carry.

use std::collections::BTreeMap;

use anyhow::Result;
use polars::prelude::{AnyValue, BooleanChunked, Column, DataFrame, NewChunkedArray};

use gln_model::{Advisory, RunReport};

use crate::data_utils::{any_to_string, cell_present, column_values, set_string_column};

/// Rename headers that differ from the contract spelling only in case.
///
/// The senders re-save workbooks and header casing drifts; every rule
/// after this one matches the contract names exactly.
pub fn align_headers(df: &mut DataFrame, columns: &[String]) -> Result<()> {
    for column in columns {
        let actual = df
            .get_column_names()
            .iter()
            .find(|name| name.eq_ignore_ascii_case(column))
            .map(|name| name.to_string());
        if let Some(actual) = actual
            && actual != *column
        {
            df.rename(&actual, column.as_str().into())?;
        }
    }
    Ok(())
}

/// Add every named column that the frame lacks, as all-null strings.
pub fn ensure_columns(df: &mut DataFrame, columns: &[String]) -> Result<()> {
    for column in columns {
        if df.column(column).is_ok() {
            continue;
        }
        let values: Vec<Option<String>> = vec![None; df.height()];
        set_string_column(df, column, values)?;
    }
    Ok(())
}

/// Null out `targets` on every row where `trigger` holds a value.
///
/// The trigger may appear among the targets; it is cleared last so the
/// row selection is stable.
pub fn conditional_clear(df: &mut DataFrame, trigger: &str, targets: &[String]) -> Result<()> {
    if df.column(trigger).is_err() {
        return Ok(());
    }
    let triggered: Vec<bool> = (0..df.height())
        .map(|idx| cell_present(df, trigger, idx))
        .collect();
    if !triggered.iter().any(|hit| *hit) {
        return Ok(());
    }
    // Clear the trigger itself last so the row selection stays stable.
    let mut ordered: Vec<String> = targets
        .iter()
        .filter(|target| !target.eq_ignore_ascii_case(trigger))
        .cloned()
        .collect();
    if targets.iter().any(|target| target.eq_ignore_ascii_case(trigger)) {
        ordered.push(trigger.to_string());
    }
    for target in &ordered {
        let Some(values) = column_values(df, target) else {
            continue;
        };
        let cleared: Vec<Option<String>> = values
            .into_iter()
            .enumerate()
            .map(|(idx, value)| {
                if triggered[idx] || value.is_empty() {
                    None
                } else {
                    Some(value)
                }
            })
            .collect();
        set_string_column(df, target, cleared)?;
    }
    Ok(())
}

/// Report rows where `trigger` is filled but a companion column is not.
pub fn require_companions(
    df: &DataFrame,
    trigger: &str,
    companions: &[String],
    report: &mut RunReport,
) {
    if df.column(trigger).is_err() {
        return;
    }
    for idx in 0..df.height() {
        if !cell_present(df, trigger, idx) {
            continue;
        }
        for companion in companions {
            if !cell_present(df, companion, idx) {
                report.push_advisory(Advisory::MissingCompanion {
                    row: idx,
                    column: companion.clone(),
                });
            }
        }
    }
}

/// Replace a column that is empty across all rows with a single scalar.
///
/// Downstream consumers type these columns strictly; a fully blank column
/// would otherwise arrive untyped.
pub fn default_empty_column(df: &mut DataFrame, column: &str, fill: &str) -> Result<()> {
    let Some(values) = column_values(df, column) else {
        return Ok(());
    };
    if df.height() == 0 || values.iter().any(|value| !value.is_empty()) {
        return Ok(());
    }
    let filled: Vec<Option<String>> = vec![Some(fill.to_string()); df.height()];
    set_string_column(df, column, filled)?;
    Ok(())
}

/// Left-pad non-empty identifiers with zeros up to `width`.
///
/// Values already at or above the width, and empty cells, are untouched, so
/// a second pass changes nothing.
pub fn zero_pad_column(df: &mut DataFrame, column: &str, width: usize) -> Result<()> {
    let Some(values) = column_values(df, column) else {
        return Ok(());
    };
    let mut changed = false;
    let padded: Vec<Option<String>> = values
        .into_iter()
        .map(|value| {
            if value.is_empty() {
                return None;
            }
            if value.chars().count() < width {
                changed = true;
                Some(format!("{:0>width$}", value, width = width))
            } else {
                Some(value)
            }
        })
        .collect();
    if changed {
        set_string_column(df, column, padded)?;
    }
    Ok(())
}

/// Report groups of rows that share a value in a registration-number column.
///
/// Duplicates are flagged, never removed; the registry owners resolve them
/// by hand.
pub fn flag_duplicates(df: &DataFrame, column: &str, report: &mut RunReport) {
    let Some(values) = column_values(df, column) else {
        return;
    };
    let mut groups: BTreeMap<String, Vec<usize>> = BTreeMap::new();
    for (idx, value) in values.into_iter().enumerate() {
        if value.is_empty() {
            continue;
        }
        groups.entry(value).or_default().push(idx);
    }
    for (value, rows) in groups {
        if rows.len() > 1 {
            report.push_advisory(Advisory::DuplicateRegistration {
                column: column.to_string(),
                value,
                rows,
            });
        }
    }
}

/// Report any cell containing the export field separator.
pub fn flag_delimiter(df: &DataFrame, delimiter: char, report: &mut RunReport) {
    let names: Vec<String> = df
        .get_column_names()
        .iter()
        .map(|name| name.to_string())
        .collect();
    for name in names {
        let Ok(series) = df.column(&name) else {
            continue;
        };
        for idx in 0..df.height() {
            let value = any_to_string(series.get(idx).unwrap_or(AnyValue::Null));
            if value.contains(delimiter) {
                report.push_advisory(Advisory::DelimiterInCell {
                    column: name.clone(),
                    row: idx,
                });
            }
        }
    }
}

/// Report registration numbers that are not exactly `width` digits.
pub fn check_registration_format(
    df: &DataFrame,
    column: &str,
    width: usize,
    report: &mut RunReport,
) {
    let Some(values) = column_values(df, column) else {
        return;
    };
    for (idx, value) in values.into_iter().enumerate() {
        if value.is_empty() {
            continue;
        }
        let well_formed = value.chars().count() == width && value.chars().all(|ch| ch.is_ascii_digit());
        if !well_formed {
            report.push_advisory(Advisory::InvalidRegistration {
                column: column.to_string(),
                row: idx,
                observed: value,
            });
        }
    }
}

/// Assign a constant to a column, optionally only on rows where a trigger
/// column holds a value.
pub fn set_constant(
    df: &mut DataFrame,
    column: &str,
    value: &str,
    only_where_present: Option<&str>,
) -> Result<()> {
    let existing = column_values(df, column);
    let assigned: Vec<Option<String>> = (0..df.height())
        .map(|idx| {
            let applies = match only_where_present {
                Some(trigger) => cell_present(df, trigger, idx),
                None => true,
            };
            if applies {
                Some(value.to_string())
            } else {
                existing
                    .as_ref()
                    .map(|values| values[idx].clone())
                    .filter(|current| !current.is_empty())
            }
        })
        .collect();
    set_string_column(df, column, assigned)?;
    Ok(())
}

/// Copy one column's values into another, overwriting the target.
pub fn copy_column(df: &mut DataFrame, source: &str, target: &str) -> Result<()> {
    let Some(values) = column_values(df, source) else {
        return Ok(());
    };
    let copied: Vec<Option<String>> = values
        .into_iter()
        .map(|value| if value.is_empty() { None } else { Some(value) })
        .collect();
    set_string_column(df, target, copied)?;
    Ok(())
}

/// Set `target` to `value` on rows where `source` holds a value, null
/// elsewhere.
pub fn derive_flag(df: &mut DataFrame, source: &str, target: &str, value: &str) -> Result<()> {
    let flags: Vec<Option<String>> = (0..df.height())
        .map(|idx| {
            if cell_present(df, source, idx) {
                Some(value.to_string())
            } else {
                None
            }
        })
        .collect();
    set_string_column(df, target, flags)?;
    Ok(())
}

/// Drop rows where a column is empty (mail-attachment padding rows).
pub fn drop_rows_where_empty(df: &mut DataFrame, column: &str) -> Result<()> {
    if df.column(column).is_err() {
        return Ok(());
    }
    let keep: Vec<bool> = (0..df.height())
        .map(|idx| cell_present(df, column, idx))
        .collect();
    if keep.iter().all(|k| *k) {
        return Ok(());
    }
    let mask = BooleanChunked::from_slice("keep".into(), &keep);
    *df = df.filter(&mask)?;
    Ok(())
}

/// Reduce the frame to the named columns, in order; missing ones are added
/// as all-null.
pub fn select_columns(df: &mut DataFrame, columns: &[String]) -> Result<()> {
    ensure_columns(df, columns)?;
    let mut selected: Vec<Column> = Vec::with_capacity(columns.len());
    for column in columns {
        selected.push(df.column(column)?.clone());
    }
    *df = DataFrame::new(selected)?;
    Ok(())
}
