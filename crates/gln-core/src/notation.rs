//! Scientific-notation repair for identifier columns.
//!
//! GLN codes round-tripped through a spreadsheet come back as exponential
//! strings with a comma decimal separator (`"8,71378E+12"`). The repair uses
//! decimal arithmetic so a 13-digit identifier is restored to its exact
//! digits; floating point would lose the tail.

use anyhow::Result;
use polars::prelude::DataFrame;
use rust_decimal::Decimal;

use crate::data_utils::{column_values, set_string_column};

fn looks_exponential(value: &str) -> bool {
    let Some(pos) = value.find(['e', 'E']) else {
        return false;
    };
    let (mantissa, exponent) = value.split_at(pos);
    let exponent = &exponent[1..];
    let mantissa_ok = !mantissa.is_empty()
        && mantissa.chars().all(|ch| ch.is_ascii_digit() || ch == ',' || ch == '.')
        && mantissa.chars().any(|ch| ch.is_ascii_digit());
    let digits = exponent.strip_prefix(['+', '-']).unwrap_or(exponent);
    let exponent_ok = !digits.is_empty() && digits.chars().all(|ch| ch.is_ascii_digit());
    mantissa_ok && exponent_ok
}

/// Restore an exponential identifier string to plain digits.
///
/// Returns `None` when the value does not look like spreadsheet exponent
/// damage; callers leave such values untouched.
pub fn repair_exponent_notation(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if !looks_exponential(trimmed) {
        return None;
    }
    let normalized = trimmed.replace(',', ".").to_lowercase().replace("e+", "e");
    let decimal = Decimal::from_scientific(&normalized).ok()?;
    Some(decimal.normalize().to_string())
}

/// Repair every exponential value in an identifier column, in place.
///
/// Missing columns and clean values are left alone.
pub fn repair_exponent_column(df: &mut DataFrame, column: &str) -> Result<()> {
    let Some(values) = column_values(df, column) else {
        return Ok(());
    };
    let mut changed = false;
    let repaired: Vec<Option<String>> = values
        .into_iter()
        .map(|value| {
            if value.is_empty() {
                return None;
            }
            match repair_exponent_notation(&value) {
                Some(fixed) => {
                    changed = true;
                    Some(fixed)
                }
                None => Some(value),
            }
        })
        .collect();
    if changed {
        set_string_column(df, column, repaired)?;
    }
    Ok(())
}
