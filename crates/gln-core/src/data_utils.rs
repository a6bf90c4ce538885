use anyhow::Result;
use polars::prelude::{AnyValue, DataFrame, NamedFrom, Series};

pub fn any_to_string(value: AnyValue) -> String {
    match value {
        AnyValue::String(value) => value.to_string(),
        AnyValue::StringOwned(value) => value.to_string(),
        AnyValue::Null => String::new(),
        _ => value.to_string(),
    }
}

/// Render a cell the way it appears in the exchange files.
///
/// Integer-valued floats lose their fractional part, and string cells that
/// picked up a `.0` suffix from a spreadsheet round-trip (`"12345678.0"`)
/// have it stripped, so length and class checks see the real identifier.
pub fn display_value(value: AnyValue) -> String {
    match value {
        AnyValue::Null => String::new(),
        AnyValue::String(value) => strip_float_suffix(value.trim()),
        AnyValue::StringOwned(value) => strip_float_suffix(value.trim()),
        AnyValue::Float64(value) => format_numeric(value),
        AnyValue::Float32(value) => format_numeric(value as f64),
        AnyValue::Int64(value) => value.to_string(),
        AnyValue::Int32(value) => value.to_string(),
        AnyValue::Boolean(value) => {
            if value {
                "1".to_string()
            } else {
                "0".to_string()
            }
        }
        value => value.to_string(),
    }
}

pub fn format_numeric(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}

fn strip_float_suffix(value: &str) -> String {
    if let Some(stem) = value.strip_suffix(".0")
        && !stem.is_empty()
        && stem.chars().all(|ch| ch.is_ascii_digit())
    {
        return stem.to_string();
    }
    value.to_string()
}

pub fn is_missing(value: &AnyValue) -> bool {
    match value {
        AnyValue::Null => true,
        AnyValue::String(s) => s.trim().is_empty(),
        AnyValue::StringOwned(s) => s.trim().is_empty(),
        _ => false,
    }
}

pub fn column_value_string(df: &DataFrame, name: &str, idx: usize) -> String {
    match df.column(name) {
        Ok(series) => display_value(series.get(idx).unwrap_or(AnyValue::Null)),
        Err(_) => String::new(),
    }
}

/// Whether the cell at (`name`, `idx`) holds a value.
pub fn cell_present(df: &DataFrame, name: &str, idx: usize) -> bool {
    match df.column(name) {
        Ok(series) => !is_missing(&series.get(idx).unwrap_or(AnyValue::Null)),
        Err(_) => false,
    }
}

/// All display values of a column, or None if the column is absent.
pub fn column_values(df: &DataFrame, name: &str) -> Option<Vec<String>> {
    let series = df.column(name).ok()?;
    Some(
        (0..df.height())
            .map(|idx| display_value(series.get(idx).unwrap_or(AnyValue::Null)))
            .collect(),
    )
}

/// Replace (or insert) a string column; `None` entries become nulls.
pub fn set_string_column(df: &mut DataFrame, name: &str, values: Vec<Option<String>>) -> Result<()> {
    let series = Series::new(name.into(), values);
    df.with_column(series)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::df;

    #[test]
    fn display_strips_float_suffix() {
        assert_eq!(display_value(AnyValue::String("12345678.0")), "12345678");
        assert_eq!(display_value(AnyValue::String("12.50")), "12.50");
        assert_eq!(display_value(AnyValue::Float64(21.0)), "21");
        assert_eq!(display_value(AnyValue::Null), "");
    }

    #[test]
    fn cell_presence_tolerates_missing_columns() {
        let df = df! { "a" => ["x", ""] }.unwrap();
        assert!(cell_present(&df, "a", 0));
        assert!(!cell_present(&df, "a", 1));
        assert!(!cell_present(&df, "missing", 0));
    }
}
