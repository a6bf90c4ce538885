//! Delimited record-set export.

use std::path::Path;

use anyhow::{Context, Result};
use csv::WriterBuilder;
use polars::prelude::{AnyValue, DataFrame};

use gln_core::data_utils::display_value;

/// Write a frame as delimited text with a header row.
///
/// Cells are rendered the way the exchange format expects them: nulls as
/// empty fields, integer-valued floats without a fractional part.
pub fn write_delimited(df: &DataFrame, path: &Path, delimiter: char) -> Result<()> {
    let mut writer = WriterBuilder::new()
        .delimiter(delimiter as u8)
        .from_path(path)
        .with_context(|| format!("create export: {}", path.display()))?;

    let headers: Vec<String> = df
        .get_column_names()
        .iter()
        .map(|name| name.to_string())
        .collect();
    writer
        .write_record(&headers)
        .with_context(|| format!("write header: {}", path.display()))?;

    for idx in 0..df.height() {
        let mut record = Vec::with_capacity(headers.len());
        for name in &headers {
            let value = match df.column(name) {
                Ok(series) => display_value(series.get(idx).unwrap_or(AnyValue::Null)),
                Err(_) => String::new(),
            };
            record.push(value);
        }
        writer
            .write_record(&record)
            .with_context(|| format!("write row {idx}: {}", path.display()))?;
    }
    writer
        .flush()
        .with_context(|| format!("flush export: {}", path.display()))?;
    Ok(())
}
