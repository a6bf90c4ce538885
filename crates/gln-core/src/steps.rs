//! Configurable normalization steps.
//!
//! Each struct here binds one transform from [`crate::transforms`] (or the
//! notation repair) to its per-feed configuration, so feed pipelines are
//! assembled declaratively.

use anyhow::Result;
use polars::prelude::DataFrame;

use gln_model::RunReport;

use crate::notation::repair_exponent_column;
use crate::pipeline::NormalizeStep;
use crate::transforms;

fn owned(columns: &[&str]) -> Vec<String> {
    columns.iter().map(|column| column.to_string()).collect()
}

/// Rename case-drifted headers to the contract spelling.
pub struct AlignHeaders {
    pub columns: Vec<String>,
}

impl AlignHeaders {
    pub fn new(columns: Vec<String>) -> Self {
        Self { columns }
    }
}

impl NormalizeStep for AlignHeaders {
    fn step_name(&self) -> &str {
        "align_headers"
    }

    fn apply(&self, df: &mut DataFrame, _report: &mut RunReport) -> Result<()> {
        transforms::align_headers(df, &self.columns)
    }
}

/// Add missing declared columns as all-null.
pub struct EnsureColumns {
    pub columns: Vec<String>,
}

impl EnsureColumns {
    pub fn new(columns: &[&str]) -> Self {
        Self {
            columns: owned(columns),
        }
    }
}

impl NormalizeStep for EnsureColumns {
    fn step_name(&self) -> &str {
        "ensure_columns"
    }

    fn apply(&self, df: &mut DataFrame, _report: &mut RunReport) -> Result<()> {
        transforms::ensure_columns(df, &self.columns)
    }
}

/// Null out target columns on rows where the trigger is filled.
pub struct ConditionalClear {
    pub trigger: String,
    pub targets: Vec<String>,
}

impl ConditionalClear {
    pub fn new(trigger: &str, targets: &[&str]) -> Self {
        Self {
            trigger: trigger.to_string(),
            targets: owned(targets),
        }
    }
}

impl NormalizeStep for ConditionalClear {
    fn step_name(&self) -> &str {
        "conditional_clear"
    }

    fn apply(&self, df: &mut DataFrame, _report: &mut RunReport) -> Result<()> {
        transforms::conditional_clear(df, &self.trigger, &self.targets)
    }
}

/// Report rows where the trigger is filled but a companion is not.
pub struct RequireCompanions {
    pub trigger: String,
    pub companions: Vec<String>,
}

impl RequireCompanions {
    pub fn new(trigger: &str, companions: &[&str]) -> Self {
        Self {
            trigger: trigger.to_string(),
            companions: owned(companions),
        }
    }
}

impl NormalizeStep for RequireCompanions {
    fn step_name(&self) -> &str {
        "require_companions"
    }

    fn apply(&self, df: &mut DataFrame, report: &mut RunReport) -> Result<()> {
        transforms::require_companions(df, &self.trigger, &self.companions, report);
        Ok(())
    }
}

/// Replace an all-empty column with a scalar default.
pub struct DefaultEmptyColumn {
    pub column: String,
    pub fill: String,
}

impl DefaultEmptyColumn {
    pub fn new(column: &str, fill: &str) -> Self {
        Self {
            column: column.to_string(),
            fill: fill.to_string(),
        }
    }
}

impl NormalizeStep for DefaultEmptyColumn {
    fn step_name(&self) -> &str {
        "default_empty_column"
    }

    fn apply(&self, df: &mut DataFrame, _report: &mut RunReport) -> Result<()> {
        transforms::default_empty_column(df, &self.column, &self.fill)
    }
}

/// Left-pad short identifiers with zeros.
pub struct ZeroPad {
    pub column: String,
    pub width: usize,
}

impl ZeroPad {
    pub fn new(column: &str, width: usize) -> Self {
        Self {
            column: column.to_string(),
            width,
        }
    }
}

impl NormalizeStep for ZeroPad {
    fn step_name(&self) -> &str {
        "zero_pad"
    }

    fn apply(&self, df: &mut DataFrame, _report: &mut RunReport) -> Result<()> {
        transforms::zero_pad_column(df, &self.column, self.width)
    }
}

/// Report duplicate registration numbers.
pub struct FlagDuplicates {
    pub column: String,
}

impl FlagDuplicates {
    pub fn new(column: &str) -> Self {
        Self {
            column: column.to_string(),
        }
    }
}

impl NormalizeStep for FlagDuplicates {
    fn step_name(&self) -> &str {
        "flag_duplicates"
    }

    fn apply(&self, df: &mut DataFrame, report: &mut RunReport) -> Result<()> {
        transforms::flag_duplicates(df, &self.column, report);
        Ok(())
    }
}

/// Report cells containing the export field separator.
pub struct FlagDelimiter {
    pub delimiter: char,
}

impl FlagDelimiter {
    pub fn new(delimiter: char) -> Self {
        Self { delimiter }
    }
}

impl NormalizeStep for FlagDelimiter {
    fn step_name(&self) -> &str {
        "flag_delimiter"
    }

    fn apply(&self, df: &mut DataFrame, report: &mut RunReport) -> Result<()> {
        transforms::flag_delimiter(df, self.delimiter, report);
        Ok(())
    }
}

/// Report registration numbers without the mandated digit count.
pub struct CheckRegistrationFormat {
    pub column: String,
    pub width: usize,
}

impl CheckRegistrationFormat {
    pub fn new(column: &str, width: usize) -> Self {
        Self {
            column: column.to_string(),
            width,
        }
    }
}

impl NormalizeStep for CheckRegistrationFormat {
    fn step_name(&self) -> &str {
        "check_registration_format"
    }

    fn apply(&self, df: &mut DataFrame, report: &mut RunReport) -> Result<()> {
        transforms::check_registration_format(df, &self.column, self.width, report);
        Ok(())
    }
}

/// Assign a constant, optionally gated on another column's presence.
pub struct SetConstant {
    pub column: String,
    pub value: String,
    pub only_where_present: Option<String>,
}

impl SetConstant {
    pub fn new(column: &str, value: &str) -> Self {
        Self {
            column: column.to_string(),
            value: value.to_string(),
            only_where_present: None,
        }
    }

    pub fn where_present(mut self, trigger: &str) -> Self {
        self.only_where_present = Some(trigger.to_string());
        self
    }
}

impl NormalizeStep for SetConstant {
    fn step_name(&self) -> &str {
        "set_constant"
    }

    fn apply(&self, df: &mut DataFrame, _report: &mut RunReport) -> Result<()> {
        transforms::set_constant(
            df,
            &self.column,
            &self.value,
            self.only_where_present.as_deref(),
        )
    }
}

/// Copy a column into another.
pub struct CopyColumn {
    pub source: String,
    pub target: String,
}

impl CopyColumn {
    pub fn new(source: &str, target: &str) -> Self {
        Self {
            source: source.to_string(),
            target: target.to_string(),
        }
    }
}

impl NormalizeStep for CopyColumn {
    fn step_name(&self) -> &str {
        "copy_column"
    }

    fn apply(&self, df: &mut DataFrame, _report: &mut RunReport) -> Result<()> {
        transforms::copy_column(df, &self.source, &self.target)
    }
}

/// Restore exponential identifier strings to plain digits.
pub struct RepairExponentNotation {
    pub column: String,
}

impl RepairExponentNotation {
    pub fn new(column: &str) -> Self {
        Self {
            column: column.to_string(),
        }
    }
}

impl NormalizeStep for RepairExponentNotation {
    fn step_name(&self) -> &str {
        "repair_exponent_notation"
    }

    fn apply(&self, df: &mut DataFrame, _report: &mut RunReport) -> Result<()> {
        repair_exponent_column(df, &self.column)
    }
}

/// Derive a flag value on rows where a source column is filled.
pub struct DeriveFlag {
    pub source: String,
    pub target: String,
    pub value: String,
}

impl DeriveFlag {
    pub fn new(source: &str, target: &str, value: &str) -> Self {
        Self {
            source: source.to_string(),
            target: target.to_string(),
            value: value.to_string(),
        }
    }
}

impl NormalizeStep for DeriveFlag {
    fn step_name(&self) -> &str {
        "derive_flag"
    }

    fn apply(&self, df: &mut DataFrame, _report: &mut RunReport) -> Result<()> {
        transforms::derive_flag(df, &self.source, &self.target, &self.value)
    }
}

/// Drop rows where a column is empty.
pub struct DropRowsWhereEmpty {
    pub column: String,
}

impl DropRowsWhereEmpty {
    pub fn new(column: &str) -> Self {
        Self {
            column: column.to_string(),
        }
    }
}

impl NormalizeStep for DropRowsWhereEmpty {
    fn step_name(&self) -> &str {
        "drop_rows_where_empty"
    }

    fn apply(&self, df: &mut DataFrame, _report: &mut RunReport) -> Result<()> {
        transforms::drop_rows_where_empty(df, &self.column)
    }
}

/// Reduce and reorder the frame to the export column list.
pub struct SelectColumns {
    pub columns: Vec<String>,
}

impl SelectColumns {
    pub fn new(columns: Vec<String>) -> Self {
        Self { columns }
    }
}

impl NormalizeStep for SelectColumns {
    fn step_name(&self) -> &str {
        "select_columns"
    }

    fn apply(&self, df: &mut DataFrame, _report: &mut RunReport) -> Result<()> {
        transforms::select_columns(df, &self.columns)
    }
}
