use serde::{Deserialize, Serialize};

use crate::rules::RuleTable;

/// Full configuration for one registry feed.
///
/// Loaded from a versioned TOML descriptor; changing a descriptor is a
/// data-contract change, not a code change.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Feed {
    /// Feed code used on the command line and in output names (e.g. "company").
    pub code: String,
    pub label: Option<String>,
    /// Filename prefix the source document must carry (the hand-off from the
    /// external mailbox/share fetch).
    pub source_pattern: String,
    /// True for feeds whose records arrive packed into semicolon blobs with
    /// a two-row header.
    #[serde(default)]
    pub packed: bool,
    /// True for feeds that merge every matching source document into one run
    /// instead of taking the newest only.
    #[serde(default)]
    pub merge_sources: bool,
    /// Field separator used for the export artifact.
    pub export_delimiter: char,
    /// When set, rows are partitioned into Active/Expired by presence of a
    /// value in this column.
    pub partition_column: Option<String>,
    /// Columns whose values must be exchange-format dates.
    #[serde(default)]
    pub date_columns: Vec<String>,
    pub rules: RuleTable,
}

impl Feed {
    /// Returns true if this feed's output is split into Active/Expired sets.
    pub fn is_partitioned(&self) -> bool {
        self.partition_column.is_some()
    }
}
