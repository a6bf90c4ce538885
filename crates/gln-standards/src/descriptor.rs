#![deny(unsafe_code)]

use serde::{Deserialize, Serialize};

use gln_model::{CharClass, Feed, FieldRule, RuleTable};

/// On-disk shape of a feed descriptor file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Descriptor {
    pub feed: FeedHeader,
    #[serde(default, rename = "field")]
    pub fields: Vec<FieldEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedHeader {
    pub code: String,
    #[serde(default)]
    pub label: Option<String>,
    pub source_pattern: String,
    #[serde(default)]
    pub packed: bool,
    #[serde(default)]
    pub merge_sources: bool,
    #[serde(default = "default_delimiter")]
    pub export_delimiter: char,
    #[serde(default)]
    pub partition_column: Option<String>,
    #[serde(default)]
    pub date_columns: Vec<String>,
}

fn default_delimiter() -> char {
    ';'
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldEntry {
    pub column: String,
    pub class: CharClass,
    pub max_length: u32,
}

impl Descriptor {
    /// Convert the parsed descriptor into the runtime feed configuration.
    pub fn into_feed(self) -> Feed {
        let mut rules = RuleTable::default();
        for entry in self.fields {
            rules.push(FieldRule::new(entry.column, entry.class, entry.max_length));
        }
        Feed {
            code: self.feed.code,
            label: self.feed.label,
            source_pattern: self.feed.source_pattern,
            packed: self.feed.packed,
            merge_sources: self.feed.merge_sources,
            export_delimiter: self.feed.export_delimiter,
            partition_column: self.feed.partition_column,
            date_columns: self.feed.date_columns,
            rules,
        }
    }

    /// Structural checks that TOML parsing alone cannot express.
    pub fn check(&self) -> Result<(), String> {
        if self.feed.code.trim().is_empty() {
            return Err("feed.code must not be empty".to_string());
        }
        if self.feed.source_pattern.trim().is_empty() {
            return Err("feed.source_pattern must not be empty".to_string());
        }
        for (idx, entry) in self.fields.iter().enumerate() {
            if entry.column.trim().is_empty() {
                return Err(format!("field #{}: column must not be empty", idx + 1));
            }
            if entry.max_length == 0 {
                return Err(format!(
                    "field {}: max_length must be positive",
                    entry.column
                ));
            }
        }
        for (idx, entry) in self.fields.iter().enumerate() {
            let duplicate = self.fields[..idx]
                .iter()
                .any(|prior| prior.column.eq_ignore_ascii_case(&entry.column));
            if duplicate {
                return Err(format!("duplicate field entry: {}", entry.column));
            }
        }
        Ok(())
    }
}
