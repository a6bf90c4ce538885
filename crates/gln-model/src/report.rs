use serde::{Deserialize, Serialize};

/// Why a cell failed its field rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationKind {
    LengthExceeded,
    InvalidCharacterClass,
}

/// A single field-rule breach found during validation.
///
/// Violations are accumulated and returned alongside the data; they never
/// abort a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    pub column: String,
    /// Zero-based row index within the record set.
    pub row: usize,
    pub kind: ViolationKind,
    pub observed: String,
}

/// A non-fatal finding raised by a normalization step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Advisory {
    /// A trigger column is filled but a companion column is not.
    MissingCompanion { row: usize, column: String },
    /// Rows sharing a value in a registration-number column.
    DuplicateRegistration {
        column: String,
        value: String,
        rows: Vec<usize>,
    },
    /// A cell contains the export field separator and would corrupt a
    /// delimiter-based export.
    DelimiterInCell { column: String, row: usize },
    /// A registration number that does not have the mandated digit count.
    InvalidRegistration {
        column: String,
        row: usize,
        observed: String,
    },
    /// A date column value outside the accepted exchange formats.
    InvalidDateFormat {
        column: String,
        row: usize,
        observed: String,
    },
}

/// Findings report for one pipeline run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunReport {
    pub feed: String,
    pub violations: Vec<Violation>,
    pub advisories: Vec<Advisory>,
}

impl RunReport {
    pub fn new(feed: &str) -> Self {
        Self {
            feed: feed.to_string(),
            violations: Vec::new(),
            advisories: Vec::new(),
        }
    }

    pub fn push_violation(&mut self, violation: Violation) {
        self.violations.push(violation);
    }

    pub fn push_advisory(&mut self, advisory: Advisory) {
        self.advisories.push(advisory);
    }

    pub fn violation_count(&self) -> usize {
        self.violations.len()
    }

    pub fn advisory_count(&self) -> usize {
        self.advisories.len()
    }

    pub fn has_findings(&self) -> bool {
        !self.violations.is_empty() || !self.advisories.is_empty()
    }
}
