use std::path::PathBuf;

use gln_model::RunReport;

/// Outcome of a feed pipeline run.
#[derive(Debug)]
pub struct FeedRunResult {
    pub feed: String,
    /// Source documents that contributed rows.
    pub sources: Vec<PathBuf>,
    /// Rows after ingest, before normalization.
    pub rows_in: usize,
    /// Rows after normalization (business rules may drop padding rows).
    pub rows_out: usize,
    /// Active/Expired split, for partitioned feeds.
    pub partition: Option<(usize, usize)>,
    /// Artifacts written (empty on a dry run).
    pub artifacts: Vec<PathBuf>,
    pub report: RunReport,
}

impl FeedRunResult {
    pub fn has_findings(&self) -> bool {
        self.report.has_findings()
    }
}
