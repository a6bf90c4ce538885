//! Findings report serialization.

use std::path::Path;

use anyhow::{Context, Result};

use gln_model::RunReport;

/// Write the run's findings as pretty-printed JSON.
pub fn write_findings(report: &RunReport, path: &Path) -> Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("create findings report: {}", path.display()))?;
    serde_json::to_writer_pretty(file, report)
        .with_context(|| format!("serialize findings report: {}", path.display()))?;
    Ok(())
}
