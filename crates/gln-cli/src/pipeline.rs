//! Pipeline stages: fetch, ingest, normalize, validate, export.
//!
//! Each stage is a free function so the orchestration in `commands` reads
//! as the run's state machine. Violations and advisories accumulate in the
//! shared [`RunReport`]; only fetch/ingest failures abort a run.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use polars::prelude::DataFrame;
use tracing::debug;

use gln_core::partition::{Partitioned, partition_by_presence};
use gln_ingest::{
    build_frame, build_merged_frame, find_all_sources, find_latest_source, read_delimited_table,
    read_packed_table,
};
use gln_model::{Feed, RunReport};
use gln_report::{artifact_name, write_delimited};

use crate::cli::RunArgs;

/// Stage 1: locate the source documents for this run.
///
/// Explicit `--input` files bypass discovery. Merge feeds take every match
/// in the source directory; the rest take the newest only. No match is
/// fatal.
pub fn fetch(feed: &Feed, args: &RunArgs) -> Result<Vec<PathBuf>> {
    if !args.input.is_empty() {
        return Ok(args.input.clone());
    }
    let sources = if feed.merge_sources {
        find_all_sources(&args.source_dir, &feed.source_pattern)?
    } else {
        vec![find_latest_source(&args.source_dir, &feed.source_pattern)?]
    };
    Ok(sources)
}

/// Stage 2: read the source documents into one record-set frame.
pub fn ingest(feed: &Feed, sources: &[PathBuf]) -> Result<DataFrame> {
    let mut tables = Vec::with_capacity(sources.len());
    for path in sources {
        let table = if feed.packed {
            read_packed_table(path)?
        } else {
            read_delimited_table(path)?
        };
        debug!(path = %path.display(), rows = table.rows.len(), "ingested source");
        tables.push(table);
    }
    let frame = if tables.len() == 1 {
        build_frame(&tables[0])?
    } else {
        build_merged_frame(&tables)?
    };
    Ok(frame)
}

/// Stage 3: apply the feed's business rules.
pub fn normalize(feed: &Feed, df: &mut DataFrame, report: &mut RunReport) -> Result<()> {
    match gln_core::build_feed_pipeline(feed) {
        Some(pipeline) => pipeline
            .execute(df, report)
            .with_context(|| format!("normalize feed {}", feed.code)),
        None => {
            debug!(feed = %feed.code, "no normalization sequence registered");
            Ok(())
        }
    }
}

/// Stage 4: validate against the field contract. Advisory only.
pub fn validate(feed: &Feed, df: &DataFrame, report: &mut RunReport) {
    let violations = gln_validate::validate(df, &feed.rules);
    for violation in violations {
        report.push_violation(violation);
    }
    gln_validate::check_date_columns(df, &feed.date_columns, report);
}

/// Stage 5: partition (when configured) and write the export artifacts.
///
/// Returns the written paths and the Active/Expired counts for partitioned
/// feeds. A dry run still partitions but writes nothing.
pub fn export(
    feed: &Feed,
    df: &DataFrame,
    output_dir: &Path,
    stamp: &str,
    dry_run: bool,
) -> Result<(Vec<PathBuf>, Option<(usize, usize)>)> {
    let mut artifacts = Vec::new();
    let partition = match &feed.partition_column {
        Some(column) => {
            let Partitioned { active, expired } = partition_by_presence(df, column)?;
            if !dry_run {
                artifacts.push(write_partition(feed, &active, output_dir, "active", stamp)?);
                artifacts.push(write_partition(feed, &expired, output_dir, "expired", stamp)?);
            }
            Some((active.height(), expired.height()))
        }
        None => {
            if !dry_run {
                let name = artifact_name(&feed.code, None, stamp, "csv");
                let path = output_dir.join(name);
                write_delimited(df, &path, feed.export_delimiter)?;
                artifacts.push(path);
            }
            None
        }
    };
    Ok((artifacts, partition))
}

fn write_partition(
    feed: &Feed,
    df: &DataFrame,
    output_dir: &Path,
    part: &str,
    stamp: &str,
) -> Result<PathBuf> {
    let name = artifact_name(&feed.code, Some(part), stamp, "csv");
    let path = output_dir.join(name);
    write_delimited(df, &path, feed.export_delimiter)?;
    Ok(path)
}
