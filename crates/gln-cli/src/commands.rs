use anyhow::{Context, Result};
use comfy_table::Table;
use tracing::{info, info_span};

use gln_model::RunReport;
use gln_report::{artifact_name, today_stamp, write_findings};
use gln_standards::{load_default_feeds, load_feed};

use crate::cli::RunArgs;
use crate::pipeline::{export, fetch, ingest, normalize, validate};
use crate::summary::apply_table_style;
use crate::types::FeedRunResult;

pub fn run_feeds() -> Result<()> {
    let feeds = load_default_feeds().context("load feed descriptors")?;
    let mut table = Table::new();
    table.set_header(vec!["Feed", "Label", "Fields", "Partitioned", "Source pattern"]);
    apply_table_style(&mut table);
    for feed in feeds {
        table.add_row(vec![
            feed.code.clone(),
            feed.label.clone().unwrap_or_default(),
            feed.rules.len().to_string(),
            if feed.is_partitioned() { "yes" } else { "no" }.to_string(),
            feed.source_pattern.clone(),
        ]);
    }
    println!("{table}");
    Ok(())
}

pub fn run_feed(args: &RunArgs) -> Result<FeedRunResult> {
    let feed = load_feed(&args.feed).context("load feed descriptor")?;
    let run_span = info_span!("run", feed = %feed.code);
    let _run_guard = run_span.enter();

    let output_dir = args
        .output_dir
        .clone()
        .unwrap_or_else(|| args.source_dir.join("output"));
    let stamp = today_stamp();
    let mut report = RunReport::new(&feed.code);

    let sources = info_span!("fetch").in_scope(|| fetch(&feed, args))?;
    info!(sources = sources.len(), "source documents selected");

    let mut frame = info_span!("ingest").in_scope(|| ingest(&feed, &sources))?;
    let rows_in = frame.height();
    info!(rows = rows_in, columns = frame.width(), "record set built");

    info_span!("normalize").in_scope(|| normalize(&feed, &mut frame, &mut report))?;
    let rows_out = frame.height();
    info!(
        rows = rows_out,
        advisories = report.advisory_count(),
        "normalization applied"
    );

    info_span!("validate").in_scope(|| validate(&feed, &frame, &mut report));
    info!(violations = report.violation_count(), "validation finished");

    let (mut artifacts, partition) = info_span!("export").in_scope(|| {
        if !args.dry_run {
            std::fs::create_dir_all(&output_dir)
                .with_context(|| format!("create output dir: {}", output_dir.display()))?;
        }
        export(&feed, &frame, &output_dir, &stamp, args.dry_run)
    })?;

    if !args.dry_run {
        let findings_path = output_dir.join(artifact_name(&feed.code, Some("findings"), &stamp, "json"));
        write_findings(&report, &findings_path)?;
        artifacts.push(findings_path);
    }

    Ok(FeedRunResult {
        feed: feed.code,
        sources,
        rows_in,
        rows_out,
        partition,
        artifacts,
        report,
    })
}
