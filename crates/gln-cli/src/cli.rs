//! CLI argument definitions for the registry pipelines.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "gln-registry",
    version,
    about = "GLN registry pipelines - normalize, validate, and export registry feeds",
    long_about = "Normalize and validate registry mutation feeds.\n\n\
                  Each run picks up a feed's source document, applies the feed's\n\
                  business rules, validates the records against the field contract,\n\
                  and writes delimited exports plus a findings report."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run one feed's pipeline: fetch, normalize, validate, export.
    Run(RunArgs),

    /// List the configured feeds and their contracts.
    Feeds,
}

#[derive(Parser)]
pub struct RunArgs {
    /// Feed code to run (company, location, plantion, edibulb).
    #[arg(value_name = "FEED")]
    pub feed: String,

    /// Directory the fetch collaborators drop source documents into.
    #[arg(long = "source-dir", value_name = "DIR", default_value = "source")]
    pub source_dir: PathBuf,

    /// Explicit source file(s); skips directory discovery.
    #[arg(long = "input", value_name = "FILE")]
    pub input: Vec<PathBuf>,

    /// Output directory for export artifacts (default: <SOURCE_DIR>/output).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Normalize and validate without writing any artifact.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
