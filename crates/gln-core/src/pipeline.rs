//! Ordered step execution for feed normalization.
//!
//! Each feed is normalized by a small, deterministic sequence of steps.
//! Every step implements [`NormalizeStep`] and is executed in order against
//! the same frame and findings report.

use anyhow::Result;
use polars::prelude::DataFrame;
use tracing::debug;

use gln_model::RunReport;

/// A single normalization step.
///
/// Steps that repair data mutate the frame; steps that only observe it push
/// advisories into the report. A step never aborts on a missing column.
pub trait NormalizeStep: Send + Sync {
    /// Human-readable name for this step (for logging/debugging).
    fn step_name(&self) -> &str;

    /// Execute this step.
    fn apply(&self, df: &mut DataFrame, report: &mut RunReport) -> Result<()>;
}

/// An ordered pipeline of normalization steps for one feed.
pub struct FeedPipeline {
    steps: Vec<Box<dyn NormalizeStep>>,
}

impl Default for FeedPipeline {
    fn default() -> Self {
        Self::new()
    }
}

impl FeedPipeline {
    /// Create an empty pipeline.
    pub fn new() -> Self {
        Self { steps: Vec::new() }
    }

    /// Add a step to the end of the pipeline.
    pub fn add_step(mut self, step: Box<dyn NormalizeStep>) -> Self {
        self.steps.push(step);
        self
    }

    /// Execute all steps in order.
    pub fn execute(&self, df: &mut DataFrame, report: &mut RunReport) -> Result<()> {
        for step in &self.steps {
            debug!(step = step.step_name(), rows = df.height(), "normalize");
            step.apply(df, report)?;
        }
        Ok(())
    }

    /// List step names in execution order.
    pub fn step_names(&self) -> Vec<&str> {
        self.steps.iter().map(|step| step.step_name()).collect()
    }
}
