//! Benchmark Runner
//!
//! Calls the invoker `runs` times per target, strictly one after another, and
//! keeps the measurements in invocation order.
//!
//! ```text
//! TargetRegistry
//!       │
//!       ▼
//! ┌─────────────┐
//! │   Runner    │  N sequential invocations per target
//! └──────┬──────┘
//!        │ RunResult
//!        ▼
//! ┌─────────────┐
//! │  summarize  │  cold start, warm mean, warm stdev
//! └──────┬──────┘
//!        │ ReportRow
//!        ▼
//! ┌─────────────┐
//! │ format_table│
//! └─────────────┘
//! ```

use crate::error::BenchError;
use crate::invoker::Invoker;
use crate::registry::{RunCount, Target, TargetRegistry};
use coldbench_report::{Report, ReportRow};
use coldbench_stats::{RunResult, summarize};
use indicatif::{ProgressBar, ProgressStyle};

/// Drives sequential invocations of each target
pub struct Runner<I> {
    invoker: I,
    show_progress: bool,
}

impl<I: Invoker> Runner<I> {
    /// Create a runner with a hidden progress bar
    pub fn new(invoker: I) -> Self {
        Self {
            invoker,
            show_progress: false,
        }
    }

    /// Show a progress bar on stderr while running
    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    /// Recover the invoker, e.g. to inspect a test double
    pub fn into_invoker(self) -> I {
        self.invoker
    }

    fn progress_bar(&self, len: usize) -> ProgressBar {
        if !self.show_progress {
            return ProgressBar::hidden();
        }
        let pb = ProgressBar::new(len as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template(
                    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}",
                )
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("#>-"),
        );
        pb
    }

    /// Invoke one target `runs` times; the first failure aborts the target
    pub fn run_target(&mut self, target: &Target, runs: RunCount) -> Result<RunResult, BenchError> {
        let pb = self.progress_bar(runs.get());
        pb.set_message(target.name().to_string());

        let mut measurements = Vec::with_capacity(runs.get());
        for index in 0..runs.get() {
            let measurement = match self.invoker.invoke(target) {
                Ok(m) => m,
                Err(e) => {
                    pb.abandon_with_message(format!("{} failed", target.name()));
                    return Err(e);
                }
            };
            tracing::debug!(
                target_name = target.name(),
                run = index + 1,
                cold = (index == 0),
                seconds = measurement.as_secs_f64(),
                "invocation complete"
            );
            measurements.push(measurement);
            pb.inc(1);
        }
        pb.finish_and_clear();

        RunResult::new(target.name(), measurements)
            .map_err(|e| BenchError::invalid(e.to_string()))
    }

    /// Benchmark every target in registry order and build the report.
    ///
    /// Any error aborts the whole run; no partial report is produced.
    pub fn run_all(
        &mut self,
        registry: &TargetRegistry,
        runs: RunCount,
    ) -> Result<Report, BenchError> {
        let mut report = Report::new();
        for target in registry {
            tracing::info!(target_name = target.name(), runs = runs.get(), "benchmarking");
            let run = self.run_target(target, runs)?;
            let summary = summarize(&run);
            tracing::info!(
                target_name = target.name(),
                cold_start = summary.cold_start,
                warm_mean = summary.warm_mean,
                "finished"
            );
            report.push(ReportRow::from_summary(run.target(), &summary));
        }
        Ok(report)
    }
}
