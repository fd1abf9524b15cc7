#![warn(missing_docs)]
//! # Coldbench
//!
//! Cold start and warm invocation latency measurement for handler processes.
//!
//! Coldbench launches each configured target as a fresh subprocess, several
//! times in a row and strictly one at a time:
//! - **Cold start**: the first invocation, including one-time initialization
//! - **Warm runs**: every later invocation, summarized by mean and sample standard deviation
//! - **Output check**: each invocation must exit 0 and print a JSON value (or nothing)
//!
//! ## Quick Start
//!
//! ```text
//! $ coldbench --runs 5
//! Target    | Cold start (s) | Warm avg (s) | Warm stdev (s)
//! --------- | -------------- | ------------ | --------------
//! fastapi   |         0.8123 |       0.7011 |         0.0132
//! flask     |         0.4410 |       0.3925 |         0.0087
//! ```
//!
//! Targets come from a `coldbench.toml` next to (or above) the working directory:
//!
//! ```toml
//! [[targets]]
//! name = "fastapi"
//! command = ["python3", "-m", "fastapi_function.invoke"]
//! ```

// Re-export the harness
pub use coldbench_cli::{
    BenchError, Cli, ColdbenchConfig, Invoker, ProcessInvoker, RunCount, Runner, Target,
    TargetRegistry, run_benchmarks, run_with_cli,
};

// Re-export stats
pub use coldbench_stats::{
    ColdWarmSummary, Measurement, RunResult, StatsError, mean, sample_std_dev, summarize,
};

// Re-export report
pub use coldbench_report::{Report, ReportRow, format_seconds, format_table};

/// Run the Coldbench CLI harness.
///
/// ```ignore
/// fn main() {
///     coldbench::run().unwrap();
/// }
/// ```
pub use coldbench_cli::run;
