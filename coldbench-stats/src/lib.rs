#![warn(missing_docs)]
//! Coldbench Statistical Engine
//!
//! Holds the measurement data model and the cold/warm aggregation:
//! - `Measurement`: one wall-clock duration of a single subprocess invocation
//! - `RunResult`: the ordered, non-empty measurements for one target
//! - `summarize`: splits a run into its cold start and warm statistics

mod run;
mod summary;

pub use run::{Measurement, RunResult, StatsError};
pub use summary::{ColdWarmSummary, mean, sample_std_dev, summarize};

/// Number of digits after the decimal point used when rendering seconds
pub const SECONDS_PRECISION: usize = 4;
