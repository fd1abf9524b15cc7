//! Cold/Warm Summary
//!
//! The cold start is exactly the first measurement. Warm statistics are
//! computed over every later measurement with no outlier removal.

use crate::run::RunResult;

/// Derived values for one run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColdWarmSummary {
    /// First measurement, in seconds
    pub cold_start: f64,
    /// Arithmetic mean of the warm runs (absent with zero warm runs)
    pub warm_mean: Option<f64>,
    /// Sample standard deviation of the warm runs (absent with fewer than two)
    pub warm_std_dev: Option<f64>,
    /// Number of warm runs
    pub warm_count: usize,
}

/// Arithmetic mean, or `None` for an empty slice
pub fn mean(samples: &[f64]) -> Option<f64> {
    if samples.is_empty() {
        return None;
    }
    Some(samples.iter().sum::<f64>() / samples.len() as f64)
}

/// Bessel-corrected (N-1) standard deviation, or `None` below two samples
pub fn sample_std_dev(samples: &[f64]) -> Option<f64> {
    if samples.len() < 2 {
        return None;
    }
    let mean = mean(samples)?;
    let variance =
        samples.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (samples.len() - 1) as f64;
    Some(variance.sqrt())
}

/// Summarize a run into its cold start and warm statistics
pub fn summarize(run: &RunResult) -> ColdWarmSummary {
    let warm = run.warm_secs();

    ColdWarmSummary {
        cold_start: run.cold_start().as_secs_f64(),
        warm_mean: mean(&warm),
        warm_std_dev: sample_std_dev(&warm),
        warm_count: warm.len(),
    }
}
