//! Run Data Model
//!
//! A `RunResult` is created once per target per benchmark execution and is
//! never mutated afterwards. The first measurement is always the cold start.

use std::time::Duration;
use thiserror::Error;

/// Errors raised while assembling run data
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StatsError {
    /// A run must contain at least one measurement
    #[error("run for target '{0}' has no measurements")]
    EmptyRun(String),
}

/// Wall-clock duration of one subprocess invocation
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Measurement(Duration);

impl Measurement {
    /// Wrap an elapsed duration
    pub fn new(elapsed: Duration) -> Self {
        Self(elapsed)
    }

    /// Build a measurement from fractional seconds.
    ///
    /// Negative or non-finite input is clamped to zero.
    pub fn from_secs_f64(secs: f64) -> Self {
        if secs.is_finite() && secs > 0.0 {
            Self(Duration::from_secs_f64(secs))
        } else {
            Self(Duration::ZERO)
        }
    }

    /// The elapsed duration
    pub fn duration(&self) -> Duration {
        self.0
    }

    /// The elapsed duration in seconds
    pub fn as_secs_f64(&self) -> f64 {
        self.0.as_secs_f64()
    }
}

impl From<Duration> for Measurement {
    fn from(elapsed: Duration) -> Self {
        Self::new(elapsed)
    }
}

/// Ordered measurements for one target, in invocation order
#[derive(Debug, Clone, PartialEq)]
pub struct RunResult {
    target: String,
    measurements: Vec<Measurement>,
}

impl RunResult {
    /// Create a run result, rejecting an empty measurement list
    pub fn new(
        target: impl Into<String>,
        measurements: Vec<Measurement>,
    ) -> Result<Self, StatsError> {
        let target = target.into();
        if measurements.is_empty() {
            return Err(StatsError::EmptyRun(target));
        }
        Ok(Self {
            target,
            measurements,
        })
    }

    /// Name of the benchmarked target
    pub fn target(&self) -> &str {
        &self.target
    }

    /// All measurements in invocation order
    pub fn measurements(&self) -> &[Measurement] {
        &self.measurements
    }

    /// Number of recorded invocations (always >= 1)
    pub fn len(&self) -> usize {
        self.measurements.len()
    }

    /// A run is never empty
    pub fn is_empty(&self) -> bool {
        false
    }

    /// The first measurement
    pub fn cold_start(&self) -> Measurement {
        self.measurements[0]
    }

    /// Every measurement after the first
    pub fn warm_runs(&self) -> &[Measurement] {
        &self.measurements[1..]
    }

    /// Warm measurements as seconds, for statistics
    pub fn warm_secs(&self) -> Vec<f64> {
        self.warm_runs().iter().map(Measurement::as_secs_f64).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secs(values: &[f64]) -> Vec<Measurement> {
        values.iter().copied().map(Measurement::from_secs_f64).collect()
    }

    #[test]
    fn test_empty_run_rejected() {
        let err = RunResult::new("fastapi", Vec::new()).unwrap_err();
        assert_eq!(err, StatsError::EmptyRun("fastapi".to_string()));
    }

    #[test]
    fn test_cold_and_warm_split() {
        let run = RunResult::new("flask", secs(&[0.5, 0.1, 0.2])).unwrap();

        assert_eq!(run.len(), 3);
        assert_eq!(run.cold_start(), Measurement::from_secs_f64(0.5));
        assert_eq!(run.warm_runs(), &secs(&[0.1, 0.2])[..]);
    }

    #[test]
    fn test_single_measurement_has_no_warm_runs() {
        let run = RunResult::new("flask", secs(&[0.3])).unwrap();
        assert!(run.warm_runs().is_empty());
        assert!(run.warm_secs().is_empty());
    }

    #[test]
    fn test_order_preserved() {
        // No sorting: the slowest run stays where it happened
        let run = RunResult::new("t", secs(&[0.01, 0.9, 0.02])).unwrap();
        assert_eq!(run.warm_runs()[0], Measurement::from_secs_f64(0.9));
    }

    #[test]
    fn test_negative_seconds_clamped() {
        assert_eq!(Measurement::from_secs_f64(-1.0).as_secs_f64(), 0.0);
        assert_eq!(Measurement::from_secs_f64(f64::NAN).as_secs_f64(), 0.0);
    }
}
