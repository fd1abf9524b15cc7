//! Report Data Structures

use coldbench_stats::ColdWarmSummary;

/// One table row: a target and its derived timings in seconds
#[derive(Debug, Clone, PartialEq)]
pub struct ReportRow {
    /// Target name as configured
    pub target: String,
    /// Cold start time
    pub cold_start: f64,
    /// Mean of the warm runs
    pub warm_mean: Option<f64>,
    /// Sample standard deviation of the warm runs
    pub warm_std_dev: Option<f64>,
}

impl ReportRow {
    /// Build a row from a run summary
    pub fn from_summary(target: impl Into<String>, summary: &ColdWarmSummary) -> Self {
        Self {
            target: target.into(),
            cold_start: summary.cold_start,
            warm_mean: summary.warm_mean,
            warm_std_dev: summary.warm_std_dev,
        }
    }
}

/// Complete benchmark report, rows in target order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Report {
    /// Rows in the order the targets were benchmarked
    pub rows: Vec<ReportRow>,
}

impl Report {
    /// Create an empty report
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a row, keeping insertion order
    pub fn push(&mut self, row: ReportRow) {
        self.rows.push(row);
    }

    /// Look up a row by target name
    pub fn row(&self, target: &str) -> Option<&ReportRow> {
        self.rows.iter().find(|r| r.target == target)
    }
}

impl FromIterator<ReportRow> for Report {
    fn from_iter<I: IntoIterator<Item = ReportRow>>(iter: I) -> Self {
        Self {
            rows: iter.into_iter().collect(),
        }
    }
}
