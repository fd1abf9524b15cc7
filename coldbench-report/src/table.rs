//! Human Table Output
//!
//! Generates the terminal comparison table:
//!
//! ```text
//! Target    | Cold start (s) | Warm avg (s) | Warm stdev (s)
//! --------- | -------------- | ------------ | --------------
//! fastapi   |         0.5123 |       0.4987 |         0.0110
//! ```
//!
//! Column widths are minimums; a long target name widens its own row only.

use crate::report::Report;
use coldbench_stats::SECONDS_PRECISION;

const NAME_WIDTH: usize = 9;
const COLD_WIDTH: usize = 14;
const MEAN_WIDTH: usize = 12;
const STDDEV_WIDTH: usize = 14;

/// Render seconds with fixed precision, or `-` when absent
pub fn format_seconds(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.prec$}", v, prec = SECONDS_PRECISION),
        None => "-".to_string(),
    }
}

/// Format a report as the fixed-width comparison table
pub fn format_table(report: &Report) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "{:<nw$} | {:>cw$} | {:>mw$} | {:>sw$}\n",
        "Target",
        "Cold start (s)",
        "Warm avg (s)",
        "Warm stdev (s)",
        nw = NAME_WIDTH,
        cw = COLD_WIDTH,
        mw = MEAN_WIDTH,
        sw = STDDEV_WIDTH
    ));
    output.push_str(&format!(
        "{} | {} | {} | {}\n",
        "-".repeat(NAME_WIDTH),
        "-".repeat(COLD_WIDTH),
        "-".repeat(MEAN_WIDTH),
        "-".repeat(STDDEV_WIDTH)
    ));

    for row in &report.rows {
        output.push_str(&format!(
            "{:<nw$} | {:>cw$} | {:>mw$} | {:>sw$}\n",
            row.target,
            format_seconds(Some(row.cold_start)),
            format_seconds(row.warm_mean),
            format_seconds(row.warm_std_dev),
            nw = NAME_WIDTH,
            cw = COLD_WIDTH,
            mw = MEAN_WIDTH,
            sw = STDDEV_WIDTH
        ));
    }

    output
}
