#![warn(missing_docs)]
//! Coldbench Report - Result Tables
//!
//! Turns per-target summaries into a fixed-width comparison table:
//! cold start, warm average and warm standard deviation, in seconds.

mod report;
mod table;

pub use report::{Report, ReportRow};
pub use table::{format_seconds, format_table};
