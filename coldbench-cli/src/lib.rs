#![warn(missing_docs)]
//! Coldbench CLI Library
//!
//! Entry point for the `coldbench` binary: parses `--runs`, loads the target
//! registry, benchmarks every target sequentially and prints the table.
//!
//! # Example
//!
//! ```ignore
//! fn main() {
//!     if let Err(e) = coldbench_cli::run() {
//!         eprintln!("Error: {e}");
//!         std::process::exit(1);
//!     }
//! }
//! ```

mod config;
mod error;
mod invoker;
mod registry;
mod runner;

pub use config::*;
pub use error::BenchError;
pub use invoker::{Invoker, ProcessInvoker, validate_json_output};
pub use registry::{RunCount, Target, TargetRegistry};
pub use runner::Runner;

use clap::Parser;
use coldbench_report::{Report, format_table};
use std::io::{IsTerminal, Write};

/// Coldbench CLI arguments
#[derive(Parser, Debug, Default)]
#[command(name = "coldbench")]
#[command(
    author,
    version,
    about = "Coldbench - cold start and warm invocation latency of handler processes"
)]
pub struct Cli {
    /// Number of times to invoke each target (default: 3)
    #[arg(long, allow_negative_numbers = true, value_name = "RUNS")]
    pub runs: Option<i64>,
}

/// Run the Coldbench CLI with arguments from the process command line.
///
/// # Returns
/// Returns `Ok(())` on success, or the error that aborted the run.
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    run_with_cli(cli)
}

/// Run the Coldbench CLI with pre-parsed arguments.
pub fn run_with_cli(cli: Cli) -> anyhow::Result<()> {
    init_logging();

    let config = ColdbenchConfig::discover()?.unwrap_or_default();
    let show_progress = std::io::stderr().is_terminal();
    let report = run_benchmarks(&cli, &config, ProcessInvoker::new(), show_progress)?;

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(format_table(&report).as_bytes())?;
    stdout.flush()?;
    Ok(())
}

/// Validate the configuration and benchmark every target.
///
/// The run count is checked before the registry is built, so an invalid
/// `--runs` never launches a process.
pub fn run_benchmarks<I: Invoker>(
    cli: &Cli,
    config: &ColdbenchConfig,
    invoker: I,
    show_progress: bool,
) -> Result<Report, BenchError> {
    let runs = RunCount::try_from(config.resolve_runs(cli.runs))?;
    let registry = TargetRegistry::from_config(config)?;

    Runner::new(invoker)
        .with_progress(show_progress)
        .run_all(&registry, runs)
}

/// Log to stderr so the table on stdout stays clean
fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("coldbench=info")
        .with_writer(std::io::stderr)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use coldbench_stats::Measurement;
    use std::cell::Cell;
    use std::rc::Rc;

    /// Counts invocations through a shared cell
    struct SpyInvoker(Rc<Cell<usize>>);

    impl Invoker for SpyInvoker {
        fn invoke(&mut self, _target: &Target) -> Result<Measurement, BenchError> {
            self.0.set(self.0.get() + 1);
            Ok(Measurement::from_secs_f64(0.001))
        }
    }

    #[test]
    fn test_cli_parses_runs() {
        let cli = Cli::try_parse_from(["coldbench", "--runs", "5"]).unwrap();
        assert_eq!(cli.runs, Some(5));

        let cli = Cli::try_parse_from(["coldbench", "--runs", "-2"]).unwrap();
        assert_eq!(cli.runs, Some(-2));

        let cli = Cli::try_parse_from(["coldbench"]).unwrap();
        assert_eq!(cli.runs, None);
    }

    #[test]
    fn test_cli_rejects_other_flags() {
        assert!(Cli::try_parse_from(["coldbench", "--verbose"]).is_err());
        assert!(Cli::try_parse_from(["coldbench", "--runs", "three"]).is_err());
    }

    #[test]
    fn test_invalid_runs_spawns_nothing() {
        for bad in [0, -1] {
            let calls = Rc::new(Cell::new(0));
            let cli = Cli { runs: Some(bad) };
            let err = run_benchmarks(
                &cli,
                &ColdbenchConfig::default(),
                SpyInvoker(calls.clone()),
                false,
            )
            .unwrap_err();

            assert!(matches!(err, BenchError::InvalidConfiguration { .. }));
            assert_eq!(calls.get(), 0);
        }
    }

    #[test]
    fn test_invalid_runs_checked_before_registry() {
        let config = ColdbenchConfig {
            runner: RunnerConfig { runs: Some(0) },
            targets: vec![TargetConfig {
                name: "x".to_string(),
                command: Vec::new(),
            }],
        };
        let err = run_benchmarks(&Cli::default(), &config, ProcessInvoker::new(), false)
            .unwrap_err();
        assert!(err.to_string().contains("--runs must be at least 1"));
    }

    #[test]
    fn test_default_runs_per_target() {
        let calls = Rc::new(Cell::new(0));
        let report = run_benchmarks(
            &Cli::default(),
            &ColdbenchConfig::default(),
            SpyInvoker(calls.clone()),
            false,
        )
        .unwrap();

        // Two built-in targets, three runs each
        assert_eq!(report.rows.len(), 2);
        assert_eq!(calls.get(), 6);
        assert!(report.rows.iter().all(|r| r.warm_std_dev.is_some()));
    }
}
