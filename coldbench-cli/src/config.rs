//! Configuration loading from coldbench.toml
//!
//! Coldbench configuration can be specified in a `coldbench.toml` file in the project root.
//! The configuration is automatically discovered by walking up from the current directory.

use crate::error::BenchError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Name of the configuration file searched for during discovery
pub const CONFIG_FILE_NAME: &str = "coldbench.toml";

/// Run count used when neither the CLI nor the config file sets one
pub const DEFAULT_RUNS: i64 = 3;

/// Coldbench configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ColdbenchConfig {
    /// Runner configuration
    #[serde(default)]
    pub runner: RunnerConfig,
    /// Benchmark targets; replaces the built-in registry when non-empty
    #[serde(default)]
    pub targets: Vec<TargetConfig>,
}

/// Runner configuration for benchmark execution
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct RunnerConfig {
    /// Default number of invocations per target
    #[serde(default)]
    pub runs: Option<i64>,
}

/// A single `[[targets]]` entry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct TargetConfig {
    /// Human-readable target name shown in the report
    pub name: String,
    /// Program followed by its arguments
    pub command: Vec<String>,
}

impl ColdbenchConfig {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, BenchError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            BenchError::invalid(format!("cannot read {}: {}", path.display(), e))
        })?;
        Self::parse(&content)
            .map_err(|e| BenchError::invalid(format!("{}: {}", path.display(), e)))
    }

    /// Parse configuration from a TOML string
    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Find the nearest config file walking up from `start`
    pub fn find_from(start: impl Into<PathBuf>) -> Option<PathBuf> {
        let mut dir = start.into();
        loop {
            let config_path = dir.join(CONFIG_FILE_NAME);
            if config_path.is_file() {
                return Some(config_path);
            }
            if !dir.pop() {
                return None;
            }
        }
    }

    /// Discover and load configuration by walking up from the current directory.
    ///
    /// Returns `Ok(None)` when no file exists; a file that fails to parse is an error.
    pub fn discover() -> Result<Option<Self>, BenchError> {
        let Ok(cwd) = std::env::current_dir() else {
            return Ok(None);
        };
        match Self::find_from(cwd) {
            Some(path) => {
                tracing::debug!(path = %path.display(), "loading configuration");
                Self::load(&path).map(Some)
            }
            None => Ok(None),
        }
    }

    /// Resolve the run count: CLI wins, then the config file, then the default
    pub fn resolve_runs(&self, cli_runs: Option<i64>) -> i64 {
        cli_runs.or(self.runner.runs).unwrap_or(DEFAULT_RUNS)
    }

    /// Generate a default configuration as TOML string
    pub fn default_toml() -> String {
        r#"# Coldbench Configuration

[runner]
# Invocations per target; the first one is the cold start
runs = 3

# Each target is launched once per run with no arguments beyond `command`.
# It must print one JSON value (or nothing) to stdout and exit 0.
[[targets]]
name = "fastapi"
command = ["python3", "-m", "fastapi_function.invoke"]

[[targets]]
name = "flask"
command = ["python3", "-m", "flask_function.invoke"]
"#
        .to_string()
    }
}
