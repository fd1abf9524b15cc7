//! Benchmark errors
//!
//! Every variant is fatal to the whole benchmark run.

use std::process::ExitStatus;
use thiserror::Error;

/// Errors that abort a benchmark run
#[derive(Debug, Error)]
pub enum BenchError {
    /// Run count or target registry is unusable
    #[error("Invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    /// Target could not be launched or exited non-zero
    #[error("Target '{target}' failed: `{command}` {}: {}", describe_status(.status), describe_stderr(.stderr))]
    Invocation {
        target: String,
        command: String,
        /// `None` when the command could not be launched at all
        status: Option<ExitStatus>,
        stderr: String,
    },

    /// Target stdout was not valid JSON
    #[error("Target '{target}' produced malformed output: {reason}")]
    MalformedOutput { target: String, reason: String },
}

impl BenchError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        BenchError::InvalidConfiguration {
            message: message.into(),
        }
    }

    /// Exit code of the failed invocation, if it ran and exited normally
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            BenchError::Invocation {
                status: Some(status),
                ..
            } => status.code(),
            _ => None,
        }
    }
}

fn describe_status(status: &Option<ExitStatus>) -> String {
    match status {
        Some(status) => match status.code() {
            Some(code) => format!("exited with status {}", code),
            None => format!("terminated abnormally ({})", status),
        },
        None => "could not be launched".to_string(),
    }
}

fn describe_stderr(stderr: &str) -> String {
    let trimmed = stderr.trim();
    if trimmed.is_empty() {
        "(no stderr output)".to_string()
    } else {
        trimmed.to_string()
    }
}
