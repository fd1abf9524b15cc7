//! Invoker
//!
//! Launches one fresh process per measurement and times it from just before
//! spawn until the child has exited and both output pipes are drained.

use crate::error::BenchError;
use crate::registry::Target;
use coldbench_stats::Measurement;
use std::process::{Command, Output, Stdio};
use std::time::Instant;

/// Produces one measurement per call
pub trait Invoker {
    /// Run the target once and return its wall-clock duration
    fn invoke(&mut self, target: &Target) -> Result<Measurement, BenchError>;
}

/// Invoker backed by real OS processes
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessInvoker;

impl ProcessInvoker {
    /// Create a process invoker
    pub fn new() -> Self {
        Self
    }
}

impl Invoker for ProcessInvoker {
    fn invoke(&mut self, target: &Target) -> Result<Measurement, BenchError> {
        let mut command = Command::new(target.program());
        command
            .args(target.args())
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        // `output` waits for exit and drains both pipes, so no child outlives the call
        let start = Instant::now();
        let output = command.output();
        let elapsed = start.elapsed();

        let output = output.map_err(|e| BenchError::Invocation {
            target: target.name().to_string(),
            command: target.command_line(),
            status: None,
            stderr: e.to_string(),
        })?;

        check_output(target, &output)?;
        Ok(Measurement::new(elapsed))
    }
}

/// Validate exit status and that stdout is a JSON value
fn check_output(target: &Target, output: &Output) -> Result<(), BenchError> {
    if !output.status.success() {
        return Err(BenchError::Invocation {
            target: target.name().to_string(),
            command: target.command_line(),
            status: Some(output.status),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        });
    }
    validate_json_output(&output.stdout).map_err(|reason| BenchError::MalformedOutput {
        target: target.name().to_string(),
        reason,
    })
}

/// Structural check only: the parsed value is discarded.
///
/// Empty (or whitespace-only) output counts as `{}`.
pub fn validate_json_output(stdout: &[u8]) -> Result<(), String> {
    let text = std::str::from_utf8(stdout).map_err(|e| format!("stdout is not UTF-8: {}", e))?;
    let trimmed = text.trim();
    let payload = if trimmed.is_empty() { "{}" } else { trimmed };

    serde_json::from_str::<serde_json::Value>(payload)
        .map(|_| ())
        .map_err(|e| format!("stdout is not valid JSON ({}): {}", e, preview(trimmed)))
}

fn preview(text: &str) -> String {
    const MAX_CHARS: usize = 80;
    if text.chars().count() <= MAX_CHARS {
        format!("{:?}", text)
    } else {
        let head: String = text.chars().take(MAX_CHARS).collect();
        format!("{:?}...", head)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_json_output() {
        assert!(validate_json_output(br#"{"message": "ok"}"#).is_ok());
        assert!(validate_json_output(b"[1, 2, 3]\n").is_ok());
        assert!(validate_json_output(b"42").is_ok());
        assert!(validate_json_output(b"").is_ok());
        assert!(validate_json_output(b"  \n").is_ok());

        assert!(validate_json_output(b"not json").is_err());
        assert!(validate_json_output(b"{\"a\": 1}{\"b\": 2}").is_err());
        assert!(validate_json_output(&[0xff, 0xfe]).is_err());
    }

    #[test]
    fn test_preview_truncates() {
        let long = "x".repeat(200);
        let shown = preview(&long);
        assert!(shown.ends_with("..."));
        assert!(shown.len() < 100);
    }

    #[cfg(unix)]
    #[test]
    fn test_process_invoker_success() {
        let target = Target::new("echo", "sh", ["-c", r#"echo '{"message": "ok"}'"#]);
        let measurement = ProcessInvoker::new().invoke(&target).unwrap();
        assert!(measurement.as_secs_f64() >= 0.0);
    }

    #[cfg(unix)]
    #[test]
    fn test_process_invoker_nonzero_exit() {
        let target = Target::new("fail", "sh", ["-c", "echo boom >&2; exit 3"]);
        let err = ProcessInvoker::new().invoke(&target).unwrap_err();

        assert_eq!(err.exit_code(), Some(3));
        match err {
            BenchError::Invocation { stderr, .. } => assert_eq!(stderr.trim(), "boom"),
            other => panic!("expected invocation error, got {other:?}"),
        }
    }

    #[test]
    fn test_process_invoker_missing_program() {
        let target = Target::new("ghost", "coldbench-definitely-not-a-real-program", Vec::<String>::new());
        let err = ProcessInvoker::new().invoke(&target).unwrap_err();

        assert!(matches!(err, BenchError::Invocation { status: None, .. }));
    }

    #[cfg(unix)]
    #[test]
    fn test_process_invoker_malformed_output() {
        let target = Target::new("text", "sh", ["-c", "echo not json"]);
        let err = ProcessInvoker::new().invoke(&target).unwrap_err();
        assert!(matches!(err, BenchError::MalformedOutput { .. }));
    }
}
