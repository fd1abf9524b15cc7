//! Target Registry
//!
//! Maps target names to the command that performs one unit of work.
//! Built once at startup and passed by reference into the runner.

use crate::config::{ColdbenchConfig, TargetConfig};
use crate::error::BenchError;
use std::collections::HashSet;
use std::num::NonZeroUsize;

/// Built-in targets: the two handler modules of the measured project
const BUILTIN_TARGETS: &[(&str, &[&str])] = &[
    ("fastapi", &["python3", "-m", "fastapi_function.invoke"]),
    ("flask", &["python3", "-m", "flask_function.invoke"]),
];

/// A named benchmark subject bound to its command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    name: String,
    program: String,
    args: Vec<String>,
}

impl Target {
    /// Create a target from a program and its arguments
    pub fn new(
        name: impl Into<String>,
        program: impl Into<String>,
        args: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            name: name.into(),
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    fn from_config(config: &TargetConfig) -> Result<Self, BenchError> {
        if config.name.trim().is_empty() {
            return Err(BenchError::invalid("target name must not be empty"));
        }
        let Some((program, args)) = config.command.split_first() else {
            return Err(BenchError::invalid(format!(
                "target '{}' has an empty command",
                config.name
            )));
        };
        Ok(Self::new(&config.name, program, args))
    }

    /// Target name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Program to launch
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Arguments passed to the program
    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Command line for diagnostics
    pub fn command_line(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Ordered, validated set of targets
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetRegistry {
    targets: Vec<Target>,
}

impl TargetRegistry {
    /// Build a registry, rejecting duplicate names and an empty list
    pub fn new(targets: Vec<Target>) -> Result<Self, BenchError> {
        if targets.is_empty() {
            return Err(BenchError::invalid("no benchmark targets configured"));
        }
        let mut seen = HashSet::new();
        for target in &targets {
            if !seen.insert(target.name.as_str()) {
                return Err(BenchError::invalid(format!(
                    "duplicate target name '{}'",
                    target.name
                )));
            }
        }
        Ok(Self { targets })
    }

    /// The registry compiled into the binary
    pub fn builtin() -> Self {
        let targets = BUILTIN_TARGETS
            .iter()
            .map(|(name, command)| Target::new(*name, command[0], command[1..].iter().copied()))
            .collect();
        Self { targets }
    }

    /// Registry from the config file, falling back to the built-in targets
    pub fn from_config(config: &ColdbenchConfig) -> Result<Self, BenchError> {
        if config.targets.is_empty() {
            return Ok(Self::builtin());
        }
        tracing::info!(
            count = config.targets.len(),
            "using targets from configuration file"
        );
        let targets = config
            .targets
            .iter()
            .map(Target::from_config)
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(targets)
    }

    /// Targets in configured order
    pub fn iter(&self) -> std::slice::Iter<'_, Target> {
        self.targets.iter()
    }

    /// Number of targets
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    /// Whether the registry has no targets (never true once validated)
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}

impl<'a> IntoIterator for &'a TargetRegistry {
    type Item = &'a Target;
    type IntoIter = std::slice::Iter<'a, Target>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Number of invocations per target, always at least one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunCount(NonZeroUsize);

impl RunCount {
    /// The count as a plain integer
    pub fn get(self) -> usize {
        self.0.get()
    }
}

impl TryFrom<i64> for RunCount {
    type Error = BenchError;

    fn try_from(runs: i64) -> Result<Self, Self::Error> {
        usize::try_from(runs)
            .ok()
            .and_then(NonZeroUsize::new)
            .map(RunCount)
            .ok_or_else(|| {
                BenchError::invalid(format!("--runs must be at least 1 (got {})", runs))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RunnerConfig;

    fn target_config(name: &str, command: &[&str]) -> TargetConfig {
        TargetConfig {
            name: name.to_string(),
            command: command.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_builtin_registry() {
        let registry = TargetRegistry::builtin();
        let names: Vec<_> = registry.iter().map(Target::name).collect();
        assert_eq!(names, ["fastapi", "flask"]);

        let fastapi = registry.iter().next().unwrap();
        assert_eq!(fastapi.program(), "python3");
        assert_eq!(fastapi.command_line(), "python3 -m fastapi_function.invoke");
    }

    #[test]
    fn test_config_targets_replace_builtin() {
        let config = ColdbenchConfig {
            runner: RunnerConfig::default(),
            targets: vec![
                target_config("b", &["true"]),
                target_config("a", &["sh", "-c", "echo {}"]),
            ],
        };
        let registry = TargetRegistry::from_config(&config).unwrap();
        let names: Vec<_> = registry.iter().map(Target::name).collect();
        assert_eq!(names, ["b", "a"]);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_empty_config_uses_builtin() {
        let registry = TargetRegistry::from_config(&ColdbenchConfig::default()).unwrap();
        assert_eq!(registry, TargetRegistry::builtin());
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let config = ColdbenchConfig {
            runner: RunnerConfig::default(),
            targets: vec![target_config("x", &["true"]), target_config("x", &["false"])],
        };
        let err = TargetRegistry::from_config(&config).unwrap_err();
        assert!(err.to_string().contains("duplicate target name 'x'"));
    }

    #[test]
    fn test_empty_command_rejected() {
        let config = ColdbenchConfig {
            runner: RunnerConfig::default(),
            targets: vec![target_config("x", &[])],
        };
        assert!(matches!(
            TargetRegistry::from_config(&config),
            Err(BenchError::InvalidConfiguration { .. })
        ));
    }

    #[test]
    fn test_run_count_validation() {
        assert_eq!(RunCount::try_from(1i64).unwrap().get(), 1);
        assert_eq!(RunCount::try_from(10i64).unwrap().get(), 10);

        for bad in [0, -1, i64::MIN] {
            assert!(matches!(
                RunCount::try_from(bad),
                Err(BenchError::InvalidConfiguration { .. })
            ));
        }
    }
}
