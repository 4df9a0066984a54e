//! Configuration types for the timeclock pivot pipeline.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from a YAML configuration file. Every field has a
//! default, so an empty file (or no file at all) is a valid configuration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which table the run writes to the output file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputMode {
    /// The pivoted job-code × employee matrix with margin totals.
    #[default]
    Pivot,
    /// One flat record per employee: job-code minutes, `Total_mins`, `Name`.
    People,
    /// One flat record per clock event after time normalization.
    Normalized,
}

impl fmt::Display for OutputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputMode::Pivot => write!(f, "pivot"),
            OutputMode::People => write!(f, "people"),
            OutputMode::Normalized => write!(f, "normalized"),
        }
    }
}

impl FromStr for OutputMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pivot" => Ok(OutputMode::Pivot),
            "people" => Ok(OutputMode::People),
            "normalized" => Ok(OutputMode::Normalized),
            other => Err(format!(
                "unknown output mode '{}' (expected pivot, people or normalized)",
                other
            )),
        }
    }
}

/// How to treat a clock-out that is earlier than its clock-in.
///
/// Times carry no date of their own, so such a span is either an overnight
/// shift or a data-entry mistake. The pipeline cannot tell which.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OvernightPolicy {
    /// Wrap into the next day: `(out - in) mod 24h`. Logs a warning.
    #[default]
    NextDay,
    /// Fail the run with `OvernightSpanUnsupported`.
    Reject,
    /// Use the absolute difference `|out - in|`. Logs a warning.
    Absolute,
}

/// Output settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Appended to the input file stem to form the output file name.
    pub suffix: String,
    /// Which table to write.
    pub mode: OutputMode,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            suffix: "_new".to_string(),
            mode: OutputMode::default(),
        }
    }
}

/// Time normalization settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimeConfig {
    /// Policy for clock-outs earlier than clock-ins.
    pub overnight_policy: OvernightPolicy,
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// An `EnvFilter` directive, e.g. `info` or `timeclock_pivot=debug`.
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

/// The complete pipeline configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PivotConfig {
    /// Output settings.
    pub output: OutputConfig,
    /// Time normalization settings.
    pub time: TimeConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PivotConfig::default();
        assert_eq!(config.output.suffix, "_new");
        assert_eq!(config.output.mode, OutputMode::Pivot);
        assert_eq!(config.time.overnight_policy, OvernightPolicy::NextDay);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_output_mode_from_str() {
        assert_eq!("pivot".parse::<OutputMode>(), Ok(OutputMode::Pivot));
        assert_eq!("People".parse::<OutputMode>(), Ok(OutputMode::People));
        assert_eq!(
            "NORMALIZED".parse::<OutputMode>(),
            Ok(OutputMode::Normalized)
        );
        assert!("matrix".parse::<OutputMode>().is_err());
    }

    #[test]
    fn test_output_mode_display_round_trips() {
        for mode in [OutputMode::Pivot, OutputMode::People, OutputMode::Normalized] {
            assert_eq!(mode.to_string().parse::<OutputMode>(), Ok(mode));
        }
    }

    #[test]
    fn test_partial_yaml_keeps_other_defaults() {
        let config: PivotConfig = serde_yaml::from_str("time:\n  overnight_policy: reject\n").unwrap();
        assert_eq!(config.time.overnight_policy, OvernightPolicy::Reject);
        assert_eq!(config.output.suffix, "_new");
        assert_eq!(config.logging.level, "info");
    }
}
