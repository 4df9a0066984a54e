//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the pipeline
//! configuration from a YAML file.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{TimeclockError, TimeclockResult};

use super::types::{OutputMode, OvernightPolicy, PivotConfig};

/// Loads and provides access to the pipeline configuration.
///
/// A run without a configuration file uses [`ConfigLoader::default`],
/// which is equivalent to loading an empty file.
///
/// # File Format
///
/// ```text
/// output:
///   suffix: "_new"
///   mode: pivot              # pivot | people | normalized
/// time:
///   overnight_policy: next_day   # next_day | reject | absolute
/// logging:
///   level: info
/// ```
///
/// # Example
///
/// ```no_run
/// use timeclock_pivot::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./timeclock.yaml").unwrap();
/// println!("Output suffix: {}", loader.config().output.suffix);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: PivotConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified YAML file.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - The file is missing (`ConfigNotFound`)
    /// - The file contains invalid YAML or unknown enum values (`ConfigParseError`)
    pub fn load<P: AsRef<Path>>(path: P) -> TimeclockResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| TimeclockError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let config = Self::parse(&content, &path_str)?;
        debug!(path = %path_str, ?config, "Loaded configuration");

        Ok(Self { config })
    }

    fn parse(content: &str, path: &str) -> TimeclockResult<PivotConfig> {
        // An empty document is not a mapping, but it is a valid "all defaults" file.
        if content.trim().is_empty() {
            return Ok(PivotConfig::default());
        }

        serde_yaml::from_str(content).map_err(|e| TimeclockError::ConfigParseError {
            path: path.to_string(),
            message: e.to_string(),
        })
    }

    /// Returns the underlying configuration.
    pub fn config(&self) -> &PivotConfig {
        &self.config
    }

    /// Returns the configuration with the output mode replaced.
    pub fn with_output_mode(mut self, mode: OutputMode) -> Self {
        self.config.output.mode = mode;
        self
    }

    /// Returns the configuration with the log level replaced.
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.config.logging.level = level.into();
        self
    }

    /// Returns the configuration with the overnight policy replaced.
    pub fn with_overnight_policy(mut self, policy: OvernightPolicy) -> Self {
        self.config.time.overnight_policy = policy;
        self
    }
}
