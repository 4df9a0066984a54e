//! Configuration loading and management for the timeclock pivot pipeline.
//!
//! This module provides functionality to load the optional YAML
//! configuration: output naming and mode, the overnight-span policy and
//! the log level.
//!
//! # Example
//!
//! ```no_run
//! use timeclock_pivot::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./timeclock.yaml").unwrap();
//! println!("Output mode: {}", config.config().output.mode);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{LoggingConfig, OutputConfig, OutputMode, OvernightPolicy, PivotConfig, TimeConfig};
