//! Check configuration
//!
//! All options for one cycle-detection run, assembled from the CLI with a
//! validating builder.

use std::path::PathBuf;

use crate::cli::{Cli, OutputFormat};
use crate::common::ConfigBuilder;
use crate::error::IncludeCyclesError;

/// Configuration for a cycle-detection run
#[derive(Debug, Clone)]
pub struct CheckIncludesConfig {
    /// Files, directories or glob patterns to scan
    pub paths: Vec<PathBuf>,
    /// Root prefix stripped during identifier normalization
    pub strip_prefix: String,
    /// Output format for the report
    pub format: OutputFormat,
    /// Maximum number of cycles to display (None = all)
    pub max_cycles: Option<usize>,
    /// Enumeration cap for pathological graphs (None = unbounded)
    pub cycle_limit: Option<usize>,
    /// Suppress stderr progress output
    pub quiet: bool,
}

impl CheckIncludesConfig {
    pub fn builder() -> CheckIncludesConfigBuilder {
        CheckIncludesConfigBuilder::new()
    }

    /// Build the configuration from parsed CLI arguments
    pub fn from_cli(cli: Cli) -> Result<Self, IncludeCyclesError> {
        Self::builder()
            .with_paths(cli.paths)
            .with_strip_prefix(cli.strip_prefix)
            .with_format(cli.format.format)
            .with_max_cycles(cli.cycle_display.max_cycles)
            .with_cycle_limit(cli.cycle_display.cycle_limit)
            .with_quiet(cli.quiet)
            .build()
    }
}

#[derive(Default)]
pub struct CheckIncludesConfigBuilder {
    paths: Option<Vec<PathBuf>>,
    strip_prefix: Option<String>,
    format: Option<OutputFormat>,
    max_cycles: Option<Option<usize>>,
    cycle_limit: Option<Option<usize>>,
    quiet: Option<bool>,
}

impl CheckIncludesConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_paths(mut self, paths: Vec<PathBuf>) -> Self {
        self.paths = Some(paths);
        self
    }

    pub fn with_strip_prefix(mut self, strip_prefix: impl Into<String>) -> Self {
        self.strip_prefix = Some(strip_prefix.into());
        self
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = Some(format);
        self
    }

    pub fn with_max_cycles(mut self, max_cycles: Option<usize>) -> Self {
        self.max_cycles = Some(max_cycles);
        self
    }

    pub fn with_cycle_limit(mut self, cycle_limit: Option<usize>) -> Self {
        self.cycle_limit = Some(cycle_limit);
        self
    }

    pub fn with_quiet(mut self, quiet: bool) -> Self {
        self.quiet = Some(quiet);
        self
    }
}

impl ConfigBuilder for CheckIncludesConfigBuilder {
    type Config = CheckIncludesConfig;

    fn build(self) -> Result<Self::Config, IncludeCyclesError> {
        let paths = self
            .paths
            .ok_or_else(|| IncludeCyclesError::ConfigurationError {
                message: "Missing required field: paths".to_string(),
            })?;

        if paths.is_empty() {
            return Err(IncludeCyclesError::ConfigurationError {
                message: "At least one input path is required".to_string(),
            });
        }

        Ok(CheckIncludesConfig {
            paths,
            strip_prefix: self.strip_prefix.ok_or_else(|| {
                IncludeCyclesError::ConfigurationError {
                    message: "Missing required field: strip_prefix".to_string(),
                }
            })?,
            format: self
                .format
                .ok_or_else(|| IncludeCyclesError::ConfigurationError {
                    message: "Missing required field: format".to_string(),
                })?,
            max_cycles: self.max_cycles.unwrap_or(None),
            cycle_limit: self.cycle_limit.unwrap_or(None),
            quiet: self.quiet.unwrap_or(false),
        })
    }
}
