//! Inspect command configuration

use std::path::PathBuf;

use crate::cli::OutputFormat;
use crate::common::missing_field;

/// Configuration for the inspect command
///
/// This struct contains all options for discovering graph files and
/// reporting the cycles found in them.
#[derive(Debug, Clone)]
pub struct InspectConfig {
    /// Files, directories or glob patterns to search for graph files
    pub paths: Vec<PathBuf>,
    /// Output format for the report
    pub format: OutputFormat,
    /// Whether to exit with error code if any graph is cyclic
    pub error_on_cycles: bool,
    /// Maximum number of cyclic graphs to report (None = all)
    pub max_cycles: Option<usize>,
}

impl InspectConfig {
    pub fn builder() -> InspectConfigBuilder {
        InspectConfigBuilder::new()
    }
}

#[derive(Default)]
pub struct InspectConfigBuilder {
    paths: Option<Vec<PathBuf>>,
    format: Option<OutputFormat>,
    error_on_cycles: Option<bool>,
    max_cycles: Option<Option<usize>>,
}

impl InspectConfigBuilder {
    pub fn new() -> Self {
        Self {
            paths: None,
            format: None,
            error_on_cycles: None,
            max_cycles: None,
        }
    }

    pub fn with_paths(mut self, paths: Vec<PathBuf>) -> Self {
        self.paths = Some(paths);
        self
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = Some(format);
        self
    }

    pub fn with_error_on_cycles(mut self, error_on_cycles: bool) -> Self {
        self.error_on_cycles = Some(error_on_cycles);
        self
    }

    pub fn with_max_cycles(mut self, max_cycles: Option<usize>) -> Self {
        self.max_cycles = Some(max_cycles);
        self
    }
}

impl crate::common::ConfigBuilder for InspectConfigBuilder {
    type Config = InspectConfig;

    fn build(self) -> Result<Self::Config, crate::error::WayfinderError> {
        Ok(InspectConfig {
            paths: self.paths.ok_or_else(|| missing_field("paths"))?,
            format: self.format.ok_or_else(|| missing_field("format"))?,
            error_on_cycles: self
                .error_on_cycles
                .ok_or_else(|| missing_field("error_on_cycles"))?,
            max_cycles: self.max_cycles.ok_or_else(|| missing_field("max_cycles"))?,
        })
    }
}
