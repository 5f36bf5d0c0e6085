//! Render command configuration

use std::path::PathBuf;

use crate::cli::GraphFormat;
use crate::common::missing_field;

#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub file: PathBuf,
    pub format: GraphFormat,
    pub output: Option<PathBuf>,
    pub highlight_cycles: bool,
}

impl RenderOptions {
    pub fn builder() -> RenderOptionsBuilder {
        RenderOptionsBuilder::new()
    }
}

#[derive(Default)]
pub struct RenderOptionsBuilder {
    file: Option<PathBuf>,
    format: Option<GraphFormat>,
    output: Option<Option<PathBuf>>,
    highlight_cycles: Option<bool>,
}

impl RenderOptionsBuilder {
    pub fn new() -> Self {
        Self {
            file: None,
            format: None,
            output: None,
            highlight_cycles: None,
        }
    }

    pub fn with_file(mut self, file: PathBuf) -> Self {
        self.file = Some(file);
        self
    }

    pub fn with_format(mut self, format: GraphFormat) -> Self {
        self.format = Some(format);
        self
    }

    pub fn with_output(mut self, output: Option<PathBuf>) -> Self {
        self.output = Some(output);
        self
    }

    pub fn with_highlight_cycles(mut self, highlight_cycles: bool) -> Self {
        self.highlight_cycles = Some(highlight_cycles);
        self
    }
}

impl crate::common::ConfigBuilder for RenderOptionsBuilder {
    type Config = RenderOptions;

    fn build(self) -> Result<Self::Config, crate::error::WayfinderError> {
        Ok(RenderOptions {
            file: self.file.ok_or_else(|| missing_field("file"))?,
            format: self.format.ok_or_else(|| missing_field("format"))?,
            output: self.output.ok_or_else(|| missing_field("output"))?,
            highlight_cycles: self
                .highlight_cycles
                .ok_or_else(|| missing_field("highlight_cycles"))?,
        })
    }
}
