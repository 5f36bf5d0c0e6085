//! Route command configuration

use std::path::PathBuf;

use crate::cli::OutputFormat;
use crate::common::missing_field;

#[derive(Debug, Clone)]
pub struct RouteConfig {
    pub file: PathBuf,
    pub from: String,
    pub to: String,
    pub format: OutputFormat,
}

impl RouteConfig {
    pub fn builder() -> RouteConfigBuilder {
        RouteConfigBuilder::new()
    }
}

#[derive(Default)]
pub struct RouteConfigBuilder {
    file: Option<PathBuf>,
    from: Option<String>,
    to: Option<String>,
    format: Option<OutputFormat>,
}

impl RouteConfigBuilder {
    pub fn new() -> Self {
        Self {
            file: None,
            from: None,
            to: None,
            format: None,
        }
    }

    pub fn with_file(mut self, file: PathBuf) -> Self {
        self.file = Some(file);
        self
    }

    pub fn with_from(mut self, from: impl Into<String>) -> Self {
        self.from = Some(from.into());
        self
    }

    pub fn with_to(mut self, to: impl Into<String>) -> Self {
        self.to = Some(to.into());
        self
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = Some(format);
        self
    }
}

impl crate::common::ConfigBuilder for RouteConfigBuilder {
    type Config = RouteConfig;

    fn build(self) -> Result<Self::Config, crate::error::WayfinderError> {
        Ok(RouteConfig {
            file: self.file.ok_or_else(|| missing_field("file"))?,
            from: self.from.ok_or_else(|| missing_field("from"))?,
            to: self.to.ok_or_else(|| missing_field("to"))?,
            format: self.format.ok_or_else(|| missing_field("format"))?,
        })
    }
}
