//! Walk command configuration

use std::path::PathBuf;

use crate::cli::OutputFormat;
use crate::common::missing_field;
use crate::traversal::TraversalOrder;

/// Configuration for the walk command
#[derive(Debug, Clone)]
pub struct WalkConfig {
    /// Graph file to traverse
    pub file: PathBuf,
    /// Node the traversal starts from
    pub from: String,
    /// Breadth-first or depth-first
    pub order: TraversalOrder,
    pub format: OutputFormat,
}

impl WalkConfig {
    pub fn builder() -> WalkConfigBuilder {
        WalkConfigBuilder::new()
    }
}

#[derive(Default)]
pub struct WalkConfigBuilder {
    file: Option<PathBuf>,
    from: Option<String>,
    order: Option<TraversalOrder>,
    format: Option<OutputFormat>,
}

impl WalkConfigBuilder {
    pub fn new() -> Self {
        Self {
            file: None,
            from: None,
            order: None,
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

    pub fn with_order(mut self, order: TraversalOrder) -> Self {
        self.order = Some(order);
        self
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = Some(format);
        self
    }
}

impl crate::common::ConfigBuilder for WalkConfigBuilder {
    type Config = WalkConfig;

    fn build(self) -> Result<Self::Config, crate::error::WayfinderError> {
        Ok(WalkConfig {
            file: self.file.ok_or_else(|| missing_field("file"))?,
            from: self.from.ok_or_else(|| missing_field("from"))?,
            order: self.order.ok_or_else(|| missing_field("order"))?,
            format: self.format.ok_or_else(|| missing_field("format"))?,
        })
    }
}
