//! Common functionality shared across commands

use std::path::PathBuf;

use clap::Args;

/// The graph file a single-graph command operates on
#[derive(Args, Debug, Clone)]
pub struct GraphFileArgs {
    /// Graph file to load (TOML or JSON)
    #[arg(value_name = "FILE", env = "WAYFINDER_GRAPH")]
    pub file: PathBuf,
}

/// Common output format arguments
#[derive(Args, Debug, Clone)]
pub struct FormatArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value = crate::constants::output::DEFAULT_FORMAT, env = "WAYFINDER_FORMAT")]
    pub format: crate::cli::OutputFormat,
}

/// Common cycle display arguments
#[derive(Args, Debug, Clone)]
pub struct CycleDisplayArgs {
    /// Maximum number of cyclic graphs to display (shows all by default)
    #[arg(long, env = "WAYFINDER_MAX_CYCLES")]
    pub max_cycles: Option<usize>,
}

/// Paths to search, using the current directory if none were given
pub fn paths_or_current_dir(paths: Vec<PathBuf>) -> Vec<PathBuf> {
    if paths.is_empty() {
        vec![std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))]
    } else {
        paths
    }
}

/// Generic builder trait for configuration objects
pub trait ConfigBuilder: Sized {
    type Config;

    /// Build the configuration, returning an error if validation fails
    fn build(self) -> Result<Self::Config, crate::error::WayfinderError>;
}

/// Trait for configurations that can be created from CLI commands
pub trait FromCommand: Sized {
    /// The command variant that this config can be created from
    fn from_command(command: crate::cli::Commands) -> Result<Self, crate::error::WayfinderError>;
}

/// Macro to implement `TryFrom<Commands>` using [`FromCommand`] trait
#[macro_export]
macro_rules! impl_try_from_command {
    ($config:ty) => {
        impl std::convert::TryFrom<$crate::cli::Commands> for $config {
            type Error = $crate::error::WayfinderError;

            fn try_from(command: $crate::cli::Commands) -> Result<Self, Self::Error> {
                <$config as $crate::common::FromCommand>::from_command(command)
            }
        }
    };
}

/// Builds the error for a builder field left unset
pub(crate) fn missing_field(field: &str) -> crate::error::WayfinderError {
    crate::error::WayfinderError::ConfigurationError {
        message: format!("Missing required field: {field}"),
    }
}
