//! Inspect command implementation

use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand, paths_or_current_dir};
use crate::config::InspectConfig;
use crate::error::WayfinderError;

impl FromCommand for InspectConfig {
    fn from_command(command: Commands) -> Result<Self, WayfinderError> {
        match command {
            Commands::Inspect {
                paths,
                format,
                cycle_display,
                error_on_cycles,
            } => InspectConfig::builder()
                .with_paths(paths_or_current_dir(paths))
                .with_format(format.format)
                .with_error_on_cycles(error_on_cycles)
                .with_max_cycles(cycle_display.max_cycles)
                .build(),
            _ => Err(WayfinderError::ConfigurationError {
                message: "Invalid command type for InspectConfig".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(InspectConfig);

/// Execute the inspect command for detecting cycles in graph files
pub fn execute_inspect_command(command: Commands) -> Result<()> {
    let config = InspectConfig::from_command(command)
        .wrap_err("Failed to parse inspect command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::inspect::InspectExecutor;
    InspectExecutor::execute(config)
}
