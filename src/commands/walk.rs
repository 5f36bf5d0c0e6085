//! Walk command implementation

use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::WalkConfig;
use crate::error::WayfinderError;

impl FromCommand for WalkConfig {
    fn from_command(command: Commands) -> Result<Self, WayfinderError> {
        match command {
            Commands::Walk {
                graph,
                from,
                order,
                format,
            } => WalkConfig::builder()
                .with_file(graph.file)
                .with_from(from)
                .with_order(order)
                .with_format(format.format)
                .build(),
            _ => Err(WayfinderError::ConfigurationError {
                message: "Invalid command type for WalkConfig".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(WalkConfig);

/// Execute the walk command for traversing a graph
pub fn execute_walk_command(command: Commands) -> Result<()> {
    let config =
        WalkConfig::from_command(command).wrap_err("Failed to parse walk command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::walk::WalkExecutor;
    WalkExecutor::execute(config)
}
