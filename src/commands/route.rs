//! Route command implementation

use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::RouteConfig;
use crate::error::WayfinderError;

impl FromCommand for RouteConfig {
    fn from_command(command: Commands) -> Result<Self, WayfinderError> {
        match command {
            Commands::Route {
                graph,
                from,
                to,
                format,
            } => RouteConfig::builder()
                .with_file(graph.file)
                .with_from(from)
                .with_to(to)
                .with_format(format.format)
                .build(),
            _ => Err(WayfinderError::ConfigurationError {
                message: "Invalid command type for RouteConfig".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(RouteConfig);

/// Execute the route command for finding a shortest path
pub fn execute_route_command(command: Commands) -> Result<()> {
    let config = RouteConfig::from_command(command)
        .wrap_err("Failed to parse route command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::route::RouteExecutor;
    RouteExecutor::execute(config)
}
