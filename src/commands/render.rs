//! Render command implementation

use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::RenderOptions;
use crate::error::WayfinderError;

impl FromCommand for RenderOptions {
    fn from_command(command: Commands) -> Result<Self, WayfinderError> {
        match command {
            Commands::Render {
                graph,
                format,
                output,
                highlight_cycles,
            } => RenderOptions::builder()
                .with_file(graph.file)
                .with_format(format)
                .with_output(output)
                .with_highlight_cycles(highlight_cycles)
                .build(),
            _ => Err(WayfinderError::ConfigurationError {
                message: "Invalid command type for RenderOptions".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(RenderOptions);

/// Execute the render command for generating a visual graph
pub fn execute_render_command(command: Commands) -> Result<()> {
    let config = RenderOptions::from_command(command)
        .wrap_err("Failed to parse render command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::render::RenderExecutor;
    RenderExecutor::execute(config)
}
