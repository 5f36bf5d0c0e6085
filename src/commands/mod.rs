//! Command implementations for the wayfinder CLI
//!
//! This module contains the implementations for each CLI command:
//! - walk: Traverse a graph breadth-first or depth-first
//! - route: Find the fewest-edge path between two nodes
//! - inspect: Detect cycles in discovered graph files
//! - render: Render a graph as ASCII, Mermaid or DOT

pub mod inspect;
pub mod render;
pub mod route;
pub mod walk;

use miette::Result;

use crate::cli::Commands;

/// Execute a command based on CLI input
pub fn execute_command(command: Commands) -> Result<()> {
    match &command {
        Commands::Walk { .. } => walk::execute_walk_command(command),
        Commands::Route { .. } => route::execute_route_command(command),
        Commands::Inspect { .. } => inspect::execute_inspect_command(command),
        Commands::Render { .. } => render::execute_render_command(command),
    }
}
