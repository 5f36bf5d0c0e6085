use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::common::{CycleDisplayArgs, FormatArgs, GraphFileArgs};
use crate::traversal::TraversalOrder;

#[derive(Parser)]
#[command(
    name = "wayfinder",
    about = "🧭 Traverse graphs and detect cycles",
    long_about = "wayfinder loads graphs from TOML or JSON files, walks them breadth-first or \
                  depth-first, finds shortest routes, and reports cycles in directed and \
                  undirected graphs.",
    subcommand_required = true,
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Walk a graph from a starting node
    ///
    /// Prints every node reachable from the start node in breadth-first or
    /// depth-first order, breaking ties by the order edges were declared.
    #[command(
        long_about = "Traverse a graph from a starting node. Breadth-first order lists nodes by \
                      non-decreasing distance from the start; depth-first order follows each \
                      branch as deep as it goes before backtracking. Ties are broken by the order \
                      edges appear in the graph file."
    )]
    Walk {
        #[command(flatten)]
        graph: GraphFileArgs,

        /// Node to start from
        #[arg(long, value_name = "NODE", env = "WAYFINDER_FROM")]
        from: String,

        /// Traversal order
        #[arg(
            long,
            value_enum,
            default_value = "bfs",
            env = "WAYFINDER_ORDER"
        )]
        order: TraversalOrder,

        #[command(flatten)]
        format: FormatArgs,
    },

    /// Find the fewest-edge route between two nodes
    #[command(
        long_about = "Find a shortest path, counted in edges, between two nodes using \
                      breadth-first search. Reports when the target cannot be reached."
    )]
    Route {
        #[command(flatten)]
        graph: GraphFileArgs,

        /// Node to start from
        #[arg(long, value_name = "NODE", env = "WAYFINDER_FROM")]
        from: String,

        /// Node to reach
        #[arg(long, value_name = "NODE", env = "WAYFINDER_TO")]
        to: String,

        #[command(flatten)]
        format: FormatArgs,
    },

    /// Check graph files for cycles
    ///
    /// Discovers graph files in the given paths and runs the cycle detector
    /// matching each graph's orientation.
    #[command(
        long_about = "Detect cycles in one or more graph files. Paths may be files, directories \
                      (searched recursively for *.graph.toml and *.graph.json) or glob patterns. \
                      Directed graphs are checked for back edges with a three-color depth-first \
                      search; undirected graphs for non-tree edges."
    )]
    Inspect {
        /// Files, directories or glob patterns to check (defaults to current
        /// directory)
        #[arg(value_name = "PATH")]
        paths: Vec<PathBuf>,

        #[command(flatten)]
        format: FormatArgs,

        #[command(flatten)]
        cycle_display: CycleDisplayArgs,

        /// Exit with error code if cycles found
        #[arg(long, env = "WAYFINDER_ERROR_ON_CYCLES")]
        error_on_cycles: bool,
    },

    /// Render a graph as ASCII, Mermaid or DOT
    #[command(
        long_about = "Render a graph for documentation or debugging. ASCII output prints each \
                      node with its neighbors; Mermaid and Graphviz DOT output can be embedded in \
                      docs or rendered with external tools. A detected cycle can be highlighted."
    )]
    Render {
        #[command(flatten)]
        graph: GraphFileArgs,

        /// Graph format
        #[arg(
            short,
            long,
            value_enum,
            default_value = crate::constants::output::DEFAULT_GRAPH_FORMAT,
            env = "WAYFINDER_GRAPH_FORMAT"
        )]
        format: GraphFormat,

        /// Output file (stdout if not specified)
        #[arg(short, long, env = "WAYFINDER_OUTPUT")]
        output: Option<PathBuf>,

        /// Highlight a detected cycle in the graph
        #[arg(long, env = "WAYFINDER_HIGHLIGHT_CYCLES")]
        highlight_cycles: bool,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, clap::ValueEnum)]
pub enum OutputFormat {
    Human,
    Json,
    Junit,
    #[value(name = "github")]
    GitHub,
}

#[derive(Clone, Copy, Debug, PartialEq, clap::ValueEnum)]
pub enum GraphFormat {
    Ascii,
    Mermaid,
    Dot,
}
