//! # Wayfinder - Graph Traversal and Cycle Detection
//!
//! Wayfinder walks graphs breadth-first and depth-first, and tells whether a
//! directed or undirected graph contains a cycle. It works on any hashable
//! node identifier and ships a CLI that loads graphs from TOML or JSON files.
//!
//! ## Main Components
//!
//! - **Graph**: Ordered adjacency lists keyed by caller-supplied identifiers
//! - **Traversal**: Breadth-first and depth-first search, BFS shortest paths
//! - **Detector**: Three-color DFS for directed graphs, parent-tracking DFS
//!   for undirected graphs, Floyd's tortoise and hare for iterated functions
//! - **Reports**: Human-readable and machine-readable cycle reports
//!
//! ## Usage
//!
//! ### Example: Traversing a Graph
//!
//! ```
//! use wayfinder::graph::{Graph, Orientation};
//! use wayfinder::traversal::{bfs, dfs, shortest_path};
//!
//! # fn main() -> Result<(), wayfinder::error::WayfinderError> {
//! let graph = Graph::from_edges(
//!     Orientation::Directed,
//!     [("A", "B"), ("A", "C"), ("B", "D"), ("C", "D")],
//! );
//!
//! // Level by level, ties broken by the order edges were added
//! assert_eq!(bfs(&graph, &"A")?, vec!["A", "B", "C", "D"]);
//!
//! // One branch as deep as it goes before backtracking
//! assert_eq!(dfs(&graph, &"A")?, vec!["A", "B", "D", "C"]);
//!
//! // Fewest edges from A to D
//! assert_eq!(shortest_path(&graph, &"A", &"D")?, Some(vec!["A", "B", "D"]));
//!
//! // Starting from a node the graph has never seen is an error
//! assert!(bfs(&graph, &"Z").is_err());
//! # Ok(())
//! # }
//! ```
//!
//! ### Example: Detecting Cycles
//!
//! ```
//! use wayfinder::detector::{
//!     CycleSpan, find_cycle_directed, floyd, has_cycle_directed, has_cycle_undirected,
//! };
//! use wayfinder::graph::{Graph, Orientation};
//!
//! // A -> B -> C -> A is a directed cycle
//! let deps = Graph::from_edges(Orientation::Directed, [("A", "B"), ("B", "C"), ("C", "A")]);
//! assert!(has_cycle_directed(&deps));
//! assert_eq!(find_cycle_directed(&deps), Some(vec!["A", "B", "C"]));
//!
//! // Two paths converging on the same node are not a cycle
//! let diamond = Graph::from_edges(
//!     Orientation::Directed,
//!     [("A", "B"), ("A", "C"), ("B", "D"), ("C", "D")],
//! );
//! assert!(!has_cycle_directed(&diamond));
//!
//! // A path is a tree, a triangle is not
//! let path = Graph::from_edges(Orientation::Undirected, [("A", "B"), ("B", "C")]);
//! assert!(!has_cycle_undirected(&path));
//! let triangle = Graph::from_edges(
//!     Orientation::Undirected,
//!     [("A", "B"), ("B", "C"), ("C", "A")],
//! );
//! assert!(has_cycle_undirected(&triangle));
//!
//! // 2 -> 0 -> 6 -> 3 -> 1 -> 6 -> ... enters a loop of length 3 after 2 steps
//! let table = [6, 6, 0, 1, 4, 3, 3, 4, 0];
//! assert_eq!(floyd(|&x: &usize| table[x], 2), CycleSpan { mu: 2, lambda: 3 });
//! ```
//!
//! ### Example: Checking Graph Files
//!
//! ```no_run
//! use std::path::Path;
//!
//! use wayfinder::core::GraphCheck;
//! use wayfinder::loader::load_graph;
//! use wayfinder::reports::{HumanReportGenerator, ReportGenerator};
//!
//! # fn main() -> miette::Result<()> {
//! let loaded = load_graph(Path::new("graphs/build.graph.toml"))?;
//! let check = GraphCheck::from_loaded(&loaded);
//!
//! if let Some(path) = check.cycle_path() {
//!     println!("⚠️  {} has a cycle: {}", check.name, path);
//! }
//!
//! let report = HumanReportGenerator::new(None).generate_report(&[check])?;
//! println!("{report}");
//! # Ok(())
//! # }
//! ```

// Private modules
mod constants;
mod discovery;
mod progress;
mod utils;

// Public modules
pub mod cli;
pub mod commands;
pub mod common;
pub mod config;
pub mod core;
pub mod detector;
pub mod error;
pub mod executors;
pub mod graph;
pub mod loader;
pub mod reports;
pub mod traversal;

// Main entry point for the library
pub fn run() -> miette::Result<()> {
    use clap::Parser;

    use crate::cli::Cli;
    use crate::commands::execute_command;

    let cli = Cli::parse();
    execute_command(cli.command)
}
